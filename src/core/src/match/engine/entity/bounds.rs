use nalgebra::Vector2;

/// Axis-aligned rectangle, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn from_center(center: Vector2<f32>, half_extents: Vector2<f32>) -> Self {
        Bounds {
            left: center.x - half_extents.x,
            right: center.x + half_extents.x,
            top: center.y - half_extents.y,
            bottom: center.y + half_extents.y,
        }
    }

    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    /// True when `other` lies fully inside these bounds, edges included.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    pub fn nearest_point(&self, point: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            self.left.max(point.x.min(self.right)),
            self.top.max(point.y.min(self.bottom)),
        )
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    pub fn inset(&self, margin: f32) -> Bounds {
        Bounds {
            left: self.left + margin,
            right: self.right - margin,
            top: self.top + margin,
            bottom: self.bottom - margin,
        }
    }

    /// Lower bound wins when the range is inverted, so this never panics.
    pub fn clamp_point(&self, point: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            self.left.max(self.right.min(point.x)),
            self.top.max(self.bottom.min(point.y)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let outer = Bounds::from_center(Vector2::new(30.0, 300.0), Vector2::new(30.0, 40.0));
        let edge = Bounds::from_center(Vector2::new(6.0, 300.0), Vector2::new(6.0, 6.0));
        let poking_out = Bounds::from_center(Vector2::new(5.0, 300.0), Vector2::new(6.0, 6.0));

        assert!(outer.contains(&edge));
        assert!(!outer.contains(&poking_out));
    }

    #[test]
    fn test_clamp_point_with_inverted_range() {
        let bounds = Bounds::from_center(Vector2::new(10.0, 10.0), Vector2::new(5.0, 5.0)).inset(10.0);

        let clamped = bounds.clamp_point(Vector2::new(100.0, -100.0));

        assert_eq!(clamped, Vector2::new(15.0, 15.0));
    }
}
