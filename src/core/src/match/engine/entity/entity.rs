use crate::r#match::{Bounds, MatchBall, MatchGoal, MatchPlayer};
use nalgebra::Vector2;
use serde::Serialize;

pub const DEFAULT_FRICTION: f32 = 0.95;

/// Index of an entity inside the field arena. Never owns the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityTag {
    Field,
    Ball,
    Player,
    Goal,
}

#[derive(Debug, Clone)]
pub enum EntityKind {
    Field,
    Ball(MatchBall),
    Player(MatchPlayer),
    Goal(MatchGoal),
}

impl EntityKind {
    pub fn tag(&self) -> EntityTag {
        match self {
            EntityKind::Field => EntityTag::Field,
            EntityKind::Ball(_) => EntityTag::Ball,
            EntityKind::Player(_) => EntityTag::Player,
            EntityKind::Goal(_) => EntityTag::Goal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub acceleration: Vector2<f32>,
    pub max_speed: f32,
    pub friction: f32,
    /// Full width and height of the bounding box.
    pub size: Vector2<f32>,
    pub active: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, position: Vector2<f32>, size: Vector2<f32>, kind: EntityKind) -> Self {
        Entity {
            id,
            position,
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            max_speed: 0.0,
            friction: DEFAULT_FRICTION,
            size,
            active: true,
            kind,
        }
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    #[inline]
    pub fn tag(&self) -> EntityTag {
        self.kind.tag()
    }

    /// The ball is treated as a circle, everything else as a box.
    pub fn half_extents(&self) -> Vector2<f32> {
        match &self.kind {
            EntityKind::Ball(ball) => Vector2::new(ball.radius, ball.radius),
            _ => self.size / 2.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.position, self.half_extents())
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        match (&self.kind, &other.kind) {
            (EntityKind::Ball(a), EntityKind::Ball(b)) => {
                self.distance_to(other) < a.radius + b.radius
            }
            (EntityKind::Ball(ball), _) => Self::circle_touches_box(self.position, ball.radius, &other.bounds()),
            (_, EntityKind::Ball(ball)) => Self::circle_touches_box(other.position, ball.radius, &self.bounds()),
            _ => self.bounds().overlaps(&other.bounds()),
        }
    }

    fn circle_touches_box(center: Vector2<f32>, radius: f32, bounds: &Bounds) -> bool {
        (center - bounds.nearest_point(center)).norm() < radius
    }

    #[inline]
    pub fn distance_to(&self, other: &Entity) -> f32 {
        self.distance_to_point(other.position)
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<f32>) -> f32 {
        (self.position - point).norm()
    }

    /// Angle in radians from this entity towards `point`.
    #[inline]
    pub fn angle_to_point(&self, point: Vector2<f32>) -> f32 {
        (point.y - self.position.y).atan2(point.x - self.position.x)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vector2::new(x, y);
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vector2::new(x, y);
    }

    pub fn add_velocity(&mut self, x: f32, y: f32) {
        self.velocity += Vector2::new(x, y);
    }

    pub fn as_player(&self) -> Option<&MatchPlayer> {
        match &self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut MatchPlayer> {
        match &mut self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_ball(&self) -> Option<&MatchBall> {
        match &self.kind {
            EntityKind::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    pub fn as_ball_mut(&mut self) -> Option<&mut MatchBall> {
        match &mut self.kind {
            EntityKind::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    pub fn as_goal(&self) -> Option<&MatchGoal> {
        match &self.kind {
            EntityKind::Goal(goal) => Some(goal),
            _ => None,
        }
    }

    pub fn as_goal_mut(&mut self) -> Option<&mut MatchGoal> {
        match &mut self.kind {
            EntityKind::Goal(goal) => Some(goal),
            _ => None,
        }
    }
}

/// Borrows two distinct arena slots mutably at once.
pub fn pair_mut(entities: &mut [Entity], a: usize, b: usize) -> Option<(&mut Entity, &mut Entity)> {
    if a == b || a >= entities.len() || b >= entities.len() {
        return None;
    }

    if a < b {
        let (left, right) = entities.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = entities.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchBall, MatchPlayer, PlayerController, PlayerRole, TeamId};

    fn boxed(id: usize, x: f32, y: f32, size: f32) -> Entity {
        Entity::new(EntityId(id), Vector2::new(x, y), Vector2::new(size, size), EntityKind::Field)
    }

    #[test]
    fn test_boxes_intersect_when_overlapping() {
        let a = boxed(0, 0.0, 0.0, 10.0);
        let b = boxed(1, 8.0, 0.0, 10.0);
        let c = boxed(2, 30.0, 0.0, 10.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_ball_uses_nearest_point_on_box() {
        let player = MatchPlayer::entity(
            EntityId(0),
            Vector2::new(100.0, 100.0),
            TeamId::TeamA,
            PlayerRole::Field,
            PlayerController::Human,
        );
        let touching = MatchBall::entity(EntityId(1), Vector2::new(115.0, 100.0));
        let apart = MatchBall::entity(EntityId(2), Vector2::new(117.0, 100.0));

        assert!(touching.intersects(&player));
        assert!(player.intersects(&touching));
        assert!(!apart.intersects(&player));
        assert!(!player.intersects(&apart));
    }

    #[test]
    fn test_two_balls_use_radii() {
        let a = MatchBall::entity(EntityId(0), Vector2::new(0.0, 0.0));
        let b = MatchBall::entity(EntityId(1), Vector2::new(11.0, 0.0));
        let c = MatchBall::entity(EntityId(2), Vector2::new(12.0, 0.0));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_angle_to_point() {
        let entity = boxed(0, 0.0, 0.0, 1.0);

        assert!((entity.angle_to_point(Vector2::new(0.0, 5.0)) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(entity.angle_to_point(Vector2::new(5.0, 0.0)), 0.0);
    }

    #[test]
    fn test_pair_mut_rejects_same_and_out_of_range() {
        let mut entities = vec![boxed(0, 0.0, 0.0, 1.0), boxed(1, 1.0, 0.0, 1.0)];

        assert!(pair_mut(&mut entities, 0, 0).is_none());
        assert!(pair_mut(&mut entities, 0, 2).is_none());

        let (second, first) = pair_mut(&mut entities, 1, 0).unwrap();
        assert_eq!(second.id, EntityId(1));
        assert_eq!(first.id, EntityId(0));
    }
}
