use crate::r#match::Entity;
use nalgebra::Vector2;

impl Entity {
    /// Advances one step of `dt` seconds: acceleration, friction, speed cap, then position.
    pub fn integrate(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.velocity += self.acceleration * dt;
        self.velocity *= self.friction;

        let speed = self.velocity.norm();
        if speed > self.max_speed && speed > 0.0 {
            self.velocity *= self.max_speed / speed;
        }

        self.position += self.velocity * dt;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}

pub fn normalize_or_zero(vector: Vector2<f32>) -> Vector2<f32> {
    let length = vector.norm();
    if length > 0.0 {
        vector / length
    } else {
        Vector2::zeros()
    }
}
