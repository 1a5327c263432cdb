use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Normalized intent from whatever device drives a human player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub x: f32,
    pub y: f32,
    pub shoot: bool,
    pub pass: bool,
    pub sprint: bool,
}

impl PlayerInput {
    #[inline]
    pub fn direction(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    pub fn clear_actions(&mut self) {
        self.shoot = false;
        self.pass = false;
    }
}
