use crate::r#match::{MatchFieldSize, TeamSide};
use nalgebra::Vector2;

/// Fractions of the field for the four field players, top to bottom.
const FIELD_PLAYER_SLOTS: [f32; 4] = [0.2, 0.4, 0.6, 0.8];

pub struct Formation;

impl Formation {
    pub const FIELD_PLAYERS: usize = FIELD_PLAYER_SLOTS.len();

    /// `None` past the last slot; such players keep their position.
    pub fn field_player_position(side: TeamSide, slot: usize, field_size: MatchFieldSize) -> Option<Vector2<f32>> {
        let x = match side {
            TeamSide::Left => 0.2,
            TeamSide::Right => 0.8,
        };
        let y = FIELD_PLAYER_SLOTS.get(slot)?;

        Some(Vector2::new(field_size.width * x, field_size.height * y))
    }

    pub fn goalkeeper_position(side: TeamSide, field_size: MatchFieldSize) -> Vector2<f32> {
        let x = match side {
            TeamSide::Left => 0.1,
            TeamSide::Right => 0.9,
        };

        Vector2::new(field_size.width * x, field_size.height * 0.5)
    }
}
