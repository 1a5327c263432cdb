use crate::r#match::{Entity, EntityId, EntityKind, TeamId};
use nalgebra::Vector2;

pub const GOAL_GLOW_MAX: f32 = 1.0;
const GOAL_GLOW_DECAY_PER_SECOND: f32 = 0.1;

/// Feedback only, scoring never reads the glow.
#[derive(Debug, Clone)]
pub struct MatchGoal {
    pub team: TeamId,
    pub glow: f32,
}

impl MatchGoal {
    pub fn new(team: TeamId) -> Self {
        MatchGoal { team, glow: 0.0 }
    }

    pub fn entity(id: EntityId, position: Vector2<f32>, size: Vector2<f32>, team: TeamId) -> Entity {
        Entity::new(id, position, size, EntityKind::Goal(MatchGoal::new(team)))
    }

    pub fn trigger_glow(&mut self) {
        self.glow = GOAL_GLOW_MAX;
    }

    pub fn update(&mut self, dt: f32) {
        if self.glow > 0.0 {
            self.glow = (self.glow - GOAL_GLOW_DECAY_PER_SECOND * dt).max(0.0);
        }
    }
}
