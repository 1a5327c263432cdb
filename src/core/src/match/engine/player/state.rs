use crate::r#match::{Entity, EntityId};
use nalgebra::Vector2;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AiState {
    #[default]
    Idle,
    Chasing,
    Supporting,
    Defending,
    Shooting,
    Passing,
    Dribbling,
}

impl Display for AiState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            AiState::Idle => write!(f, "Idle"),
            AiState::Chasing => write!(f, "Chasing"),
            AiState::Supporting => write!(f, "Supporting"),
            AiState::Defending => write!(f, "Defending"),
            AiState::Shooting => write!(f, "Shooting"),
            AiState::Passing => write!(f, "Passing"),
            AiState::Dribbling => write!(f, "Dribbling"),
        }
    }
}

/// Where an agent is heading. Entity targets are looked up every tick, never owned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiTarget {
    Entity(EntityId),
    Point(Vector2<f32>),
}

impl AiTarget {
    pub fn resolve(&self, entities: &[Entity]) -> Option<Vector2<f32>> {
        match self {
            AiTarget::Entity(id) => entities.get(id.0).map(|entity| entity.position),
            AiTarget::Point(point) => Some(*point),
        }
    }
}

/// Written by the decision engine, read by the movement and kick steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiIntent {
    pub state: AiState,
    pub target: Option<AiTarget>,
}

impl AiIntent {
    pub fn new(state: AiState, target: AiTarget) -> Self {
        AiIntent {
            state,
            target: Some(target),
        }
    }

    pub fn target_position(&self, entities: &[Entity]) -> Option<Vector2<f32>> {
        self.target.and_then(|target| target.resolve(entities))
    }
}
