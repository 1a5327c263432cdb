use crate::r#match::{Entity, PlayerController, normalize_or_zero};
use nalgebra::Vector2;

pub const ACCELERATION_SCALE: f32 = 100.0;

/// Turns the latest intent or input into acceleration, every tick.
pub struct MovementSystem;

impl MovementSystem {
    pub fn update(entities: &mut [Entity]) {
        for index in 0..entities.len() {
            let Some(direction) = Self::desired_direction(entities, index) else {
                continue;
            };

            let entity = &mut entities[index];
            let max_speed = entity.max_speed;

            let Some(player) = entity.as_player_mut() else {
                continue;
            };

            if direction == Vector2::zeros() {
                entity.acceleration = Vector2::zeros();
                continue;
            }

            let sprint = if player.is_sprinting { player.sprint_multiplier } else { 1.0 };
            let speed = max_speed * player.speed * sprint;

            player.direction = direction.y.atan2(direction.x);
            entity.acceleration = direction * speed * ACCELERATION_SCALE;
        }
    }

    fn desired_direction(entities: &[Entity], index: usize) -> Option<Vector2<f32>> {
        let entity = &entities[index];
        if !entity.active {
            return None;
        }

        let player = entity.as_player()?;

        let direction = match player.controller {
            PlayerController::Ai => match player.intent.target_position(entities) {
                Some(target) => {
                    let angle = entity.angle_to_point(target);
                    Vector2::new(angle.cos(), angle.sin())
                }
                None => Vector2::zeros(),
            },
            PlayerController::Human => player.input.direction(),
        };

        Some(normalize_or_zero(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        AiIntent, AiState, AiTarget, EntityId, MatchPlayer, PlayerInput, PlayerRole, TeamId,
    };

    fn player(controller: PlayerController) -> Entity {
        MatchPlayer::entity(
            EntityId(0),
            Vector2::new(100.0, 100.0),
            TeamId::TeamA,
            PlayerRole::Field,
            controller,
        )
    }

    #[test]
    fn test_ai_accelerates_towards_target() {
        let mut entities = vec![player(PlayerController::Ai)];
        entities[0].as_player_mut().unwrap().intent =
            AiIntent::new(AiState::Chasing, AiTarget::Point(Vector2::new(100.0, 300.0)));

        MovementSystem::update(&mut entities);

        assert!(entities[0].acceleration.x.abs() < 1e-2);
        assert!((entities[0].acceleration.y - 80.0 * 0.8 * ACCELERATION_SCALE).abs() < 1e-2);
        assert!((entities[0].as_player().unwrap().direction - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_human_input_is_normalized_and_sprint_applies() {
        let mut entities = vec![player(PlayerController::Human)];
        entities[0].as_player_mut().unwrap().set_input(PlayerInput {
            x: 3.0,
            y: 4.0,
            sprint: true,
            ..Default::default()
        });

        MovementSystem::update(&mut entities);

        let expected = 100.0 * 1.0 * 1.5 * ACCELERATION_SCALE;
        assert!((entities[0].acceleration.norm() - expected).abs() < 1e-1);
        assert!((entities[0].acceleration.x / entities[0].acceleration.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_no_target_clears_acceleration() {
        let mut entities = vec![player(PlayerController::Ai)];
        entities[0].acceleration = Vector2::new(5.0, 5.0);

        MovementSystem::update(&mut entities);

        assert_eq!(entities[0].acceleration, Vector2::zeros());
    }
}
