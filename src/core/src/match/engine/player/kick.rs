use crate::r#match::{
    AiState, BallEvent, Entity, EntityId, EventCollection, PlayerController, RandomSource, pair_mut,
};
use log::debug;
use nalgebra::Vector2;
use serde::Serialize;

pub const KICK_COOLDOWN_MS: f32 = 500.0;
const SHOOT_SPEED: f32 = 300.0;
const PASS_SPEED: f32 = 200.0;
const DISPERSION_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KickKind {
    Shoot,
    Pass,
}

impl KickKind {
    pub fn speed(self) -> f32 {
        match self {
            KickKind::Shoot => SHOOT_SPEED,
            KickKind::Pass => PASS_SPEED,
        }
    }
}

pub struct PossessionProtocol;

impl PossessionProtocol {
    /// Proximity tracking and kicks for every active player holding a ball reference.
    pub fn update(
        entities: &mut [Entity],
        random: &mut dyn RandomSource,
        events: &mut EventCollection,
    ) {
        for index in 0..entities.len() {
            let entity = &entities[index];
            if !entity.active {
                continue;
            }

            let Some(player) = entity.as_player() else {
                continue;
            };

            let Some(ball_id) = player.ball else {
                continue;
            };

            // AI players turn towards their target before kicking
            let facing = match player.intent.state {
                AiState::Shooting | AiState::Passing if player.is_ai() => player
                    .intent
                    .target_position(entities)
                    .map(|target| entity.angle_to_point(target)),
                _ => None,
            };

            let Some((player_entity, ball_entity)) = pair_mut(entities, index, ball_id.0) else {
                continue;
            };

            if ball_entity.as_ball().is_none() {
                continue;
            }

            if !Self::track(player_entity, ball_entity, events) {
                continue;
            }

            let Some(kind) = Self::pending_kick(player_entity) else {
                continue;
            };

            if let (Some(angle), Some(player)) = (facing, player_entity.as_player_mut()) {
                player.direction = angle;
            }

            Self::kick(player_entity, ball_entity, kind, random, events);
        }
    }

    /// Returns whether the ball is within kicking range.
    pub fn track(player_entity: &mut Entity, ball_entity: &mut Entity, events: &mut EventCollection) -> bool {
        let player_id = player_entity.id;
        let distance = player_entity.distance_to(ball_entity);

        let (Some(player), Some(ball)) = (player_entity.as_player_mut(), ball_entity.as_ball_mut()) else {
            return false;
        };

        if distance > player.kick_range {
            // the ball keeps its possessor until a kick, a timeout or a goal
            player.possessing = false;
            return false;
        }

        player.possessing = true;

        if !ball.is_owned_by(player_id) {
            ball.set_possessor(Some(player_id));
            events.add_ball_event(BallEvent::Claimed(player_id));
        }

        true
    }

    fn pending_kick(player_entity: &Entity) -> Option<KickKind> {
        let player = player_entity.as_player()?;

        if !player.can_kick() {
            return None;
        }

        match player.controller {
            PlayerController::Human if player.input.shoot => Some(KickKind::Shoot),
            PlayerController::Human if player.input.pass => Some(KickKind::Pass),
            PlayerController::Ai => match player.intent.state {
                AiState::Shooting => Some(KickKind::Shoot),
                AiState::Passing => Some(KickKind::Pass),
                _ => None,
            },
            _ => None,
        }
    }

    /// Sends the ball along the player's facing angle. No-op unless possessing and off cooldown.
    pub fn kick(
        player_entity: &mut Entity,
        ball_entity: &mut Entity,
        kind: KickKind,
        random: &mut dyn RandomSource,
        events: &mut EventCollection,
    ) -> bool {
        let player_id: EntityId = player_entity.id;

        let (Some(player), Some(ball)) = (player_entity.as_player_mut(), ball_entity.as_ball_mut()) else {
            return false;
        };

        if !player.can_kick() {
            return false;
        }

        let dispersion = (random.next_unit() - 0.5) * (1.0 - player.accuracy) * DISPERSION_SCALE;
        let angle = player.direction + dispersion;

        ball.set_possessor(None);

        player.possessing = false;
        player.kick_cooldown = KICK_COOLDOWN_MS;
        player.input.clear_actions();

        ball_entity.velocity = Vector2::new(angle.cos(), angle.sin()) * kind.speed();

        debug!("player {:?} kicked ({:?}) at angle {:.3}", player_id, kind, angle);
        events.add_ball_event(BallEvent::Kicked {
            player: player_id,
            kind,
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        AiIntent, AiTarget, FixedRandom, MatchBall, MatchPlayer, PlayerInput, PlayerRole, TeamId,
    };

    fn setup(controller: PlayerController, ball_x: f32) -> Vec<Entity> {
        let mut player = MatchPlayer::entity(
            EntityId(0),
            Vector2::new(100.0, 100.0),
            TeamId::TeamA,
            PlayerRole::Field,
            controller,
        );
        player.as_player_mut().unwrap().set_ball(Some(EntityId(1)));

        vec![player, MatchBall::entity(EntityId(1), Vector2::new(ball_x, 100.0))]
    }

    fn split(entities: &mut [Entity]) -> (&mut Entity, &mut Entity) {
        pair_mut(entities, 0, 1).unwrap()
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let mut random = FixedRandom(0.5);

        PossessionProtocol::update(&mut entities, &mut random, &mut events);
        entities[1].as_ball_mut().unwrap().hold_time = 120.0;
        PossessionProtocol::update(&mut entities, &mut random, &mut events);

        assert!(entities[0].as_player().unwrap().possessing);
        let ball = entities[1].as_ball().unwrap();
        assert_eq!(ball.possessor, Some(EntityId(0)));
        assert_eq!(ball.hold_time, 120.0, "second tick must not restart the hold timer");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_leaving_range_keeps_global_possessor() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let mut random = FixedRandom(0.5);

        PossessionProtocol::update(&mut entities, &mut random, &mut events);
        entities[1].set_position(200.0, 100.0);
        PossessionProtocol::update(&mut entities, &mut random, &mut events);

        assert!(!entities[0].as_player().unwrap().possessing);
        assert_eq!(entities[1].as_ball().unwrap().possessor, Some(EntityId(0)));
    }

    #[test]
    fn test_kick_on_cooldown_is_noop() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let (player, ball) = split(&mut entities);
        PossessionProtocol::track(player, ball, &mut events);

        player.as_player_mut().unwrap().kick_cooldown = 100.0;
        ball.set_velocity(1.0, 2.0);

        let kicked = PossessionProtocol::kick(player, ball, KickKind::Shoot, &mut FixedRandom(0.9), &mut events);

        assert!(!kicked);
        assert_eq!(ball.velocity, Vector2::new(1.0, 2.0));
        assert!(player.as_player().unwrap().possessing);
        assert_eq!(ball.as_ball().unwrap().possessor, Some(EntityId(0)));
    }

    #[test]
    fn test_kick_without_possession_is_noop() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let (player, ball) = split(&mut entities);

        assert!(!PossessionProtocol::kick(player, ball, KickKind::Pass, &mut FixedRandom(0.5), &mut events));
        assert_eq!(ball.velocity, Vector2::zeros());
    }

    #[test]
    fn test_successful_shot() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let (player, ball) = split(&mut entities);
        PossessionProtocol::track(player, ball, &mut events);
        player.as_player_mut().unwrap().input.shoot = true;

        let kicked = PossessionProtocol::kick(player, ball, KickKind::Shoot, &mut FixedRandom(0.5), &mut events);

        assert!(kicked);
        assert!((ball.velocity.x - 300.0).abs() < 1e-3);
        assert!(ball.velocity.y.abs() < 1e-3);
        assert_eq!(ball.as_ball().unwrap().possessor, None);

        let player = player.as_player().unwrap();
        assert!(!player.possessing);
        assert_eq!(player.kick_cooldown, KICK_COOLDOWN_MS);
        assert!(!player.input.shoot);
    }

    #[test]
    fn test_dispersion_keeps_speed_and_bounds_angle() {
        let mut entities = setup(PlayerController::Ai, 110.0);
        let mut events = EventCollection::new();
        let (player, ball) = split(&mut entities);
        PossessionProtocol::track(player, ball, &mut events);

        PossessionProtocol::kick(player, ball, KickKind::Pass, &mut FixedRandom(0.999), &mut events);

        let max_dispersion = 0.5 * (1.0 - 0.7) * DISPERSION_SCALE;
        let angle = ball.velocity.y.atan2(ball.velocity.x);
        assert!((ball.velocity.norm() - 200.0).abs() < 1e-3);
        assert!(angle > 0.0 && angle <= max_dispersion + 1e-6);
    }

    #[test]
    fn test_human_input_triggers_shot_on_claim() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        entities[0].as_player_mut().unwrap().set_input(PlayerInput {
            x: 1.0,
            shoot: true,
            ..Default::default()
        });

        PossessionProtocol::update(&mut entities, &mut FixedRandom(0.5), &mut events);

        assert!((entities[1].velocity.x - 300.0).abs() < 1e-3);
        assert_eq!(
            events.to_vec(),
            vec![
                BallEvent::Claimed(EntityId(0)),
                BallEvent::Kicked { player: EntityId(0), kind: KickKind::Shoot },
            ]
        );
    }

    #[test]
    fn test_ai_faces_target_before_passing() {
        let mut entities = setup(PlayerController::Ai, 110.0);
        entities[0].as_player_mut().unwrap().intent =
            AiIntent::new(AiState::Passing, AiTarget::Point(Vector2::new(100.0, 200.0)));

        PossessionProtocol::update(&mut entities, &mut FixedRandom(0.5), &mut EventCollection::new());

        assert!(entities[1].velocity.x.abs() < 1e-3);
        assert!((entities[1].velocity.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_re_kick_after_cooldown() {
        let mut entities = setup(PlayerController::Human, 110.0);
        let mut events = EventCollection::new();
        let mut random = FixedRandom(0.5);

        let (player, ball) = split(&mut entities);
        PossessionProtocol::track(player, ball, &mut events);
        assert!(PossessionProtocol::kick(player, ball, KickKind::Pass, &mut random, &mut events));

        PossessionProtocol::track(player, ball, &mut events);
        assert!(!PossessionProtocol::kick(player, ball, KickKind::Pass, &mut random, &mut events));

        player.as_player_mut().unwrap().update(KICK_COOLDOWN_MS);
        assert!(PossessionProtocol::kick(player, ball, KickKind::Pass, &mut random, &mut events));
    }
}
