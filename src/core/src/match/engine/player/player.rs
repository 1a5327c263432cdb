use crate::r#match::{AiIntent, Entity, EntityId, EntityKind, PlayerInput, TeamId};
use nalgebra::Vector2;
use serde::Serialize;

pub const PLAYER_SIZE: f32 = 20.0;
pub const PLAYER_FRICTION: f32 = 0.9;
pub const SPRINT_MULTIPLIER: f32 = 1.5;
pub const KICK_RANGE: f32 = 25.0;

pub const MAX_STAMINA: f32 = 100.0;
const STAMINA_DRAIN_PER_MS: f32 = 0.1;
const STAMINA_REGEN_PER_MS: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerRole {
    Field,
    Goalkeeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerController {
    Human,
    Ai,
}

impl PlayerController {
    fn max_speed(self) -> f32 {
        match self {
            PlayerController::Human => 100.0,
            PlayerController::Ai => 80.0,
        }
    }

    fn speed(self) -> f32 {
        match self {
            PlayerController::Human => 1.0,
            PlayerController::Ai => 0.8,
        }
    }

    fn accuracy(self) -> f32 {
        match self {
            PlayerController::Human => 0.9,
            PlayerController::Ai => 0.7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub team: TeamId,
    pub role: PlayerRole,
    pub controller: PlayerController,

    pub speed: f32,
    pub accuracy: f32,
    pub stamina: f32,
    pub sprint_multiplier: f32,
    pub is_sprinting: bool,

    /// Local belief based on proximity only, may disagree with the ball's possessor.
    pub possessing: bool,
    pub ball: Option<EntityId>,
    /// Milliseconds until the next kick is allowed.
    pub kick_cooldown: f32,
    pub kick_range: f32,
    /// Facing angle in radians.
    pub direction: f32,

    pub intent: AiIntent,
    pub input: PlayerInput,
    pub decision_timer: f32,
}

impl MatchPlayer {
    pub fn new(team: TeamId, role: PlayerRole, controller: PlayerController) -> Self {
        MatchPlayer {
            team,
            role,
            controller,
            speed: controller.speed(),
            accuracy: controller.accuracy(),
            stamina: MAX_STAMINA,
            sprint_multiplier: SPRINT_MULTIPLIER,
            is_sprinting: false,
            possessing: false,
            ball: None,
            kick_cooldown: 0.0,
            kick_range: KICK_RANGE,
            direction: 0.0,
            intent: AiIntent::default(),
            input: PlayerInput::default(),
            decision_timer: 0.0,
        }
    }

    pub fn entity(
        id: EntityId,
        position: Vector2<f32>,
        team: TeamId,
        role: PlayerRole,
        controller: PlayerController,
    ) -> Entity {
        let player = MatchPlayer::new(team, role, controller);

        Entity::new(
            id,
            position,
            Vector2::new(PLAYER_SIZE, PLAYER_SIZE),
            EntityKind::Player(player),
        )
        .with_max_speed(controller.max_speed())
        .with_friction(PLAYER_FRICTION)
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        self.controller == PlayerController::Ai
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.role == PlayerRole::Goalkeeper
    }

    #[inline]
    pub fn can_kick(&self) -> bool {
        self.possessing && self.kick_cooldown <= 0.0
    }

    pub fn set_ball(&mut self, ball: Option<EntityId>) {
        self.ball = ball;
    }

    /// Sprinting cannot start on an empty tank.
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
        self.is_sprinting = input.sprint && self.stamina > 0.0;
    }

    pub fn update(&mut self, dt_ms: f32) {
        if self.kick_cooldown > 0.0 {
            self.kick_cooldown -= dt_ms;
        }

        self.update_stamina(dt_ms);

        if self.is_ai() {
            self.decision_timer += dt_ms;
        }
    }

    fn update_stamina(&mut self, dt_ms: f32) {
        if self.is_sprinting {
            self.stamina = (self.stamina - dt_ms * STAMINA_DRAIN_PER_MS).max(0.0);
            if self.stamina <= 0.0 {
                self.is_sprinting = false;
            }
        } else {
            self.stamina = (self.stamina + dt_ms * STAMINA_REGEN_PER_MS).min(MAX_STAMINA);
        }
    }

    pub fn reset_state(&mut self) {
        self.possessing = false;
        self.intent = AiIntent::default();
        self.decision_timer = 0.0;
    }
}
