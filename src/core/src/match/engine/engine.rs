use crate::r#match::{
    AiDecisionEngine, BallEvent, CollisionSystem, EntityId, EventCollection, GoalReferee, MatchContext,
    MatchField, MatchHost, MatchResultRaw, MatchSettings, MovementSystem, PlayerInput,
    PossessionProtocol, RandomSource, ResultMatchPositionData, ScoreBoard, SeededRandom,
};
use log::info;

pub const FIXED_TIME_STEP_MS: f32 = 16.67;
pub const MATCH_TIME_MS: u64 = 90_000;

pub struct FootballEngine {
    pub field: MatchField,
    pub collisions: CollisionSystem,
    pub ai: AiDecisionEngine,
    random: Box<dyn RandomSource>,
}

impl FootballEngine {
    pub fn new(settings: &MatchSettings) -> Self {
        Self::from_field(
            MatchField::setup(settings),
            settings.decision_interval_ms,
            Box::new(SeededRandom::from_optional_seed(settings.seed)),
        )
    }

    /// Registers every entity with the collision system and every AI player with the decision engine.
    pub fn from_field(field: MatchField, decision_interval_ms: f32, random: Box<dyn RandomSource>) -> Self {
        let mut engine = FootballEngine {
            field,
            collisions: CollisionSystem::new(),
            ai: AiDecisionEngine::new(decision_interval_ms),
            random,
        };

        let ids: Vec<EntityId> = engine.field.entities.iter().map(|entity| entity.id).collect();
        for id in ids {
            engine.register(id);
        }

        engine
    }

    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn register(&mut self, id: EntityId) {
        let Some(entity) = self.field.entity(id) else {
            return;
        };

        if entity.as_player().is_some_and(|player| player.is_ai()) {
            self.ai.add_agent(id);
        }

        self.collisions.add(id);
    }

    pub fn unregister(&mut self, id: EntityId) {
        self.collisions.remove(id);
        self.ai.remove_agent(id);
    }

    pub fn set_input(&mut self, input: PlayerInput) {
        let Some(id) = self.field.controlled_player else {
            return;
        };

        if let Some(player) = self.field.entity_mut(id).and_then(|entity| entity.as_player_mut()) {
            player.set_input(input);
        }
    }

    pub fn game_tick(&mut self, dt_ms: f32, host: &mut dyn MatchHost) -> EventCollection {
        let mut context = MatchContext::new(host);
        let mut events = EventCollection::new();

        self.field.size = context.field_size;
        self.field.update_entities(dt_ms, &mut events);

        PossessionProtocol::update(&mut self.field.entities, self.random.as_mut(), &mut events);

        self.collisions.detect_and_resolve(&mut self.field.entities, &mut events);
        self.collisions
            .apply_boundary_constraints(&mut self.field.entities, context.world_bounds());

        self.ai.update(dt_ms, &mut self.field, context.field_size);

        MovementSystem::update(&mut self.field.entities);

        GoalReferee::check(&mut self.field, &mut context, &mut events);

        events
    }

    /// Runs a whole match without a host loop and returns what happened.
    pub fn play(settings: &MatchSettings) -> MatchResultRaw {
        let mut engine = FootballEngine::new(settings);
        let mut score_board = ScoreBoard::new(settings.field_size());
        let mut position_data = ResultMatchPositionData::new();

        let match_time_ms = settings.match_time_ms as f32;

        while score_board.time.increment(settings.time_step_ms) <= match_time_ms {
            let events = engine.game_tick(settings.time_step_ms, &mut score_board);
            let timestamp = score_board.time.millis();

            for event in events.iter() {
                if let BallEvent::Kicked { player, kind } = event {
                    position_data.add_kick_event(timestamp, *player, *kind);
                }
            }

            Self::write_match_positions(&engine.field, timestamp, &mut position_data);
        }

        info!(
            "match finished: {} - {}",
            score_board.score.team_a, score_board.score.team_b
        );

        MatchResultRaw {
            score: score_board.score,
            position_data,
            match_time_ms: settings.match_time_ms,
        }
    }

    pub fn write_match_positions(
        field: &MatchField,
        timestamp: u64,
        match_data: &mut ResultMatchPositionData,
    ) {
        // player positions
        field.players().for_each(|player| {
            match_data.add_player_positions(player.id, timestamp, player.position);
        });

        if let Some(ball) = field.ball_entity() {
            match_data.add_ball_positions(timestamp, ball.position);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchTime {
    /// Milliseconds.
    pub time: f32,
}

impl MatchTime {
    pub fn new() -> Self {
        MatchTime { time: 0.0 }
    }

    #[inline]
    pub fn increment(&mut self, val: f32) -> f32 {
        self.time += val;
        self.time
    }

    #[inline]
    pub fn millis(&self) -> u64 {
        self.time as u64
    }
}
