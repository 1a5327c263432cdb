use crate::r#match::{DecisionMaker, EntityId, MatchField, MatchFieldSize};
use log::{debug, trace};

pub const AI_DECISION_INTERVAL_MS: f32 = 200.0;

/// Thinks on its own cadence; the movement step reads the last intent every tick.
#[derive(Debug)]
pub struct AiDecisionEngine {
    agents: Vec<EntityId>,
    accumulator: f32,
    interval: f32,
}

impl Default for AiDecisionEngine {
    fn default() -> Self {
        Self::new(AI_DECISION_INTERVAL_MS)
    }
}

impl AiDecisionEngine {
    pub fn new(interval: f32) -> Self {
        AiDecisionEngine {
            agents: Vec::new(),
            accumulator: 0.0,
            interval,
        }
    }

    pub fn add_agent(&mut self, agent: EntityId) {
        if !self.agents.contains(&agent) {
            self.agents.push(agent);
        }
    }

    pub fn remove_agent(&mut self, agent: EntityId) {
        self.agents.retain(|id| *id != agent);
    }

    pub fn agents(&self) -> &[EntityId] {
        &self.agents
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Runs at most one decision pass and carries the remainder, kept below one interval.
    /// Returns whether a pass ran.
    pub fn update(&mut self, dt_ms: f32, field: &mut MatchField, field_size: MatchFieldSize) -> bool {
        self.accumulator += dt_ms;

        if self.accumulator < self.interval {
            return false;
        }

        self.accumulator -= self.interval;
        if self.interval > 0.0 && self.accumulator >= self.interval {
            // a long step drops the backlog instead of deciding on the next ticks
            self.accumulator %= self.interval;
        }

        self.decide_all(field, field_size);

        true
    }

    pub fn decide_all(&self, field: &mut MatchField, field_size: MatchFieldSize) {
        debug!("ai decision pass for {} agents", self.agents.len());

        for agent in &self.agents {
            let Some(intent) = DecisionMaker::decide(field, *agent, field_size) else {
                continue;
            };

            if let Some(player) = field.entity_mut(*agent).and_then(|entity| entity.as_player_mut()) {
                trace!("agent {:?}: {} -> {}", agent, player.intent.state, intent.state);

                player.intent = intent;
                player.decision_timer = 0.0;
            }
        }
    }
}
