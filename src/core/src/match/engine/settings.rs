use crate::r#match::{MatchFieldSize, AI_DECISION_INTERVAL_MS, FIXED_TIME_STEP_MS, MATCH_TIME_MS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub field_width: f32,
    pub field_height: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub decision_interval_ms: f32,
    pub controlled_player: bool,
    pub seed: Option<u64>,
    pub match_time_ms: u64,
    pub time_step_ms: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            field_width: 800.0,
            field_height: 600.0,
            goal_width: 60.0,
            goal_height: 80.0,
            decision_interval_ms: AI_DECISION_INTERVAL_MS,
            controlled_player: false,
            seed: None,
            match_time_ms: MATCH_TIME_MS,
            time_step_ms: FIXED_TIME_STEP_MS,
        }
    }
}

impl MatchSettings {
    pub fn field_size(&self) -> MatchFieldSize {
        MatchFieldSize::new(self.field_width, self.field_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: MatchSettings =
            serde_json::from_str(r#"{ "field_width": 1000.0, "seed": 7 }"#).unwrap();

        assert_eq!(settings.field_width, 1000.0);
        assert_eq!(settings.field_height, 600.0);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.decision_interval_ms, 200.0);
        assert!(!settings.controlled_player);
    }
}
