use crate::r#match::{MatchFieldSize, MatchHost, MatchTime, TeamId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GoalDetail {
    pub team: TeamId,
    /// Match time in milliseconds.
    pub time: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Score {
    pub team_a: u16,
    pub team_b: u16,
    pub details: Vec<GoalDetail>,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn increment(&mut self, team: TeamId, time: u64) {
        match team {
            TeamId::TeamA => self.team_a += 1,
            TeamId::TeamB => self.team_b += 1,
        }

        self.details.push(GoalDetail { team, time });
    }

    pub fn get(&self, team: TeamId) -> u16 {
        match team {
            TeamId::TeamA => self.team_a,
            TeamId::TeamB => self.team_b,
        }
    }
}

/// Host used by headless matches: keeps the score and the clock.
pub struct ScoreBoard {
    pub field_size: MatchFieldSize,
    pub score: Score,
    pub time: MatchTime,
}

impl ScoreBoard {
    pub fn new(field_size: MatchFieldSize) -> Self {
        ScoreBoard {
            field_size,
            score: Score::new(),
            time: MatchTime::new(),
        }
    }
}

impl MatchHost for ScoreBoard {
    fn field_size(&self) -> MatchFieldSize {
        self.field_size
    }

    fn update_score(&mut self, team: TeamId) {
        self.score.increment(team, self.time.millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_board_records_goal_time() {
        let mut board = ScoreBoard::new(MatchFieldSize::new(800.0, 600.0));
        board.time.increment(1500.0);

        board.update_score(TeamId::TeamB);
        board.update_score(TeamId::TeamB);

        assert_eq!(board.score.get(TeamId::TeamA), 0);
        assert_eq!(board.score.get(TeamId::TeamB), 2);
        assert_eq!(board.score.details[0].time, 1500);
    }
}
