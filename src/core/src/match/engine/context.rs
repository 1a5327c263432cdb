use crate::r#match::{Bounds, MatchField, TeamId};
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFieldSize {
    pub width: f32,
    pub height: f32,
}

impl MatchFieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        MatchFieldSize { width, height }
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: 0.0,
            right: self.width,
            top: 0.0,
            bottom: self.height,
        }
    }
}

/// Collaborator owning everything outside the simulation core.
pub trait MatchHost {
    /// Current world size. Queried every tick, never cached.
    fn field_size(&self) -> MatchFieldSize;

    fn update_score(&mut self, team: TeamId);

    fn reset_players(&mut self, field: &mut MatchField) {
        field.reset_players_positions();
    }
}

pub struct MatchContext<'h> {
    pub field_size: MatchFieldSize,
    pub host: &'h mut dyn MatchHost,
}

impl<'h> MatchContext<'h> {
    pub fn new(host: &'h mut dyn MatchHost) -> Self {
        MatchContext {
            field_size: host.field_size(),
            host,
        }
    }

    pub fn world_bounds(&self) -> Bounds {
        self.field_size.bounds()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every call the core makes into the host.
    pub struct RecordingHost {
        pub field_size: MatchFieldSize,
        pub scores: Vec<TeamId>,
        pub resets: usize,
    }

    impl RecordingHost {
        pub fn new(width: f32, height: f32) -> Self {
            RecordingHost {
                field_size: MatchFieldSize::new(width, height),
                scores: Vec::new(),
                resets: 0,
            }
        }
    }

    impl MatchHost for RecordingHost {
        fn field_size(&self) -> MatchFieldSize {
            self.field_size
        }

        fn update_score(&mut self, team: TeamId) {
            self.scores.push(team);
        }

        fn reset_players(&mut self, field: &mut MatchField) {
            self.resets += 1;
            field.reset_players_positions();
        }
    }
}
