use crate::r#match::{EntityId, KickKind, Score};
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct KickEventData {
    pub timestamp: u64,
    pub player: EntityId,
    pub kind: KickKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPositionDataItem {
    pub timestamp: u64,
    pub position: Vector2<f32>,
}

impl ResultPositionDataItem {
    pub fn new(timestamp: u64, position: Vector2<f32>) -> Self {
        ResultPositionDataItem {
            timestamp,
            position,
        }
    }
}

/// Positions are stored only when they change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultMatchPositionData {
    ball: Vec<ResultPositionDataItem>,
    players: HashMap<usize, Vec<ResultPositionDataItem>>,
    kicks: Vec<KickEventData>,
}

impl ResultMatchPositionData {
    pub fn new() -> Self {
        ResultMatchPositionData::default()
    }

    pub fn add_player_positions(&mut self, player: EntityId, timestamp: u64, position: Vector2<f32>) {
        let player_data = self.players.entry(player.0).or_default();

        if player_data.last().is_some_and(|last| last.position == position) {
            return;
        }

        player_data.push(ResultPositionDataItem::new(timestamp, position));
    }

    pub fn add_ball_positions(&mut self, timestamp: u64, position: Vector2<f32>) {
        if self.ball.last().is_some_and(|last| last.position == position) {
            return;
        }

        self.ball.push(ResultPositionDataItem::new(timestamp, position));
    }

    pub fn add_kick_event(&mut self, timestamp: u64, player: EntityId, kind: KickKind) {
        self.kicks.push(KickEventData {
            timestamp,
            player,
            kind,
        });
    }

    pub fn kicks(&self) -> &[KickEventData] {
        &self.kicks
    }

    pub fn max_timestamp(&self) -> u64 {
        self.ball.last().map(|item| item.timestamp).unwrap_or(0)
    }

    /// Nearest recorded ball position to `timestamp`.
    pub fn get_ball_position_at(&self, timestamp: u64) -> Option<Vector2<f32>> {
        nearest_position(&self.ball, timestamp)
    }

    pub fn get_player_position_at(&self, player: EntityId, timestamp: u64) -> Option<Vector2<f32>> {
        nearest_position(self.players.get(&player.0)?, timestamp)
    }

    pub fn get_player_ids(&self) -> Vec<EntityId> {
        self.players.keys().map(|id| EntityId(*id)).collect()
    }
}

fn nearest_position(items: &[ResultPositionDataItem], timestamp: u64) -> Option<Vector2<f32>> {
    if items.is_empty() {
        return None;
    }

    let idx = items
        .binary_search_by_key(&timestamp, |item| item.timestamp)
        .unwrap_or_else(|idx| {
            if idx == 0 {
                0
            } else if idx >= items.len() {
                items.len() - 1
            } else if timestamp - items[idx - 1].timestamp < items[idx].timestamp - timestamp {
                idx - 1
            } else {
                idx
            }
        });

    Some(items[idx].position)
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultRaw {
    pub score: Score,
    pub position_data: ResultMatchPositionData,
    pub match_time_ms: u64,
}
