use crate::r#match::{Entity, EntityId, Formation, MatchFieldSize, PlayerRole};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamId {
    TeamA,
    TeamB,
}

impl TeamId {
    pub fn opponent(self) -> TeamId {
        match self {
            TeamId::TeamA => TeamId::TeamB,
            TeamId::TeamB => TeamId::TeamA,
        }
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            TeamId::TeamA => write!(f, "Team A"),
            TeamId::TeamB => write!(f, "Team B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamSide {
    Left,
    Right,
}

/// Roster of arena ids. Players are owned by the field.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub side: TeamSide,
    pub players: Vec<EntityId>,
}

impl Team {
    pub fn new(id: TeamId, side: TeamSide) -> Self {
        Team {
            id,
            side,
            players: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: EntityId) {
        if !self.players.contains(&player) {
            self.players.push(player);
        }
    }

    pub fn remove_player(&mut self, player: EntityId) {
        self.players.retain(|id| *id != player);
    }

    fn members<'e>(&'e self, entities: &'e [Entity]) -> impl Iterator<Item = &'e Entity> + 'e {
        self.players
            .iter()
            .filter_map(move |id| entities.get(id.0))
            .filter(|entity| entity.as_player().is_some())
    }

    fn has_role(entity: &Entity, role: PlayerRole) -> bool {
        entity.as_player().is_some_and(|player| player.role == role)
    }

    pub fn field_players(&self, entities: &[Entity]) -> Vec<EntityId> {
        self.members(entities)
            .filter(|entity| Self::has_role(entity, PlayerRole::Field))
            .map(|entity| entity.id)
            .collect()
    }

    pub fn goalkeeper(&self, entities: &[Entity]) -> Option<EntityId> {
        self.members(entities)
            .find(|entity| Self::has_role(entity, PlayerRole::Goalkeeper))
            .map(|entity| entity.id)
    }

    /// First player wins on equal distance.
    pub fn nearest_player_to(&self, entities: &[Entity], point: Vector2<f32>) -> Option<EntityId> {
        self.members(entities)
            .map(|entity| (entity.id, entity.distance_to_point(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Nearest other member of the roster to `player`, any role.
    pub fn nearest_teammate(&self, entities: &[Entity], player: EntityId) -> Option<EntityId> {
        let origin = entities.get(player.0)?.position;

        self.members(entities)
            .filter(|entity| entity.id != player)
            .map(|entity| (entity.id, entity.distance_to_point(origin)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    pub fn team_center(&self, entities: &[Entity]) -> Option<Vector2<f32>> {
        let positions = self.members(entities).map(|entity| entity.position).collect_vec();
        if positions.is_empty() {
            return None;
        }

        let sum = positions.iter().fold(Vector2::zeros(), |acc, position| acc + position);
        Some(sum / positions.len() as f32)
    }

    pub fn formation_positions(&self, entities: &[Entity], field_size: MatchFieldSize) -> Vec<(EntityId, Vector2<f32>)> {
        let mut slot = 0;

        self.members(entities)
            .filter_map(|entity| {
                let player = entity.as_player()?;
                let position = match player.role {
                    PlayerRole::Goalkeeper => Formation::goalkeeper_position(self.side, field_size),
                    PlayerRole::Field => {
                        let position = Formation::field_player_position(self.side, slot, field_size);
                        slot += 1;
                        position?
                    }
                };

                Some((entity.id, position))
            })
            .collect()
    }

    pub fn reset_positions(&self, entities: &mut [Entity], field_size: MatchFieldSize) {
        for (id, position) in self.formation_positions(entities, field_size) {
            if let Some(entity) = entities.get_mut(id.0) {
                entity.position = position;
                entity.velocity = Vector2::zeros();
                entity.acceleration = Vector2::zeros();

                if let Some(player) = entity.as_player_mut() {
                    player.reset_state();
                }
            }
        }
    }
}
