use crate::r#match::{
    Entity, EntityId, EntityKind, EventCollection, Formation, MatchBall, MatchFieldSize, MatchGoal,
    MatchPlayer, MatchSettings, PlayerController, PlayerRole, Team, TeamId, TeamSide,
};
use nalgebra::Vector2;

/// Owns every entity of the match. Everything else refers to them by `EntityId`.
pub struct MatchField {
    pub size: MatchFieldSize,
    pub entities: Vec<Entity>,
    pub ball: Option<EntityId>,
    pub team_a: Team,
    pub team_b: Team,
    pub goals: Vec<EntityId>,
    pub controlled_player: Option<EntityId>,
}

impl MatchField {
    pub fn new(size: MatchFieldSize) -> Self {
        MatchField {
            size,
            entities: Vec::new(),
            ball: None,
            team_a: Team::new(TeamId::TeamA, TeamSide::Left),
            team_b: Team::new(TeamId::TeamB, TeamSide::Right),
            goals: Vec::new(),
            controlled_player: None,
        }
    }

    /// Field, goals, both teams, then the ball.
    pub fn setup(settings: &MatchSettings) -> Self {
        let size = settings.field_size();
        let mut field = MatchField::new(size);

        field.spawn(|id| Entity::new(id, size.center(), Vector2::new(size.width, size.height), EntityKind::Field));

        let goal_size = Vector2::new(settings.goal_width, settings.goal_height);
        for (team, x) in [
            (TeamId::TeamA, settings.goal_width / 2.0),
            (TeamId::TeamB, size.width - settings.goal_width / 2.0),
        ] {
            let goal = field.spawn(|id| MatchGoal::entity(id, Vector2::new(x, size.height / 2.0), goal_size, team));
            field.goals.push(goal);
        }

        for team in [TeamId::TeamA, TeamId::TeamB] {
            field.spawn_team(team);
        }

        let ball = field.spawn(|id| MatchBall::entity(id, size.center()));
        field.ball = Some(ball);
        field.assign_ball(ball);

        if settings.controlled_player {
            field.controlled_player = field.team_a.field_players(&field.entities).first().copied();

            if let Some(player) = field.controlled_player {
                field.take_control(player);
            }
        }

        field
    }

    fn spawn_team(&mut self, team_id: TeamId) {
        let side = self.team(team_id).side;
        let size = self.size;

        for slot in 0..Formation::FIELD_PLAYERS {
            let Some(position) = Formation::field_player_position(side, slot, size) else {
                continue;
            };
            let id = self.spawn(|id| MatchPlayer::entity(id, position, team_id, PlayerRole::Field, PlayerController::Ai));
            self.team_mut(team_id).add_player(id);
        }

        let position = Formation::goalkeeper_position(side, size);
        let id = self.spawn(|id| MatchPlayer::entity(id, position, team_id, PlayerRole::Goalkeeper, PlayerController::Ai));
        self.team_mut(team_id).add_player(id);
    }

    /// Swaps an AI player for a human-controlled one in the same slot.
    fn take_control(&mut self, player: EntityId) {
        let Some(entity) = self.entities.get(player.0) else {
            return;
        };
        let Some(current) = entity.as_player() else {
            return;
        };

        let mut human = MatchPlayer::entity(player, entity.position, current.team, current.role, PlayerController::Human);
        if let Some(human_player) = human.as_player_mut() {
            human_player.set_ball(current.ball);
        }

        self.entities[player.0] = human;
    }

    pub fn spawn(&mut self, build: impl FnOnce(EntityId) -> Entity) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(build(id));
        id
    }

    pub fn assign_ball(&mut self, ball: EntityId) {
        for entity in self.entities.iter_mut() {
            if let Some(player) = entity.as_player_mut() {
                player.set_ball(Some(ball));
            }
        }
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    pub fn ball_entity(&self) -> Option<&Entity> {
        self.ball
            .and_then(|id| self.entity(id))
            .filter(|entity| entity.as_ball().is_some())
    }

    pub fn ball_entity_mut(&mut self) -> Option<&mut Entity> {
        let id = self.ball?;
        self.entities
            .get_mut(id.0)
            .filter(|entity| entity.as_ball().is_some())
    }

    pub fn goal_entity(&self, team: TeamId) -> Option<&Entity> {
        self.goals
            .iter()
            .filter_map(|id| self.entity(*id))
            .find(|entity| entity.as_goal().is_some_and(|goal| goal.team == team))
    }

    pub fn team(&self, team: TeamId) -> &Team {
        match team {
            TeamId::TeamA => &self.team_a,
            TeamId::TeamB => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, team: TeamId) -> &mut Team {
        match team {
            TeamId::TeamA => &mut self.team_a,
            TeamId::TeamB => &mut self.team_b,
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.as_player().is_some())
    }

    /// Integrates every active entity, then runs its own per-kind update.
    pub fn update_entities(&mut self, dt_ms: f32, events: &mut EventCollection) {
        let dt = dt_ms / 1000.0;
        let size = self.size;

        for entity in self.entities.iter_mut().filter(|entity| entity.active) {
            entity.integrate(dt);

            let Entity {
                position,
                velocity,
                kind,
                ..
            } = entity;

            match kind {
                EntityKind::Ball(ball) => ball.update(position, velocity, dt_ms, size, events),
                EntityKind::Player(player) => player.update(dt_ms),
                EntityKind::Goal(goal) => goal.update(dt),
                EntityKind::Field => {}
            }
        }
    }

    pub fn reset_players_positions(&mut self) {
        let size = self.size;

        self.team_a.reset_positions(&mut self.entities, size);
        self.team_b.reset_positions(&mut self.entities, size);
    }

    pub fn reset_ball(&mut self, center: Vector2<f32>) {
        if let Some(entity) = self.ball_entity_mut() {
            entity.position = center;
            entity.velocity = Vector2::zeros();
            entity.acceleration = Vector2::zeros();

            if let Some(ball) = entity.as_ball_mut() {
                ball.reset();
            }
        }
    }
}
