use crate::r#match::{AiIntent, AiState, AiTarget, EntityId, MatchField, MatchFieldSize};
use nalgebra::Vector2;

const GOALKEEPER_BALL_PROXIMITY: f32 = 200.0;
const GOALKEEPER_GOAL_INSET: f32 = 20.0;
const SHOOT_DISTANCE: f32 = 150.0;
const PASS_RANGE: f32 = 100.0;
const SUPPORT_DISTANCE: f32 = 100.0;
const SUPPORT_FIELD_MARGIN: f32 = 50.0;

pub struct DecisionMaker;

impl DecisionMaker {
    /// Picks the next intent for `agent`. Missing ball, goal or agent yields `None`.
    pub fn decide(field: &mut MatchField, agent: EntityId, field_size: MatchFieldSize) -> Option<AiIntent> {
        let entity = field.entity(agent)?;
        if !entity.active {
            return None;
        }

        if entity.as_player()?.is_goalkeeper() {
            Self::goalkeeper(field, agent)
        } else {
            Self::field_player(field, agent, field_size)
        }
    }

    fn goalkeeper(field: &mut MatchField, agent: EntityId) -> Option<AiIntent> {
        let entity = field.entity(agent)?;
        let team = entity.as_player()?.team;
        let ball = field.ball_entity()?;
        let goal = field.goal_entity(team)?;

        let target = if entity.distance_to(ball) < GOALKEEPER_BALL_PROXIMITY {
            ball.id
        } else {
            goal.id
        };

        // the keeper never leaves its goal area, whatever the target
        let position = goal.bounds().inset(GOALKEEPER_GOAL_INSET).clamp_point(entity.position);
        field.entity_mut(agent)?.position = position;

        Some(AiIntent::new(AiState::Defending, AiTarget::Entity(target)))
    }

    fn field_player(field: &MatchField, agent: EntityId, field_size: MatchFieldSize) -> Option<AiIntent> {
        let entity = field.entity(agent)?;
        let player = entity.as_player()?;
        let ball = field.ball_entity()?;
        let team = field.team(player.team);

        if player.possessing {
            let goal = field.goal_entity(player.team.opponent())?;

            if entity.distance_to(goal) < SHOOT_DISTANCE {
                return Some(AiIntent::new(AiState::Shooting, AiTarget::Entity(goal.id)));
            }

            let receiver = team
                .nearest_teammate(&field.entities, agent)
                .and_then(|id| field.entity(id))
                .filter(|teammate| entity.distance_to(teammate) < PASS_RANGE);

            return Some(match receiver {
                Some(teammate) => AiIntent::new(AiState::Passing, AiTarget::Entity(teammate.id)),
                None => AiIntent::new(AiState::Dribbling, AiTarget::Entity(goal.id)),
            });
        }

        // the keeper counts too: when it is nearest, nobody chases
        if team.nearest_player_to(&field.entities, ball.position) == Some(agent) {
            return Some(AiIntent::new(AiState::Chasing, AiTarget::Entity(ball.id)));
        }

        let angle = entity.angle_to_point(ball.position);
        let offset = Vector2::new(angle.cos(), angle.sin()) * SUPPORT_DISTANCE;
        let support = field_size
            .bounds()
            .inset(SUPPORT_FIELD_MARGIN)
            .clamp_point(ball.position + offset);

        Some(AiIntent::new(AiState::Supporting, AiTarget::Point(support)))
    }
}
