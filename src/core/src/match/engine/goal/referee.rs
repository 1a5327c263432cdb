use crate::r#match::{BallEvent, EventCollection, MatchContext, MatchField, TeamId};
use log::info;

/// Checks whether the ball sits fully inside a goal and restarts play when it does.
pub struct GoalReferee;

impl GoalReferee {
    pub fn check(field: &mut MatchField, context: &mut MatchContext, events: &mut EventCollection) -> Option<TeamId> {
        let conceding = [TeamId::TeamA, TeamId::TeamB]
            .into_iter()
            .find(|team| Self::is_ball_in_goal(field, *team))?;

        let scoring = conceding.opponent();

        context.host.update_score(scoring);
        field.reset_ball(context.field_size.center());
        context.host.reset_players(field);

        info!("goal for {}", scoring);
        events.add_ball_event(BallEvent::Goal(scoring));

        Some(scoring)
    }

    fn is_ball_in_goal(field: &MatchField, team: TeamId) -> bool {
        match (field.ball_entity(), field.goal_entity(team)) {
            (Some(ball), Some(goal)) => goal.bounds().contains(&ball.bounds()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::context::testing::RecordingHost;
    use crate::r#match::{EntityId, MatchSettings};
    use nalgebra::Vector2;

    fn setup() -> (MatchField, RecordingHost) {
        let field = MatchField::setup(&MatchSettings::default());
        (field, RecordingHost::new(800.0, 600.0))
    }

    fn place_ball(field: &mut MatchField, x: f32, y: f32) {
        let ball = field.ball_entity_mut().unwrap();
        ball.set_position(x, y);
        ball.set_velocity(50.0, 10.0);
        ball.as_ball_mut().unwrap().set_possessor(Some(EntityId(3)));
    }

    #[test]
    fn test_ball_in_team_a_goal_scores_for_team_b() {
        let (mut field, mut host) = setup();
        let mut events = EventCollection::new();
        place_ball(&mut field, 30.0, 300.0);
        field.entity_mut(EntityId(3)).unwrap().set_position(500.0, 500.0);

        let scored = {
            let mut context = MatchContext::new(&mut host);
            GoalReferee::check(&mut field, &mut context, &mut events)
        };

        assert_eq!(scored, Some(TeamId::TeamB));
        assert_eq!(host.scores, vec![TeamId::TeamB]);
        assert_eq!(host.resets, 1);

        let ball = field.ball_entity().unwrap();
        assert_eq!(ball.position, Vector2::new(400.0, 300.0));
        assert_eq!(ball.velocity, Vector2::zeros());
        assert_eq!(ball.as_ball().unwrap().possessor, None);
        assert_eq!(ball.as_ball().unwrap().hold_time, 0.0);
        assert_ne!(field.entity(EntityId(3)).unwrap().position, Vector2::new(500.0, 500.0));

        let mut context = MatchContext::new(&mut host);
        assert_eq!(GoalReferee::check(&mut field, &mut context, &mut events), None);
        assert_eq!(host.scores.len(), 1);
        assert_eq!(events.goals().count(), 1);
    }

    #[test]
    fn test_ball_in_team_b_goal_scores_for_team_a() {
        let (mut field, mut host) = setup();
        place_ball(&mut field, 770.0, 300.0);

        let mut context = MatchContext::new(&mut host);
        let scored = GoalReferee::check(&mut field, &mut context, &mut EventCollection::new());

        assert_eq!(scored, Some(TeamId::TeamA));
    }

    #[test]
    fn test_ball_partially_inside_is_not_a_goal() {
        let (mut field, mut host) = setup();
        place_ball(&mut field, 30.0, 258.0);

        let mut context = MatchContext::new(&mut host);
        let scored = GoalReferee::check(&mut field, &mut context, &mut EventCollection::new());

        assert_eq!(scored, None);
        assert!(host.scores.is_empty());
        assert_eq!(host.resets, 0);
    }
}
