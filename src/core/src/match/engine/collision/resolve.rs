use crate::r#match::{BallEvent, Entity, EntityTag, EventCollection};
use nalgebra::Vector2;

const PLAYER_BALL_PUSH: f32 = 50.0;
const PLAYER_MIN_SEPARATION: f32 = 25.0;
const PLAYER_SEPARATION_FACTOR: f32 = 0.5;

pub struct CollisionResolver;

impl CollisionResolver {
    /// Same outcome for (a, b) and (b, a).
    pub fn resolve(a: &mut Entity, b: &mut Entity, events: &mut EventCollection) {
        match (a.tag(), b.tag()) {
            (EntityTag::Player, EntityTag::Ball) => Self::player_ball(a, b, events),
            (EntityTag::Ball, EntityTag::Player) => Self::player_ball(b, a, events),
            (EntityTag::Player, EntityTag::Player) => Self::player_player(a, b),
            (EntityTag::Ball, EntityTag::Goal) => Self::ball_goal(a, b),
            (EntityTag::Goal, EntityTag::Ball) => Self::ball_goal(b, a),
            _ => {}
        }
    }

    fn player_ball(player_entity: &mut Entity, ball_entity: &mut Entity, events: &mut EventCollection) {
        let player_id = player_entity.id;
        let distance = player_entity.distance_to(ball_entity);
        let angle = player_entity.angle_to_point(ball_entity.position);

        if let (Some(player), Some(ball)) = (player_entity.as_player_mut(), ball_entity.as_ball_mut()) {
            if distance <= player.kick_range && !player.possessing {
                player.possessing = true;
                ball.set_possessor(Some(player_id));
                events.add_ball_event(BallEvent::Claimed(player_id));
            }
        }

        ball_entity.velocity += Vector2::new(angle.cos(), angle.sin()) * PLAYER_BALL_PUSH;
    }

    fn player_player(a: &mut Entity, b: &mut Entity) {
        let distance = a.distance_to(b);
        if distance >= PLAYER_MIN_SEPARATION {
            return;
        }

        let angle = a.angle_to_point(b.position);
        let push = Vector2::new(angle.cos(), angle.sin())
            * (PLAYER_MIN_SEPARATION - distance)
            * PLAYER_SEPARATION_FACTOR;

        a.velocity -= push;
        b.velocity += push;
    }

    fn ball_goal(ball_entity: &Entity, goal_entity: &mut Entity) {
        let contained = goal_entity.bounds().contains(&ball_entity.bounds());

        if let (true, Some(goal)) = (contained, goal_entity.as_goal_mut()) {
            goal.trigger_glow();
        }
    }
}
