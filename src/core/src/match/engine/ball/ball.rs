use crate::r#match::{
    BallEvent, Entity, EntityId, EntityKind, EventCollection, MatchFieldSize,
};
use log::debug;
use nalgebra::Vector2;

pub const BALL_RADIUS: f32 = 6.0;
pub const BALL_MAX_SPEED: f32 = 400.0;
pub const BALL_FRICTION: f32 = 0.98;
pub const BALL_BOUNCE_FACTOR: f32 = 0.7;
pub const BALL_MAX_HOLD_TIME_MS: f32 = 1000.0;

#[derive(Debug, Clone)]
pub struct MatchBall {
    pub radius: f32,
    pub bounce_factor: f32,
    pub possessor: Option<EntityId>,
    pub last_possessor: Option<EntityId>,
    /// Milliseconds since the current possessor acquired the ball.
    pub hold_time: f32,
    pub max_hold_time: f32,
}

impl Default for MatchBall {
    fn default() -> Self {
        MatchBall {
            radius: BALL_RADIUS,
            bounce_factor: BALL_BOUNCE_FACTOR,
            possessor: None,
            last_possessor: None,
            hold_time: 0.0,
            max_hold_time: BALL_MAX_HOLD_TIME_MS,
        }
    }
}

impl MatchBall {
    pub fn entity(id: EntityId, position: Vector2<f32>) -> Entity {
        let ball = MatchBall::default();
        let diameter = ball.radius * 2.0;

        Entity::new(id, position, Vector2::new(diameter, diameter), EntityKind::Ball(ball))
            .with_max_speed(BALL_MAX_SPEED)
            .with_friction(BALL_FRICTION)
    }

    /// Any assignment restarts the hold timer.
    pub fn set_possessor(&mut self, possessor: Option<EntityId>) {
        self.possessor = possessor;
        self.hold_time = 0.0;

        if possessor.is_some() {
            self.last_possessor = possessor;
        }
    }

    #[inline]
    pub fn is_owned_by(&self, player: EntityId) -> bool {
        self.possessor == Some(player)
    }

    pub fn update(
        &mut self,
        position: &mut Vector2<f32>,
        velocity: &mut Vector2<f32>,
        dt_ms: f32,
        field_size: MatchFieldSize,
        events: &mut EventCollection,
    ) {
        self.update_hold_time(dt_ms, events);
        self.bounce_off_field_edges(position, velocity, field_size);
    }

    fn update_hold_time(&mut self, dt_ms: f32, events: &mut EventCollection) {
        let Some(possessor) = self.possessor else {
            return;
        };

        self.hold_time += dt_ms;

        if self.hold_time > self.max_hold_time {
            debug!("ball auto released from {:?} after {} ms", possessor, self.hold_time);

            self.set_possessor(None);
            events.add_ball_event(BallEvent::Released(possessor));
        }
    }

    /// The ball keeps one radius of margin from every edge and loses speed on the rebound.
    fn bounce_off_field_edges(
        &self,
        position: &mut Vector2<f32>,
        velocity: &mut Vector2<f32>,
        field_size: MatchFieldSize,
    ) {
        let margin = self.radius;

        if position.x - self.radius < margin {
            position.x = margin + self.radius;
            velocity.x = -velocity.x * self.bounce_factor;
        } else if position.x + self.radius > field_size.width - margin {
            position.x = field_size.width - margin - self.radius;
            velocity.x = -velocity.x * self.bounce_factor;
        }

        if position.y - self.radius < margin {
            position.y = margin + self.radius;
            velocity.y = -velocity.y * self.bounce_factor;
        } else if position.y + self.radius > field_size.height - margin {
            position.y = field_size.height - margin - self.radius;
            velocity.y = -velocity.y * self.bounce_factor;
        }
    }

    pub fn reset(&mut self) {
        self.set_possessor(None);
    }
}
