use crate::r#match::{EntityId, KickKind, TeamId};
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BallEvent {
    Claimed(EntityId),
    Released(EntityId),
    Kicked { player: EntityId, kind: KickKind },
    Goal(TeamId),
}

#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<BallEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection { events: Vec::new() }
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        debug!("Ball event: {:?}", event);

        self.events.push(event);
    }

    pub fn add_from_collection(&mut self, other: EventCollection) {
        self.events.extend(other.events);
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallEvent> {
        self.events.iter()
    }

    pub fn goals(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.events.iter().filter_map(|event| match event {
            BallEvent::Goal(team) => Some(*team),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_vec(self) -> Vec<BallEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_filter() {
        let mut events = EventCollection::new();
        events.add_ball_event(BallEvent::Claimed(EntityId(3)));
        events.add_ball_event(BallEvent::Goal(TeamId::TeamB));

        let mut other = EventCollection::new();
        other.add_ball_event(BallEvent::Goal(TeamId::TeamA));
        events.add_from_collection(other);

        assert_eq!(events.len(), 3);
        assert_eq!(events.goals().collect::<Vec<_>>(), vec![TeamId::TeamB, TeamId::TeamA]);
    }
}
