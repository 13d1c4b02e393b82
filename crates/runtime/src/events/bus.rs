//! Topic-based event bus implementation.

use game_core::BattleEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use super::types::SessionEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Mode changes (encounters, battle conclusions, game over)
    Session,
    /// Everything that happened inside a battle turn
    Battle,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Session(SessionEvent),
    Battle(BattleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::Battle(_) => Topic::Battle,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow receivers observe
/// `RecvError::Lagged` instead of stalling the simulation.
#[derive(Clone)]
pub struct EventBus {
    session: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            session: broadcast::channel(capacity).0,
            battle: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Session => &self.session,
            Topic::Battle => &self.battle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Archetype, BattleOutcome};

    #[tokio::test]
    async fn routes_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut session_rx = bus.subscribe(Topic::Session);
        let mut battle_rx = bus.subscribe(Topic::Battle);

        bus.publish(Event::Battle(BattleEvent::Fled));
        bus.publish(Event::Session(SessionEvent::BattleEnded {
            outcome: BattleOutcome::Fled,
            winner: None,
        }));

        assert_eq!(
            battle_rx.recv().await.unwrap(),
            Event::Battle(BattleEvent::Fled)
        );
        assert!(matches!(
            session_rx.recv().await.unwrap(),
            Event::Session(SessionEvent::BattleEnded { .. })
        ));
        assert!(battle_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(Event::Session(SessionEvent::GameOver { frame: 3 }));
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let mut rx = clone.subscribe_multiple(&[Topic::Session]);

        bus.publish(Event::Session(SessionEvent::EncounterStarted {
            enemy: Archetype::Ghost,
            frame: 1,
            encounter: 1,
        }));

        let received = rx.get_mut(&Topic::Session).unwrap().try_recv().unwrap();
        assert_eq!(received.topic(), Topic::Session);
    }
}
