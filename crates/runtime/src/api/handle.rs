//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! ticking the simulation, forwarding input, or streaming events from
//! specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Direction, GameSession, PlayerAction, TickOutcome, TurnReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Advance the session by one frame.
    pub async fn tick(&self) -> Result<TickOutcome> {
        self.request(|reply| Command::Tick { reply }).await
    }

    /// Press (`pressed = true`) or release a movement direction.
    ///
    /// Returns whether the session applied it; movement is ignored outside
    /// exploration.
    pub async fn move_input(&self, direction: Direction, pressed: bool) -> Result<bool> {
        self.request(|reply| Command::MoveInput {
            direction,
            pressed,
            reply,
        })
        .await
    }

    /// Submit a battle action.
    ///
    /// Returns `Ok(None)` when the action was not valid right now; the session
    /// is left untouched in that case.
    pub async fn player_action(&self, action: PlayerAction) -> Result<Option<TurnReport>> {
        self.request(|reply| Command::PlayerAction { action, reply })
            .await
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_session(&self) -> Result<GameSession> {
        self.request(|reply| Command::QuerySession { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Encounters, battle conclusions and game over
    /// - `Topic::Battle` - Every event of every resolved turn
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut battle_rx = handle.subscribe(Topic::Battle);
    /// while let Ok(event) = battle_rx.recv().await {
    ///     // Render the event
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
