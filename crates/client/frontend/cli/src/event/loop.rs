//! Event loop orchestrating frame pacing, runtime events, and rendering.
//!
//! Every frame the loop drains pending key events, expires synthetic key
//! holds, ticks the runtime once, and redraws from a fresh session snapshot.
//! Runtime events are consumed between frames; those that change the battle
//! log redraw the message panel right away.

use anyhow::Result;
use game_core::{GameSession, TickOutcome};
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration, MissedTickBehavior},
};

use crate::{
    config::CliConfig,
    input::{HeldTracker, InputHandler},
    presentation::terminal::{self, Tui},
};
use client_frontend_core::{BattleNarrator, EventConsumer, SessionView};

/// Drives one play-through from the first frame until the player quits.
pub struct EventLoop {
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) held: HeldTracker,
    pub(crate) narrator: BattleNarrator,
    /// Latest snapshot; refreshed after every tick.
    pub(crate) view: SessionView,
    pub(crate) cli_config: CliConfig,
    frame_interval: Duration,
    /// UI frames elapsed, used for synthetic key releases.
    pub(crate) frame: u64,
}

impl EventLoop {
    pub fn new(
        handle: RuntimeHandle,
        narrator: BattleNarrator,
        initial_session: &GameSession,
        cli_config: CliConfig,
        frame_interval: Duration,
    ) -> Self {
        let view = SessionView::from_session(
            initial_session,
            narrator.message_log(),
            cli_config.ui.message_panel_height as usize,
        );

        Self {
            handle,
            input: InputHandler::new(),
            held: HeldTracker::new(),
            narrator,
            view,
            cli_config,
            frame_interval,
            frame: 0,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<BattleNarrator> {
        self.render(terminal)?;

        let mut session_rx = self.handle.subscribe(Topic::Session);
        let mut battle_rx = self.handle.subscribe(Topic::Battle);

        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = session_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = battle_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                _ = frames.tick() => {
                    if self.handle_frame(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.narrator)
    }

    /// Feed one runtime event to the narrator. Returns true when the stream closed.
    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if self.absorb_event(&event) {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    /// Narrate `event` and refresh the message panel if it changed.
    /// Returns whether a redraw is due.
    pub(crate) fn absorb_event(&mut self, event: &RuntimeEvent) -> bool {
        let impact = self.narrator.on_event(event);
        if impact.requires_redraw {
            self.view.refresh_messages(
                self.narrator.message_log(),
                self.cli_config.ui.message_panel_height as usize,
            );
        }
        impact.requires_redraw
    }

    /// Run one frame. Returns true when the player asked to quit.
    async fn handle_frame(&mut self, terminal: &mut Tui) -> Result<bool> {
        self.frame += 1;

        if self.handle_input_tick().await? {
            self.render(terminal)?;
            return Ok(true);
        }

        if !terminal::reports_key_releases() {
            let hold_frames = self.cli_config.input.key_hold_frames;
            for direction in self.held.expire(self.frame, hold_frames) {
                self.handle.move_input(direction, false).await?;
            }
        }

        match self.handle.tick().await? {
            TickOutcome::EncounterStarted { enemy } => {
                tracing::debug!(%enemy, frame = self.frame, "encounter");
                self.held.clear();
            }
            TickOutcome::GameOver => self.held.clear(),
            _ => {}
        }

        self.refresh_view().await?;
        self.render(terminal)?;
        Ok(false)
    }

    async fn refresh_view(&mut self) -> Result<()> {
        let session = self.handle.query_session().await?;
        self.view = SessionView::from_session(
            &session,
            self.narrator.message_log(),
            self.cli_config.ui.message_panel_height as usize,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::MessageConfig;
    use game_core::{Archetype, BattleEvent, GameConfig, ScriptedRng};
    use runtime::Runtime;

    #[tokio::test]
    async fn only_log_changing_events_refresh_the_panel() {
        let runtime = Runtime::builder()
            .hero(Archetype::Swordsman)
            .rng(ScriptedRng::new([50]))
            .build()
            .await
            .unwrap();
        let session = GameSession::new(Archetype::Swordsman, GameConfig::default()).unwrap();
        let narrator = BattleNarrator::new(&MessageConfig::default());
        let mut event_loop = EventLoop::new(
            runtime.handle(),
            narrator,
            &session,
            CliConfig::default(),
            Duration::from_millis(16),
        );
        assert!(event_loop.view.messages.is_empty());

        assert!(!event_loop.absorb_event(&RuntimeEvent::Battle(BattleEvent::GuardLowered)));
        assert!(event_loop.view.messages.is_empty());

        assert!(event_loop.absorb_event(&RuntimeEvent::Battle(BattleEvent::Guarded { bonus: 5 })));
        assert_eq!(
            event_loop.view.messages.first().map(|m| m.text.as_str()),
            Some("The hero is defending!")
        );
    }
}
