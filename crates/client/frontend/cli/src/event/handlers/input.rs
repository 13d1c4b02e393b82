//! Keyboard handling.

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use tokio::time::Duration;

use crate::{event::EventLoop, input::KeyAction};

impl EventLoop {
    /// Drain every pending terminal event. Returns true on quit.
    pub(in crate::event) async fn handle_input_tick(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            if let TermEvent::Key(key) = term_event::read()? {
                if self.handle_key(key).await? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.input.handle_key(key, self.view.mode) {
            KeyAction::Quit => {
                self.narrator.message_log_mut().push_text("Quitting...");
                Ok(true)
            }
            KeyAction::Move { direction, pressed } => {
                if pressed {
                    self.held.press(direction, self.frame);
                } else {
                    self.held.release(direction);
                }
                self.handle.move_input(direction, pressed).await?;
                Ok(false)
            }
            KeyAction::Battle(action) => {
                match self.handle.player_action(action).await? {
                    Some(report) => {
                        tracing::debug!(%action, turn = report.turn, events = report.events().len(), "turn resolved")
                    }
                    None => tracing::debug!(%action, "action ignored"),
                }
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }
}
