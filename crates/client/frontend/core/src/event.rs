//! Utilities for reacting to runtime events inside UI layers.
use game_core::{BattleEvent, BattleOutcome};
use runtime::{Event, SessionEvent};

use crate::config::MessageConfig;
use crate::format;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Turns bus events into the battle log and the current banner.
#[derive(Clone, Debug)]
pub struct BattleNarrator {
    log: MessageLog,
    show_misses: bool,
    banner: Option<MessageEntry>,
}

impl BattleNarrator {
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            log: MessageLog::new(config.capacity),
            show_misses: config.show_misses,
            banner: None,
        }
    }

    /// Headline for the most recent conclusion (`SLIME WINS!`, `GAME OVER!`).
    ///
    /// Cleared when the next encounter starts.
    pub fn banner(&self) -> Option<&MessageEntry> {
        self.banner.as_ref()
    }

    fn on_battle_event(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Attack(report) => {
                for line in format::attack_lines(report, self.show_misses) {
                    self.log.push(line);
                }
            }
            BattleEvent::Guarded { .. } => self.log.push_text(format::DEFEND_TEXT),
            BattleEvent::GuardLowered => {}
            BattleEvent::Fled => self.log.push_text(format::FLEE_TEXT),
            BattleEvent::Concluded { outcome, winner } => {
                let Some(winner) = winner else {
                    return;
                };
                let level = match outcome {
                    BattleOutcome::Lost => MessageLevel::Defeat,
                    _ => MessageLevel::Victory,
                };
                let entry = MessageEntry::new(format::winner_banner(*winner), level);
                self.log.push(entry.clone());
                self.banner = Some(entry);
            }
        }
    }

    fn on_session_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::EncounterStarted { enemy, .. } => {
                self.banner = None;
                self.log.push_text(format::encounter_text(*enemy));
            }
            SessionEvent::BattleEnded { .. } => {}
            SessionEvent::GameOver { .. } => {
                let entry = MessageEntry::new(format::GAME_OVER_TEXT, MessageLevel::Defeat);
                self.log.push(entry.clone());
                self.banner = Some(entry);
            }
        }
    }
}

impl EventConsumer for BattleNarrator {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Battle(BattleEvent::GuardLowered) => return EventImpact::none(),
            Event::Battle(battle) => self.on_battle_event(battle),
            Event::Session(SessionEvent::BattleEnded { .. }) => return EventImpact::none(),
            Event::Session(session) => self.on_session_event(session),
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
