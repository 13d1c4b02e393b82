//! Event types for different topics.

use game_core::{Archetype, BattleOutcome};
use serde::{Deserialize, Serialize};

/// Session transitions: entering battle, leaving it, and the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A random encounter fired on `frame` and a battle against `enemy` began.
    EncounterStarted {
        enemy: Archetype,
        frame: u64,
        /// Running count of encounters in this session, including this one.
        encounter: u32,
    },

    /// The current battle concluded. `winner` is absent when the hero fled.
    BattleEnded {
        outcome: BattleOutcome,
        winner: Option<Archetype>,
    },

    /// The hero was defeated; no further input will be accepted.
    GameOver { frame: u64 },
}
