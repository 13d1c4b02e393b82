//! Events produced while resolving a turn.

use arrayvec::ArrayVec;

use crate::combat::AttackReport;
use crate::state::Archetype;

use super::action::PlayerAction;
use super::phase::BattleOutcome;

/// Upper bound on events a single turn can produce
/// (defend: guard, counter, guard lowered, conclusion).
pub const MAX_TURN_EVENTS: usize = 4;

/// Something the presentation layer may want to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An attack was resolved.
    Attack(AttackReport),
    /// The hero raised its defense by `bonus`.
    Guarded { bonus: u32 },
    /// The defend bonus was removed after absorbing one attack.
    GuardLowered,
    /// The hero fled.
    Fled,
    /// The battle ended. `winner` is absent when the hero fled.
    Concluded {
        outcome: BattleOutcome,
        winner: Option<Archetype>,
    },
}

/// Record of one accepted player action and everything it caused.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// 1-based turn number within the battle.
    pub turn: u32,
    pub action: PlayerAction,
    events: ArrayVec<BattleEvent, MAX_TURN_EVENTS>,
    outcome: Option<BattleOutcome>,
}

impl TurnReport {
    pub(crate) fn new(turn: u32, action: PlayerAction) -> Self {
        Self {
            turn,
            action,
            events: ArrayVec::new(),
            outcome: None,
        }
    }

    pub(crate) fn record(&mut self, event: BattleEvent) {
        if let BattleEvent::Concluded { outcome, .. } = event {
            self.outcome = Some(outcome);
        }
        let pushed = self.events.try_push(event);
        debug_assert!(pushed.is_ok(), "turn produced more than {MAX_TURN_EVENTS} events");
    }

    /// Events in the order they happened.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn attacks(&self) -> impl Iterator<Item = &AttackReport> {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::Attack(report) => Some(report),
            _ => None,
        })
    }

    /// How the battle ended, if this turn ended it.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }
}
