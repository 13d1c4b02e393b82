//! Rejected player input.

use crate::error::{ErrorSeverity, GameError};
use crate::session::GameMode;
use crate::state::AttackSlot;

use super::phase::BattlePhase;

/// Why a player action was refused.
///
/// Every variant leaves the session exactly as it was; front-ends are free
/// to ignore these silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("battle is not awaiting an action (phase: {phase})")]
    NotAwaitingAction { phase: BattlePhase },

    #[error("no {slot} points left")]
    PointsExhausted { slot: AttackSlot },

    #[error("hero has no {slot} attack")]
    MissingAttack { slot: AttackSlot },

    #[error("no battle in progress (mode: {mode})")]
    NotInBattle { mode: GameMode },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAwaitingAction { .. } => "ACTION_NOT_AWAITING",
            Self::PointsExhausted { .. } => "ACTION_POINTS_EXHAUSTED",
            Self::MissingAttack { .. } => "ACTION_MISSING_ATTACK",
            Self::NotInBattle { .. } => "ACTION_NOT_IN_BATTLE",
        }
    }
}
