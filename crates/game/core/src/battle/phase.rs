//! Battle state machine phases and outcomes.

use super::action::PlayerAction;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// The enemy reached zero health.
    Won,
    /// The hero reached zero health.
    Lost,
    /// The hero ran away.
    Fled,
}

impl BattleOutcome {
    /// True when the session goes back to exploring afterwards.
    pub const fn returns_to_exploring(&self) -> bool {
        matches!(self, Self::Won | Self::Fled)
    }
}

/// Phase of a battle.
///
/// ```text
/// AwaitingAction        -> ResolvingPlayerAction   (accepted action)
/// ResolvingPlayerAction -> CheckOutcome            (attack)
///                       -> ResolvingEnemyCounter   (defend)
///                       -> Concluded(Fled)         (flee)
/// ResolvingEnemyCounter -> CheckOutcome
/// CheckOutcome          -> Concluded(Won | Lost)   (someone at zero health)
///                       -> ResolvingEnemyCounter   (enemy survived the hero's strike)
///                       -> AwaitingAction          (after the counter)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    AwaitingAction,
    ResolvingPlayerAction(PlayerAction),
    ResolvingEnemyCounter,
    CheckOutcome,
    Concluded(BattleOutcome),
}

impl BattlePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingAction => "awaiting_action",
            Self::ResolvingPlayerAction(_) => "resolving_player_action",
            Self::ResolvingEnemyCounter => "resolving_enemy_counter",
            Self::CheckOutcome => "check_outcome",
            Self::Concluded(BattleOutcome::Won) => "won",
            Self::Concluded(BattleOutcome::Lost) => "lost",
            Self::Concluded(BattleOutcome::Fled) => "fled",
        }
    }

    pub const fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Concluded(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub const fn is_concluded(&self) -> bool {
        matches!(self, Self::Concluded(_))
    }
}

impl core::fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
