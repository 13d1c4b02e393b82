//! Player choices while a battle awaits input.

use crate::state::AttackSlot;

/// An action the player can pick during `AwaitingAction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerAction {
    /// Primary attack; costs one primary point.
    PrimaryAttack,
    /// Secondary attack; costs one secondary point.
    SecondaryAttack,
    /// Raise defense for the next incoming attack.
    Defend,
    /// Leave the battle. Always succeeds.
    Flee,
}

impl PlayerAction {
    pub const ALL: [Self; 4] = [
        Self::PrimaryAttack,
        Self::SecondaryAttack,
        Self::Defend,
        Self::Flee,
    ];

    /// The attack slot this action draws on, if it is an attack.
    pub const fn attack_slot(&self) -> Option<AttackSlot> {
        match self {
            Self::PrimaryAttack => Some(AttackSlot::Primary),
            Self::SecondaryAttack => Some(AttackSlot::Secondary),
            Self::Defend | Self::Flee => None,
        }
    }
}
