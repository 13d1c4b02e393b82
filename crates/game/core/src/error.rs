//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::battle::ActionError`]) live next to
//! the operations they validate. This module holds the shared severity
//! classification and the configuration errors raised while setting up a
//! session.
//!
//! # Severity
//!
//! - **Validation**: rejected player input; state is untouched and callers
//!   are expected to ignore it
//! - **Fatal**: the session cannot be constructed from the given setup

use crate::state::Archetype;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: attacking with no points left, acting outside a battle
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - cannot continue.
    ///
    /// Examples: unknown archetype tag, empty enemy roster
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or unusable setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building units, configs, or sessions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown archetype tag `{0}`")]
    UnknownArchetype(String),

    #[error("{0} cannot be chosen as the hero")]
    NotAHero(Archetype),

    #[error("enemy roster must contain at least one archetype")]
    EmptyEnemyRoster,

    #[error("invalid configuration value for `{field}`")]
    InvalidField { field: &'static str },
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownArchetype(_) => "CONFIG_UNKNOWN_ARCHETYPE",
            Self::NotAHero(_) => "CONFIG_NOT_A_HERO",
            Self::EmptyEnemyRoster => "CONFIG_EMPTY_ENEMY_ROSTER",
            Self::InvalidField { .. } => "CONFIG_INVALID_FIELD",
        }
    }
}
