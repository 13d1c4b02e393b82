//! Deterministic battle and exploration rules shared across clients.
//!
//! `game-core` defines the canonical rules (units, encounters, battles, the
//! session state machine) and exposes pure APIs that the runtime drives once
//! per frame. Nothing here performs I/O or reads a clock; every random draw
//! goes through an injected [`env::RngOracle`] so tests can script the dice.
//!
//! All mutation of long-lived state flows through [`session::GameSession`],
//! which owns the hero and lends it to one [`battle::Battle`] at a time.
pub mod battle;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

pub use battle::{
    ActionError, AttackSlot, Battle, BattleEvent, BattleOutcome, BattlePhase, PlayerAction,
    TurnReport,
};
pub use combat::{AttackOutcome, AttackReport};
pub use config::{EncounterConfig, FieldConfig, GameConfig};
pub use encounter::EncounterTrigger;
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{ConfigurationError, ErrorSeverity, GameError};
pub use session::{Direction, GameMode, GameSession, TickOutcome};
pub use state::{
    ActionPoints, Archetype, ArchetypeStats, HeroKit, Position, ResourceMeter, Unit, Velocity,
};
