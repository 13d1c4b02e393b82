//! Combat resolution system.
//!
//! This module provides the attack algorithm shared by the hero's attacks and
//! the enemy's counter. The roll checks and damage arithmetic are pure
//! functions; [`resolve_attack`] strings them together, draws the rolls from
//! the injected RNG and applies the result to the defender.
//!
//! # Core Functions
//!
//! - `check_hit`: dodge check against the defender's dodge chance
//! - `check_critical`: critical check against the attacker's crit chance
//! - `calculate_damage`: power, doubled on a critical
//! - `mitigate_damage`: defense reduction, 1 when outclassed
//! - `resolve_attack`: the full sequence, producing an [`AttackReport`]

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{calculate_damage, mitigate_damage};
pub use hit::{check_critical, check_hit};
pub use result::{AttackOutcome, AttackReport, resolve_attack};
