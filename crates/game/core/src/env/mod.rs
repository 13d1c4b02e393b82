//! Capabilities the rules consume from their environment.
//!
//! The rules never reach for ambient randomness. Every draw (dodge, crit,
//! encounter, enemy choice) goes through an [`RngOracle`] supplied by the
//! caller, so production code can plug in entropy while tests script exact
//! rolls with [`ScriptedRng`].
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
