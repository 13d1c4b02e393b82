//! Randomness sources backing the session's [`game_core::RngOracle`] seam.
//!
//! Seeded runs use [`game_core::PcgRng`] directly; everything else draws from
//! [`EntropyRng`].
mod rng;

pub use rng::EntropyRng;
