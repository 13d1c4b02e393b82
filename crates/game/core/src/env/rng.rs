//! RNG oracle for uniform random draws.
//!
//! This module provides a trait-based RNG seam for the game mechanics that
//! need dice: hit rolls, critical rolls, random encounters and enemy choice.
//!
//! # Determinism
//!
//! [`PcgRng`] produces the same sequence for the same seed, which makes a
//! seeded session replayable. [`ScriptedRng`] hands out a fixed list of
//! results and is what the unit tests use to pin each roll.

/// Source of independent, uniformly distributed draws.
pub trait RngOracle: Send {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw uniformly from `[0, bound)`.
    ///
    /// Uses rejection sampling so every value is equally likely. A `bound` of
    /// 0 or 1 always yields 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }

        // 2^32 mod bound: raw values under this threshold would bias the result.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    /// Roll a percentile die (0-99 inclusive).
    ///
    /// Used by dodge and critical checks.
    fn roll_percent(&mut self) -> u32 {
        self.below(100)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut state = Self::pcg_step(0);
        state = state.wrapping_add(seed);
        Self {
            state: Self::pcg_step(state),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of draw results, cycling when exhausted.
///
/// [`RngOracle::below`] returns the next scripted value reduced modulo the
/// bound, so a script of `[3, 50]` makes the first percentile roll 3 and the
/// second 50. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn advance(&mut self) -> u32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn below(&mut self, bound: u32) -> u32 {
        let value = self.advance();
        if bound == 0 { 0 } else { value % bound }
    }
}
