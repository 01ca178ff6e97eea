//! Seedable Xorshift64 generator behind [`crate::ops::random_color`].
//!
//! Random colors are reproducible: the same seed yields the same sequence
//! on every platform, since the core step is pure integer arithmetic.

use crate::num::Convert;
use serde::{Deserialize, Serialize};

/// Xorshift64 generator with shifts (13, 7, 17).
///
/// A zero seed is a fixed point of the algorithm, so it is swapped for a
/// non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_C010_12ED_F00D;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns it.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform byte taken from the high bits of the next state.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56).convert()
    }
}
