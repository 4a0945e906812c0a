//! RNG module - deterministic shape selection
//!
//! Provides a simple LCG that implements [`RandomSource`]. The device build
//! seeds it from the hardware RNG; tests seed it with a constant so games replay
//! identically.

use crate::ports::RandomSource;
use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (re-seeding with it continues the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_uniform(&mut self, n: u32) -> u32 {
        assert!(n > 0, "next_uniform called with an empty range");
        // Multiply-shift keeps the high bits; the low bits of an LCG have short periods.
        ((self.next_u32() as u64 * n as u64) >> 32) as u32
    }
}

/// Draw a uniformly random shape.
pub fn random_shape<R: RandomSource + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::from_index(rng.next_uniform(ShapeKind::COUNT))
}
