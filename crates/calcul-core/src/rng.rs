//! Random number sources for problem generation
//!
//! The automaton draws through the `RandomSource` trait so tests can feed
//! scripted sequences. `GameRng` is the default xorshift64 implementation.

use serde::{Deserialize, Serialize};

/// Anything that can draw an integer uniformly from an inclusive range
pub trait RandomSource {
    /// Draw a value in `[min, max]`
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        (**self).draw(min, max)
    }
}

/// A deterministic random number generator
///
/// Uses xorshift64 so a seed always reproduces the same problem sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // xorshift requires a non-zero state
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG from a saved state
    pub fn from_state(state: u64) -> Self {
        Self::new(state)
    }

    /// Get the current state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random i64 in range [min, max]
    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        let range = (max - min + 1) as u64;
        let value = self.next_u64() % range;
        min + value as i64
    }
}

impl RandomSource for GameRng {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        self.range_i64(i64::from(min), i64::from(max)) as u32
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
