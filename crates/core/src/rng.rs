//! RNG module - injectable random sources for shape and color selection
//!
//! The game never reaches for a global generator. Whoever builds a
//! [`GameState`](crate::GameState) hands it a [`RandomSource`]:
//!
//! - [`SimpleRng`]: small seeded LCG, fully deterministic (tests, replays)
//! - [`RngSource`]: adapter over any `rand::Rng`, e.g. `rand::thread_rng()`
//! - [`ScriptedSource`]: replays a fixed index list

use rand::Rng;

/// Uniform index generator
pub trait RandomSource {
    /// Return a value in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle quickly; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (seed for an identical continuation)
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
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0 && len <= u16::MAX as usize);
        self.next_range(len as u32) as usize
    }
}

/// Adapter exposing a `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
///
/// Each value is reduced modulo the requested range, so a script written for
/// the shape catalog stays valid for the color palette.
///
/// ```
/// use blockfall_core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![6, 9]);
/// assert_eq!(source.next_index(7), 6);
/// assert_eq!(source.next_index(8), 1);
/// assert_eq!(source.next_index(7), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
