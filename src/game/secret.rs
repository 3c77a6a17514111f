//! Sources for the secret number
//!
//! The session draws its target through [`SecretSource`] so tests can pin it.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Draws the secret target for a round
pub trait SecretSource {
    /// Draw a value from `range` (inclusive on both ends)
    ///
    /// Implementations must return a value inside `range`.
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform draws from any `rand` generator
pub struct RandomSecret<R> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecret<ThreadRng> {
    /// Thread-local generator, used for real play
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomSecret<StdRng> {
    /// Deterministic generator for reproducible rounds
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Always yields the same number, clamped into the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub u32);

impl SecretSource for FixedSecret {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.clamp(*range.start(), *range.end())
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).draw(range)
    }
}
