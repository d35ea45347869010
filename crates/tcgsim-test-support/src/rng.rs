//! Test RNG — scripted `DeterministicRng` implementations for tests.

use tcgsim_core::rng::DeterministicRng;

/// A no-op RNG whose every draw is `0.0`: `next_int` always returns `min`,
/// every coin is tails and `shuffle` rotates each element down one slot.
/// Suitable for tests that do not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns draws from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable
/// outcomes (e.g., the exact index order of a shuffle).
#[derive(Debug)]
pub struct SequenceRng {
    draws: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given draws, each in `[0.0, 1.0)`.
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, index: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let draw = self.draws[self.index];
        self.index += 1;
        draw
    }
}
