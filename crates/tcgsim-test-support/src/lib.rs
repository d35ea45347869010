//! Shared test doubles for the TCG Sim battle engine.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
