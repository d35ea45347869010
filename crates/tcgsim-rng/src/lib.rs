//! TCG Sim — seeded random number generation.
//!
//! [`SeededRng`] is the generator a game session owns. Its whole future is
//! fixed by a 31-bit seed, and an [`RngSnapshot`] taken at any point restores
//! an identical generator for save and replay.

mod interop;
pub mod seeded;
pub mod snapshot;

pub use seeded::SeededRng;
pub use snapshot::RngSnapshot;
pub use tcgsim_core::error::RngError;
pub use tcgsim_core::rng::{CoinFlip, DeterministicRng, DeterministicRngExt};
