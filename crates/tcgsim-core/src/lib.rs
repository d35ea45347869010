//! TCG Sim Core — shared randomness abstractions.
//!
//! This crate defines the traits and types every game-resolution component
//! depends on when it needs a random decision. It contains no concrete
//! generator.

pub mod clock;
pub mod error;
pub mod rng;
