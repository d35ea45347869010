//! TCG Sim — command-line replay tool.
//!
//! Draws from a generator built from a seed, a resumed snapshot or the
//! clock, and reports the snapshots on both sides of the draw so the
//! sequence can be continued later.

pub mod cli;
pub mod draw;
pub mod error;
