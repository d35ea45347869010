//! Linear-congruential generator.
//!
//! The recurrence and its constants are fixed: saved seeds and replay logs
//! only reproduce if every build computes
//! `state' = (1103515245 * state + 12345) mod 2^31`.

use tcgsim_core::clock::{Clock, SystemClock};
use tcgsim_core::error::RngError;
use tcgsim_core::rng::DeterministicRng;
use tracing::{debug, trace};

use crate::snapshot::RngSnapshot;

/// LCG multiplier `A`.
pub const MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment `C`.
pub const INCREMENT: u64 = 12_345;
/// LCG modulus `M = 2^31`.
pub const MODULUS: u64 = 1 << 31;

const STATE_MASK: u64 = MODULUS - 1;
const MODULUS_F64: f64 = 2_147_483_648.0;

/// Largest seed or state value the generator accepts.
pub const MAX_STATE: u32 = 0x7FFF_FFFF;

/// Deterministic generator driving every random decision of a game session.
///
/// Cloning forks the sequence: the clone and the original produce the same
/// draws from that point on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    seed: u32,
    state: u32,
}

impl SeededRng {
    /// Creates a generator from an explicit seed.
    ///
    /// Seeds wider than 31 bits are reduced modulo `2^31`; [`seed`] reports
    /// the reduced value.
    ///
    /// [`seed`]: SeededRng::seed
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let seed = seed & MAX_STATE;
        Self { seed, state: seed }
    }

    /// Creates a generator seeded from the clock's Unix time in milliseconds,
    /// reduced modulo `2^31`.
    ///
    /// The seed is logged so the session can be reproduced later.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        let seed = (clock.unix_millis() as u64 & STATE_MASK) as u32;
        debug!(seed, "derived generator seed from clock");
        Self::new(seed)
    }

    /// Creates a generator seeded from the system clock.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Restores a generator whose next draw equals the next draw of the
    /// generator the snapshot was taken from.
    ///
    /// # Errors
    ///
    /// Returns `RngError::OutOfRange` if either field exceeds 31 bits.
    pub fn from_snapshot(snapshot: RngSnapshot) -> Result<Self, RngError> {
        snapshot.validate()?;
        debug!(
            seed = snapshot.seed,
            state = snapshot.state,
            "restored generator from snapshot"
        );
        Ok(Self {
            seed: snapshot.seed,
            state: snapshot.state,
        })
    }

    /// The immutable construction seed.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The current internal state.
    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Overwrites the internal state, bypassing the recurrence.
    ///
    /// # Errors
    ///
    /// Returns `RngError::OutOfRange` if `state` exceeds 31 bits.
    pub fn set_state(&mut self, state: u32) -> Result<(), RngError> {
        if state > MAX_STATE {
            return Err(RngError::OutOfRange {
                field: "state",
                value: state,
            });
        }
        trace!(from = self.state, to = state, "generator state overwritten");
        self.state = state;
        Ok(())
    }

    /// Rewinds to the seed; subsequent draws repeat the sequence from the start.
    pub fn reset(&mut self) {
        trace!(seed = self.seed, "generator reset");
        self.state = self.seed;
    }

    /// Captures `{seed, state}` as an independent value.
    #[must_use]
    pub fn snapshot(&self) -> RngSnapshot {
        RngSnapshot {
            seed: self.seed,
            state: self.state,
        }
    }

    /// Applies the recurrence once and returns the new state.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn step(&mut self) -> u32 {
        let next = (MULTIPLIER * u64::from(self.state) + INCREMENT) & STATE_MASK;
        self.state = next as u32;
        self.state
    }
}

impl DeterministicRng for SeededRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / MODULUS_F64
    }
}

impl TryFrom<RngSnapshot> for SeededRng {
    type Error = RngError;

    fn try_from(snapshot: RngSnapshot) -> Result<Self, Self::Error> {
        Self::from_snapshot(snapshot)
    }
}
