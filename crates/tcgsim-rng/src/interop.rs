//! `rand` trait implementations.
//!
//! Lets `rand` distributions and helpers draw from a session generator. These
//! draws advance the same state as native draws, so snapshots still capture
//! them, but their output is not part of the pinned replay vectors.

use rand::{RngCore, SeedableRng};

use crate::seeded::SeededRng;

impl RngCore for SeededRng {
    /// Combines the high 16 bits of two consecutive states.
    fn next_u32(&mut self) -> u32 {
        let high = self.step() >> 15;
        let low = self.step() >> 15;
        (high << 16) | low
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 4];

    /// Little-endian `u32` seed, reduced to 31 bits like [`SeededRng::new`].
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
