//! Persisted generator position.

use serde::{Deserialize, Serialize};
use tcgsim_core::error::RngError;

use crate::seeded::MAX_STATE;

/// `{seed, state}` pair captured from a [`SeededRng`](crate::SeededRng).
///
/// Holds no reference to the generator it came from. A save-game or replay
/// log stores both fields verbatim and restores through
/// [`SeededRng::from_snapshot`](crate::SeededRng::from_snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RngSnapshot {
    /// Construction seed.
    pub seed: u32,
    /// State at capture time.
    pub state: u32,
}

impl RngSnapshot {
    /// Checks that both fields fit in 31 bits.
    ///
    /// # Errors
    ///
    /// Returns `RngError::OutOfRange` naming the first offending field.
    pub fn validate(&self) -> Result<(), RngError> {
        if self.seed > MAX_STATE {
            return Err(RngError::OutOfRange {
                field: "seed",
                value: self.seed,
            });
        }
        if self.state > MAX_STATE {
            return Err(RngError::OutOfRange {
                field: "state",
                value: self.state,
            });
        }
        Ok(())
    }

    /// Encodes the snapshot as `{"seed":..,"state":..}`.
    ///
    /// # Panics
    ///
    /// Never in practice: serializing two integers cannot fail.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("RngSnapshot serialization is infallible")
    }

    /// Decodes and validates a snapshot produced by [`to_json`].
    ///
    /// # Errors
    ///
    /// Returns `RngError::MalformedSnapshot` if the document does not parse,
    /// or `RngError::OutOfRange` if a field exceeds 31 bits.
    ///
    /// [`to_json`]: RngSnapshot::to_json
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| RngError::MalformedSnapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
