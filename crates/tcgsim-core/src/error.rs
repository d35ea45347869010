//! Generator error types.

use thiserror::Error;

/// Errors raised when generator state enters or leaves the 31-bit domain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// A seed or state value does not fit in 31 bits.
    #[error("{field} {value} is outside the 31-bit generator range")]
    OutOfRange {
        /// Which snapshot field was rejected (`"seed"` or `"state"`).
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A serialized snapshot could not be decoded.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}
