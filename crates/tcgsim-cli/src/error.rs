//! TCG Sim CLI error types.

use tcgsim_core::error::RngError;
use thiserror::Error;

/// Errors that stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The generator rejected a seed or snapshot.
    #[error("generator error: {0}")]
    Rng(#[from] RngError),

    /// The report could not be encoded.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
