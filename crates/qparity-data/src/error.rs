//! Error types for the data crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building, validating or persisting problems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The simulator adapter rejected a state or transform.
    #[error("Transform adapter error: {0}")]
    Adapter(#[from] qparity_hal::HalError),

    /// Transform or state failed IR validation.
    #[error("IR error: {0}")]
    Ir(#[from] qparity_ir::IrError),

    /// A problem violates one of its structural invariants.
    #[error("Problem '{problem}' is invalid: {reason}")]
    InvalidProblem {
        /// Name of the offending problem.
        problem: String,
        /// Which invariant failed.
        reason: String,
    },

    /// No catalog entry with this index.
    #[error("Unknown problem index {0}; the catalog has problems 0..={max}", max = crate::catalog::COUNT - 1)]
    UnknownProblem(usize),

    /// Problem file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Problem file is not valid JSON for a problem.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;
