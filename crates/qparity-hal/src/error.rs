//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur while applying a transform.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// State length does not describe a register the transform fits.
    #[error("State dimension mismatch: expected {expected} amplitudes, got {got}")]
    DimensionMismatch {
        /// Expected number of amplitudes.
        expected: usize,
        /// Actual number of amplitudes.
        got: usize,
    },

    /// Register exceeds the adapter's capacity.
    #[error("Register of {requested} qubits exceeds adapter limit of {max}")]
    TooManyQubits {
        /// Requested register width.
        requested: u32,
        /// Adapter limit.
        max: u32,
    },

    /// Transform does not fit the register.
    #[error("Invalid transform: {0}")]
    InvalidTransform(#[from] qparity_ir::IrError),

    /// Generic adapter error.
    #[error("Adapter error: {0}")]
    Adapter(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
