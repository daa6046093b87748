//! Evaluator error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// No solution identifier was given.
    #[error("Please provide the name of your proposed solution function as --fun NAME to evaluate")]
    MissingSolution,

    /// The trained bundle carries no inference function.
    #[error("Solution '{0}' returned no inference function; training must produce one to be scored")]
    InvalidInference(String),

    /// No registered solution has this name.
    #[error("Unknown solution '{name}' (available: {available})")]
    UnknownSolution {
        /// Requested identifier.
        name: String,
        /// Comma-separated registered identifiers.
        available: String,
    },

    /// Problem data could not be loaded or is malformed.
    #[error(transparent)]
    Data(#[from] qparity_data::DataError),

    /// I/O error.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl EvalError {
    /// Whether the run should end quietly with a zero exit status.
    pub fn is_graceful(&self) -> bool {
        matches!(self, EvalError::MissingSolution | EvalError::InvalidInference(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graceful_variants() {
        assert!(EvalError::MissingSolution.is_graceful());
        assert!(EvalError::InvalidInference("x".into()).is_graceful());
        let unknown = EvalError::UnknownSolution {
            name: "nope".into(),
            available: "zero".into(),
        };
        assert!(!unknown.is_graceful());
        assert!(unknown.to_string().contains("nope"));
    }
}
