//! The persisted outcome of one evaluation run.

use serde::{Deserialize, Serialize};

/// Everything kept about a scored run.
///
/// Serialized with exactly these keys; absent values are written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Problem identity, e.g. `problem2`.
    pub problem_name: String,
    /// `N` for `problemN`, otherwise `None`.
    pub problem_index: Option<u32>,
    /// Training sample limit applied; `None` means every sample was used.
    pub training_vectors_limit: Option<usize>,
    /// Solution identifier.
    pub solution_function_name: String,
    /// Captured solution source.
    pub source_code: Option<String>,
    /// Rendered diagram of the learned circuit.
    pub circuit_str: Option<String>,
    /// Training wall-clock time in seconds.
    pub training_time: f64,
    /// Training error reported by the solution.
    pub training_error: Option<f64>,
    /// Error percentage on the test set (lower is better).
    pub test_accuracy: f64,
    /// Sum of absolute test errors.
    pub test_error: f64,
}
