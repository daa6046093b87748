//! The transform adapter contract.
//!
//! | Method | Required | Returns |
//! |--------|----------|---------|
//! | `name()` | yes | `&str` |
//! | `max_qubits()` | yes | `u32` |
//! | `apply()` | yes | `HalResult<StateVector>` |

use num_complex::Complex64;

use qparity_ir::state::qubits_for_dimension;
use qparity_ir::{StateVector, Transform};

use crate::error::{HalError, HalResult};

/// Applies a fixed gate sequence to a state vector.
///
/// # Contract
///
/// - `apply()` MUST be deterministic for a given transform and input.
/// - `apply()` MUST preserve the L2 norm of the input (unitary evolution).
/// - CNOT descriptors act on their `(control, target)` pair; every other
///   descriptor acts on its single target.
/// - Any register the implementation acquires MUST be released before
///   `apply()` returns, on the error path as well.
pub trait TransformAdapter: Send + Sync {
    /// Get the name of this adapter.
    fn name(&self) -> &str;

    /// Widest register this adapter can evolve.
    fn max_qubits(&self) -> u32;

    /// Evolve `state` through `transform` and return the resulting state.
    fn apply(&self, transform: &Transform, state: &[Complex64]) -> HalResult<StateVector>;
}

impl<T: TransformAdapter + ?Sized> TransformAdapter for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_qubits(&self) -> u32 {
        (**self).max_qubits()
    }

    fn apply(&self, transform: &Transform, state: &[Complex64]) -> HalResult<StateVector> {
        (**self).apply(transform, state)
    }
}

/// Shared input validation for adapters.
///
/// Returns the register width implied by the state's dimension after checking
/// that it is a power of two, fits `max_qubits`, and contains every qubit the
/// transform touches.
pub fn check_input(transform: &Transform, state: &[Complex64], max_qubits: u32) -> HalResult<u32> {
    let num_qubits = qubits_for_dimension(state.len()).map_err(|_| HalError::DimensionMismatch {
        expected: 1usize.checked_shl(transform.min_qubits().max(1)).unwrap_or(0),
        got: state.len(),
    })?;

    if num_qubits == 0 {
        return Err(HalError::DimensionMismatch {
            expected: 2,
            got: state.len(),
        });
    }

    if num_qubits > max_qubits {
        return Err(HalError::TooManyQubits {
            requested: num_qubits,
            max: max_qubits,
        });
    }

    transform.validate(num_qubits)?;
    Ok(num_qubits)
}
