//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the register the transform is applied to.
    #[error("Qubit {qubit} not found in a {num_qubits}-qubit register{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Width of the register.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A register must contain at least one qubit.
    #[error("Register must contain at least one qubit")]
    EmptyRegister,

    /// Register too wide for its state vector to be addressed.
    #[error("Register of {num_qubits} qubits exceeds the supported maximum of {max}")]
    RegisterTooWide {
        /// Requested width.
        num_qubits: u32,
        /// Supported maximum.
        max: u32,
    },

    /// Vector length is not a power of two.
    #[error("State dimension {0} is not a power of two")]
    InvalidDimension(usize),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
