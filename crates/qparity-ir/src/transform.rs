//! Ordered gate sequences.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateOp, SingleQubitGate};
use crate::qubit::QubitId;

/// An ordered sequence of gate operations, applied first to last.
///
/// A transform carries no register width of its own; it is checked against
/// one with [`Transform::validate`] before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform {
    ops: Vec<GateOp>,
}

impl Transform {
    /// Create an empty (identity) transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform from existing operations.
    pub fn from_ops(ops: impl IntoIterator<Item = GateOp>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// Append an operation.
    pub fn push(&mut self, op: GateOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Append a single-qubit gate.
    pub fn gate(&mut self, gate: SingleQubitGate, target: QubitId) -> &mut Self {
        self.push(GateOp::single(gate, target))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(SingleQubitGate::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(SingleQubitGate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(SingleQubitGate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(SingleQubitGate::Z, qubit)
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.push(GateOp::cnot(control, target))
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the transform is the identity (no operations).
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over operations in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, GateOp> {
        self.ops.iter()
    }

    /// Operations as a slice.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Smallest register width that contains every qubit this transform touches.
    pub fn min_qubits(&self) -> u32 {
        self.ops
            .iter()
            .flat_map(GateOp::qubits)
            .map(|q| q.0.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Check that every operation fits a register of `num_qubits` qubits.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        for op in &self.ops {
            for qubit in op.qubits() {
                if qubit.0 >= num_qubits {
                    return Err(IrError::QubitNotFound {
                        qubit,
                        num_qubits,
                        gate_name: Some(op.name().to_string()),
                    });
                }
            }
            if let GateOp::Cnot { control, target } = *op {
                if control == target {
                    return Err(IrError::DuplicateQubit {
                        qubit: control,
                        gate_name: Some(op.name().to_string()),
                    });
                }
            }
        }
        Ok(())
    }

    /// The transform that undoes this one: inverted gates in reverse order.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            ops: self.ops.iter().rev().map(GateOp::inverse).collect(),
        }
    }

    /// This transform followed by `other`.
    #[must_use]
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            ops: self.ops.iter().chain(other.ops.iter()).copied().collect(),
        }
    }
}

impl FromIterator<GateOp> for Transform {
    fn from_iter<T: IntoIterator<Item = GateOp>>(iter: T) -> Self {
        Self::from_ops(iter)
    }
}

impl<'a> IntoIterator for &'a Transform {
    type Item = &'a GateOp;
    type IntoIter = std::slice::Iter<'a, GateOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
