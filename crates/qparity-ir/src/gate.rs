//! Gate descriptors.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::qubit::QubitId;

/// A 2×2 unitary in row-major order: `[[m00, m01], [m10, m11]]`.
pub type Matrix2 = [[Complex64; 2]; 2];

/// Single-qubit unitaries with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SingleQubitGate {
    // Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate, implemented as `Rx(π/2)`.
    SX,
    /// sqrt(X)-dagger gate, implemented as `Rx(-π/2)`.
    SXdg,

    // Rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate.
    P(f64),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),
}

impl SingleQubitGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SingleQubitGate::I => "id",
            SingleQubitGate::X => "x",
            SingleQubitGate::Y => "y",
            SingleQubitGate::Z => "z",
            SingleQubitGate::H => "h",
            SingleQubitGate::S => "s",
            SingleQubitGate::Sdg => "sdg",
            SingleQubitGate::T => "t",
            SingleQubitGate::Tdg => "tdg",
            SingleQubitGate::SX => "sx",
            SingleQubitGate::SXdg => "sxdg",
            SingleQubitGate::Rx(_) => "rx",
            SingleQubitGate::Ry(_) => "ry",
            SingleQubitGate::Rz(_) => "rz",
            SingleQubitGate::P(_) => "p",
            SingleQubitGate::U(_, _, _) => "u",
        }
    }

    /// Short label used when drawing the gate on a wire.
    pub fn label(&self) -> String {
        match self {
            SingleQubitGate::Rx(t) => format!("Rx({t:.3})"),
            SingleQubitGate::Ry(t) => format!("Ry({t:.3})"),
            SingleQubitGate::Rz(t) => format!("Rz({t:.3})"),
            SingleQubitGate::P(t) => format!("P({t:.3})"),
            SingleQubitGate::U(t, p, l) => format!("U({t:.3},{p:.3},{l:.3})"),
            SingleQubitGate::Sdg => "S†".to_string(),
            SingleQubitGate::Tdg => "T†".to_string(),
            SingleQubitGate::SXdg => "SX†".to_string(),
            other => other.name().to_uppercase(),
        }
    }

    /// The inverse gate, so that `g.inverse()` after `g` is the identity.
    pub fn inverse(&self) -> Self {
        match *self {
            SingleQubitGate::S => SingleQubitGate::Sdg,
            SingleQubitGate::Sdg => SingleQubitGate::S,
            SingleQubitGate::T => SingleQubitGate::Tdg,
            SingleQubitGate::Tdg => SingleQubitGate::T,
            SingleQubitGate::SX => SingleQubitGate::SXdg,
            SingleQubitGate::SXdg => SingleQubitGate::SX,
            SingleQubitGate::Rx(t) => SingleQubitGate::Rx(-t),
            SingleQubitGate::Ry(t) => SingleQubitGate::Ry(-t),
            SingleQubitGate::Rz(t) => SingleQubitGate::Rz(-t),
            SingleQubitGate::P(t) => SingleQubitGate::P(-t),
            SingleQubitGate::U(t, p, l) => SingleQubitGate::U(-t, -l, -p),
            hermitian => hermitian,
        }
    }

    /// The 2×2 unitary matrix of this gate.
    pub fn matrix(&self) -> Matrix2 {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match *self {
            SingleQubitGate::I => [[one, zero], [zero, one]],
            SingleQubitGate::X => [[zero, one], [one, zero]],
            SingleQubitGate::Y => [[zero, -i], [i, zero]],
            SingleQubitGate::Z => [[one, zero], [zero, -one]],
            SingleQubitGate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            SingleQubitGate::S => phase_matrix(PI / 2.0),
            SingleQubitGate::Sdg => phase_matrix(-PI / 2.0),
            SingleQubitGate::T => phase_matrix(PI / 4.0),
            SingleQubitGate::Tdg => phase_matrix(-PI / 4.0),
            SingleQubitGate::SX => SingleQubitGate::Rx(PI / 2.0).matrix(),
            SingleQubitGate::SXdg => SingleQubitGate::Rx(-PI / 2.0).matrix(),
            SingleQubitGate::Rx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, neg_i_s], [neg_i_s, c]]
            }
            SingleQubitGate::Ry(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            SingleQubitGate::Rz(theta) => [
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)],
            ],
            SingleQubitGate::P(theta) => phase_matrix(theta),
            SingleQubitGate::U(theta, phi, lambda) => {
                let c = (theta / 2.0).cos();
                let s = (theta / 2.0).sin();
                [
                    [Complex64::new(c, 0.0), -Complex64::from_polar(s, lambda)],
                    [
                        Complex64::from_polar(s, phi),
                        Complex64::from_polar(c, phi + lambda),
                    ],
                ]
            }
        }
    }
}

fn phase_matrix(theta: f64) -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    [
        [Complex64::new(1.0, 0.0), zero],
        [zero, Complex64::from_polar(1.0, theta)],
    ]
}

/// One step of a transform: a gate together with the qubits it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GateOp {
    /// A single-qubit unitary on `target`.
    Single {
        /// The gate.
        gate: SingleQubitGate,
        /// Qubit the gate acts on.
        target: QubitId,
    },
    /// Controlled-NOT flipping `target` when `control` is set.
    Cnot {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
}

impl GateOp {
    /// Create a single-qubit gate operation.
    pub fn single(gate: SingleQubitGate, target: QubitId) -> Self {
        GateOp::Single { gate, target }
    }

    /// Create a CNOT operation.
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        GateOp::Cnot { control, target }
    }

    /// Get the name of this operation's gate.
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Single { gate, .. } => gate.name(),
            GateOp::Cnot { .. } => "cx",
        }
    }

    /// Qubits touched by this operation (control first for CNOT).
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            GateOp::Single { target, .. } => vec![target],
            GateOp::Cnot { control, target } => vec![control, target],
        }
    }

    /// The operation that undoes this one.
    pub fn inverse(&self) -> Self {
        match *self {
            GateOp::Single { gate, target } => GateOp::Single {
                gate: gate.inverse(),
                target,
            },
            // CNOT is self-inverse.
            cnot @ GateOp::Cnot { .. } => cnot,
        }
    }
}
