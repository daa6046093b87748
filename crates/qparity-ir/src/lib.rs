//! qparity Gate Intermediate Representation
//!
//! This crate provides the data structures shared by every other qparity
//! crate: gate descriptors, ordered transforms built from them, and the
//! complex state vectors those transforms act on.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses one qubit; qubit `k` is bit `k` of a
//!   basis index (qubit 0 is the least significant bit)
//! - **Gates**: [`SingleQubitGate`] for the single-qubit unitaries and
//!   [`GateOp`] pairing a gate with its operands (CNOT carries a control and a
//!   target)
//! - **Transforms**: [`Transform`], an ordered gate sequence applied first to
//!   last
//! - **States**: [`StateVector`] and helpers for basis kets and norms
//! - **Diagrams**: [`diagram::render`] draws a transform as wire text
//!
//! # Example: Building a Transform
//!
//! ```rust
//! use qparity_ir::{QubitId, Transform};
//!
//! let mut transform = Transform::new();
//! transform.h(QubitId(0)).x(QubitId(1)).cx(QubitId(0), QubitId(1));
//!
//! assert_eq!(transform.len(), 3);
//! assert_eq!(transform.min_qubits(), 2);
//! assert!(transform.validate(2).is_ok());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `SX`, `SXdg` | 1 | sqrt(X) and its adjoint |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `P` | 1 | Phase gate |
//! | `U` | 1 | Universal single-qubit gate U(θ,φ,λ) |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod diagram;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod state;
pub mod transform;

pub use error::{IrError, IrResult};
pub use gate::{GateOp, SingleQubitGate};
pub use qubit::QubitId;
pub use state::StateVector;
pub use transform::Transform;
