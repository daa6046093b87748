//! qparity Simulator Abstraction Layer
//!
//! Dataset synthesis never runs gates itself. It hands a [`Transform`] and an
//! input state to a [`TransformAdapter`] and receives the evolved state back,
//! so the synthesis code is independent of any particular simulator's
//! register management.
//!
//! # Supported Adapters
//!
//! | Adapter | Crate | Max qubits |
//! |---------|-------|------------|
//! | Local statevector | `qparity-adapter-sim` | 20 (configurable) |
//!
//! # Implementing a Custom Adapter
//!
//! ```ignore
//! use num_complex::Complex64;
//! use qparity_hal::{check_input, HalResult, TransformAdapter};
//! use qparity_ir::{StateVector, Transform};
//!
//! struct MyAdapter;
//!
//! impl TransformAdapter for MyAdapter {
//!     fn name(&self) -> &str {
//!         "my-adapter"
//!     }
//!
//!     fn max_qubits(&self) -> u32 {
//!         16
//!     }
//!
//!     fn apply(&self, transform: &Transform, state: &[Complex64]) -> HalResult<StateVector> {
//!         let num_qubits = check_input(transform, state, self.max_qubits())?;
//!         // acquire a register, evolve, read out, release
//!         todo!()
//!     }
//! }
//! ```

pub mod adapter;
pub mod error;

pub use adapter::{TransformAdapter, check_input};
pub use error::{HalError, HalResult};

pub use qparity_ir::{StateVector, Transform};
