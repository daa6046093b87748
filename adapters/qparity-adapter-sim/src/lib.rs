//! qparity Local Statevector Simulator
//!
//! This crate provides the [`TransformAdapter`](qparity_hal::TransformAdapter)
//! used for dataset synthesis. It keeps the full statevector in memory, so
//! results are exact but the register width is limited to roughly 20-25
//! qubits.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation
//! - **All IR Gates**: Supports every gate from `qparity-ir`
//! - **Scoped Registers**: One register per call, released before return
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use qparity_adapter_sim::StatevectorSimulator;
//! use qparity_hal::TransformAdapter;
//! use qparity_ir::{QubitId, Transform, state};
//!
//! let sim = StatevectorSimulator::new();
//! let mut bell = Transform::new();
//! bell.h(QubitId(0)).cx(QubitId(0), QubitId(1));
//!
//! let out = sim.apply(&bell, &state::basis_state(0, 2)).unwrap();
//! assert!((out[0].norm_sqr() - 0.5).abs() < 1e-12);
//! assert!((out[3].norm_sqr() - 0.5).abs() < 1e-12);
//! assert_eq!(sim.live_registers(), 0);
//! ```

mod simulator;
mod statevector;

pub use simulator::StatevectorSimulator;
