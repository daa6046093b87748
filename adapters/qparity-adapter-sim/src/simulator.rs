//! Simulator adapter implementation.

use num_complex::Complex64;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::trace;

use qparity_hal::{HalResult, TransformAdapter, check_input};
use qparity_ir::{StateVector, Transform};

use crate::statevector::Statevector;

/// A register checked out of the simulator for one `apply` call.
///
/// Dropping the register releases it, so an early return or panic between
/// allocation and read-out cannot leak it.
struct Register<'a> {
    live: &'a AtomicUsize,
    state: Statevector,
}

impl Drop for Register<'_> {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Local statevector simulator.
///
/// Every call to [`TransformAdapter::apply`] allocates a fresh register,
/// loads the input amplitudes, runs the gate sequence, reads the amplitudes
/// out and releases the register before returning.
pub struct StatevectorSimulator {
    name: String,
    /// Maximum number of qubits supported.
    max_qubits: u32,
    /// Registers currently checked out.
    live: AtomicUsize,
    /// Registers allocated over the simulator's lifetime.
    allocations: AtomicU64,
}

impl StatevectorSimulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            name: "statevector".to_string(),
            max_qubits,
            live: AtomicUsize::new(0),
            allocations: AtomicU64::new(0),
        }
    }

    /// Registers currently allocated and not yet released.
    pub fn live_registers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total registers allocated since construction.
    pub fn allocations(&self) -> u64 {
        self.allocations.load(Ordering::SeqCst)
    }

    fn allocate(&self, num_qubits: u32) -> Register<'_> {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.allocations.fetch_add(1, Ordering::SeqCst);
        Register {
            live: &self.live,
            state: Statevector::new(num_qubits as usize),
        }
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformAdapter for StatevectorSimulator {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    fn apply(&self, transform: &Transform, state: &[Complex64]) -> HalResult<StateVector> {
        let num_qubits = check_input(transform, state, self.max_qubits)?;

        let mut register = self.allocate(num_qubits);
        register.state.load(state);
        for op in transform {
            register.state.apply(op);
        }
        let out = register.state.amplitudes().to_vec();

        trace!(
            qubits = register.state.num_qubits(),
            ops = transform.len(),
            "transform applied"
        );
        drop(register);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qparity_ir::QubitId;
    use qparity_ir::state::basis_state;

    #[test]
    fn test_register_released_after_apply() {
        let sim = StatevectorSimulator::new();
        let mut t = Transform::new();
        t.h(QubitId(0));

        for _ in 0..10 {
            sim.apply(&t, &basis_state(0, 1)).unwrap();
            assert_eq!(sim.live_registers(), 0);
        }
        assert_eq!(sim.allocations(), 10);
    }

    #[test]
    fn test_rejected_input_allocates_nothing() {
        let sim = StatevectorSimulator::with_max_qubits(2);
        let t = Transform::new();
        assert!(sim.apply(&t, &basis_state(0, 3)).is_err());
        assert_eq!(sim.allocations(), 0);
        assert_eq!(sim.live_registers(), 0);
    }

    #[test]
    fn test_name_and_capacity() {
        let sim = StatevectorSimulator::default();
        assert_eq!(sim.name(), "statevector");
        assert_eq!(sim.max_qubits(), 20);
    }
}
