//! Exhaustive search for a single-qubit layer that undoes the hidden transform.
//!
//! Every candidate puts one gate from {I, X, Y, Z, H} on each qubit. A
//! candidate `V` classifies `ψ` by the sign of the parity observable
//!   ⟨Z⊗…⊗Z⟩ = Σ_i (−1)^popcount(i) · |(Vψ)_i|²
//! and the candidate with the lowest training error is kept.

use num_complex::Complex64;
use tracing::{debug, warn};

use qparity_adapter_sim::StatevectorSimulator;
use qparity_data::{Label, TrainingPair};
use qparity_hal::TransformAdapter;
use qparity_ir::state::qubits_for_dimension;
use qparity_ir::{QubitId, SingleQubitGate, Transform};

use crate::solution::{Solution, TrainedModel};

const LAYER_GATES: [SingleQubitGate; 5] = [
    SingleQubitGate::I,
    SingleQubitGate::X,
    SingleQubitGate::Y,
    SingleQubitGate::Z,
    SingleQubitGate::H,
];

/// Widest register the search will enumerate (5^n candidates).
pub const DEFAULT_MAX_QUBITS: u32 = 4;

/// Learns a circuit by brute force over single-qubit layers.
#[derive(Debug, Clone, Copy)]
pub struct ParitySearch {
    max_qubits: u32,
}

impl Default for ParitySearch {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

impl ParitySearch {
    /// Search registers up to `max_qubits` wide.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }
}

fn parity_expectation(state: &[Complex64]) -> f64 {
    state
        .iter()
        .enumerate()
        .map(|(i, amp)| Label::of_index(i).value() * amp.norm_sqr())
        .sum()
}

fn predict(sim: &StatevectorSimulator, layer: &Transform, psi: &[Complex64]) -> f64 {
    match sim.apply(layer, psi) {
        Ok(out) => {
            let e = parity_expectation(&out);
            if e > 0.0 {
                1.0
            } else if e < 0.0 {
                -1.0
            } else {
                0.0
            }
        }
        Err(e) => {
            warn!(error = %e, "parity_search could not evolve input");
            0.0
        }
    }
}

/// Candidate `index` written in base 5, one digit per qubit.
fn layer(index: usize, num_qubits: u32) -> Transform {
    let mut t = Transform::new();
    let mut rest = index;
    for q in 0..num_qubits {
        let gate = LAYER_GATES[rest % LAYER_GATES.len()];
        rest /= LAYER_GATES.len();
        if gate != SingleQubitGate::I {
            t.gate(gate, QubitId(q));
        }
    }
    t
}

impl Solution for ParitySearch {
    fn name(&self) -> &str {
        "parity_search"
    }

    fn summary(&self) -> &str {
        "brute-force single-qubit layer search, scored by Z parity (up to 4 qubits)"
    }

    fn train(&self, data: &[TrainingPair]) -> TrainedModel {
        let Some((first, _)) = data.first() else {
            debug!("parity_search has no training data");
            return TrainedModel::default();
        };
        let num_qubits = match qubits_for_dimension(first.len()) {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "parity_search got a malformed training vector");
                return TrainedModel::default();
            }
        };
        if num_qubits > self.max_qubits {
            debug!(num_qubits, max = self.max_qubits, "register too wide for exhaustive search");
            return TrainedModel::default();
        }

        let sim = StatevectorSimulator::new();
        let candidates = LAYER_GATES.len().pow(num_qubits);
        let mut best: Option<(f64, Transform)> = None;
        for index in 0..candidates {
            let candidate = layer(index, num_qubits);
            let error: f64 = data
                .iter()
                .map(|(state, label)| (predict(&sim, &candidate, state) - label.value()).abs())
                .sum();
            if best.as_ref().is_none_or(|(e, _)| error < *e) {
                best = Some((error, candidate));
            }
            if error == 0.0 {
                break;
            }
        }

        let Some((training_error, circuit)) = best else {
            return TrainedModel::default();
        };
        debug!(candidates, training_error, gates = circuit.len(), "parity_search done");

        let layer = circuit.clone();
        TrainedModel::from_fn(move |psi| predict(&sim, &layer, psi))
            .with_circuit(circuit)
            .with_training_error(training_error)
    }

    fn source(&self) -> Option<&'static str> {
        Some(include_str!("parity_search.rs"))
    }
}
