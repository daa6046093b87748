//! Classical density-matrix baseline.
//!
//! Builds the mean projector of each class,
//!   ρ± = (1/N±) Σ_{label = ±1} |φ⟩⟨φ|
//! and predicts `sign(⟨ψ|ρ₊|ψ⟩ − ⟨ψ|ρ₋|ψ⟩)`. The projectors are never
//! materialized: `⟨ψ|ρ|ψ⟩` is the mean of `|⟨φ|ψ⟩|²` over the class.

use num_complex::Complex64;

use qparity_data::{Label, TrainingPair};
use qparity_ir::StateVector;
use qparity_ir::state::inner;

use crate::solution::{Solution, TrainedModel};

/// Nearest mean-projector classifier; ignores any quantum structure.
#[derive(Debug, Default, Clone, Copy)]
pub struct DensityContrast;

struct Classes {
    even: Vec<StateVector>,
    odd: Vec<StateVector>,
}

impl Classes {
    fn mean_overlap(class: &[StateVector], psi: &[Complex64]) -> f64 {
        if class.is_empty() {
            return 0.0;
        }
        let total: f64 = class.iter().map(|phi| inner(phi, psi).norm_sqr()).sum();
        total / class.len() as f64
    }

    fn predict(&self, psi: &[Complex64]) -> f64 {
        let contrast = Self::mean_overlap(&self.even, psi) - Self::mean_overlap(&self.odd, psi);
        if contrast >= 0.0 { 1.0 } else { -1.0 }
    }
}

impl Solution for DensityContrast {
    fn name(&self) -> &str {
        "density_contrast"
    }

    fn summary(&self) -> &str {
        "mean-projector contrast between the two labels (classical)"
    }

    fn train(&self, data: &[TrainingPair]) -> TrainedModel {
        let mut classes = Classes {
            even: Vec::new(),
            odd: Vec::new(),
        };
        for (state, label) in data {
            match label {
                Label::Even => classes.even.push(state.clone()),
                Label::Odd => classes.odd.push(state.clone()),
            }
        }

        let training_error: f64 = data
            .iter()
            .map(|(state, label)| (classes.predict(state) - label.value()).abs())
            .sum();

        TrainedModel::from_fn(move |psi| classes.predict(psi)).with_training_error(training_error)
    }

    fn source(&self) -> Option<&'static str> {
        Some(include_str!("density_contrast.rs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qparity_ir::state::basis_state;

    #[test]
    fn test_separates_basis_states() {
        let data = vec![
            (basis_state(0, 1), Label::Even),
            (basis_state(1, 1), Label::Odd),
        ];
        let model = DensityContrast.train(&data);
        let infer = model.infer.unwrap();
        assert_eq!(infer(&basis_state(0, 1)), 1.0);
        assert_eq!(infer(&basis_state(1, 1)), -1.0);
        assert_eq!(model.training_error, Some(0.0));
        assert!(model.circuit.is_none());
    }

    #[test]
    fn test_empty_training_set() {
        let model = DensityContrast.train(&[]);
        let infer = model.infer.unwrap();
        assert_eq!(infer(&basis_state(1, 1)), 1.0);
        assert_eq!(model.training_error, Some(0.0));
    }
}
