//! Test-set scoring.

use serde::{Deserialize, Serialize};

use qparity_data::Label;
use qparity_ir::StateVector;

/// Absolute-error score of an inference function over a test set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// `Σ |prediction − label|`.
    pub test_error: f64,
    /// `100 · test_error / n`. An error rate despite the name: lower is better.
    pub test_accuracy: f64,
}

impl Score {
    /// Score `predict` on index-aligned `vectors` and `labels`.
    ///
    /// An empty test set scores zero.
    pub fn compute<F>(predict: F, vectors: &[StateVector], labels: &[Label]) -> Self
    where
        F: Fn(&[num_complex::Complex64]) -> f64,
    {
        let test_error: f64 = vectors
            .iter()
            .zip(labels)
            .map(|(v, label)| (predict(v.as_slice()) - label.value()).abs())
            .sum();
        let test_accuracy = if vectors.is_empty() {
            0.0
        } else {
            100.0 * test_error / vectors.len() as f64
        };
        Self {
            test_error,
            test_accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use proptest::prelude::*;
    use qparity_ir::state::basis_state;

    fn one_qubit_set() -> (Vec<StateVector>, Vec<Label>) {
        (
            vec![basis_state(0, 1), basis_state(1, 1)],
            vec![Label::Even, Label::Odd],
        )
    }

    #[test]
    fn test_perfect_prediction() {
        let (v, l) = one_qubit_set();
        let score = Score::compute(|s: &[Complex64]| if s[0].norm() > 0.5 { 1.0 } else { -1.0 }, &v, &l);
        assert_eq!(score.test_error, 0.0);
        assert_eq!(score.test_accuracy, 0.0);
    }

    #[test]
    fn test_zero_prediction() {
        let (v, l) = one_qubit_set();
        let score = Score::compute(|_: &[Complex64]| 0.0, &v, &l);
        assert_eq!(score.test_error, 2.0);
        assert_eq!(score.test_accuracy, 100.0);
    }

    #[test]
    fn test_inverted_prediction() {
        let (v, l) = one_qubit_set();
        let score = Score::compute(|s: &[Complex64]| if s[0].norm() > 0.5 { -1.0 } else { 1.0 }, &v, &l);
        assert_eq!(score.test_error, 4.0);
        assert_eq!(score.test_accuracy, 200.0);
    }

    #[test]
    fn test_empty_set() {
        let score = Score::compute(|_: &[Complex64]| 1.0, &[], &[]);
        assert_eq!(score.test_accuracy, 0.0);
    }

    proptest! {
        #[test]
        fn constant_prediction_error(c in -3.0f64..3.0) {
            let (v, l) = one_qubit_set();
            let score = Score::compute(|_: &[Complex64]| c, &v, &l);
            let expected = (c - 1.0).abs() + (c + 1.0).abs();
            prop_assert!((score.test_error - expected).abs() < 1e-12);
            prop_assert!((score.test_accuracy - 50.0 * expected).abs() < 1e-9);
        }
    }
}
