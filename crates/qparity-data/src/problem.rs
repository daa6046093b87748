//! Problem definitions and the built problem specification.

use serde::{Deserialize, Serialize};

use qparity_ir::state::{dimension, norm};
use qparity_ir::{StateVector, Transform};

use crate::error::{DataError, DataResult};
use crate::label::Label;

/// Unit-norm tolerance applied to every stored vector.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A training example as handed to a solution.
pub type TrainingPair = (StateVector, Label);

/// Everything needed to synthesize one problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDefinition {
    /// Identifier, e.g. `problem2`.
    pub name: String,
    /// Short human description.
    pub title: String,
    /// Register width.
    pub num_qubits: u32,
    /// The hidden transform.
    pub transform: Transform,
    /// Its inverse, when the author chose to record one.
    pub inverse_transform: Option<Transform>,
    /// Number of random training draws.
    pub sample_count: usize,
    /// Advisory training budget in seconds.
    pub time_estimate: f64,
    /// Text shown to participants.
    pub hint: String,
    /// Training data used verbatim instead of random draws.
    pub fixed_training: Option<Vec<TrainingPair>>,
}

/// A fully built problem: hidden transform plus train and test data.
///
/// Built once and read-only afterwards; every constructor validates the
/// structural invariants (see [`ProblemSpec::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSpec {
    name: String,
    title: String,
    num_qubits: u32,
    transform: Transform,
    inverse_transform: Option<Transform>,
    sample_count: usize,
    time_estimate: f64,
    hint: String,
    train_vectors: Vec<StateVector>,
    train_labels: Vec<Label>,
    test_vectors: Vec<StateVector>,
    test_labels: Vec<Label>,
}

impl ProblemSpec {
    /// Assemble a problem from its definition and generated data.
    pub fn new(
        definition: &ProblemDefinition,
        train_vectors: Vec<StateVector>,
        train_labels: Vec<Label>,
        test_vectors: Vec<StateVector>,
        test_labels: Vec<Label>,
    ) -> DataResult<Self> {
        let spec = Self {
            name: definition.name.clone(),
            title: definition.title.clone(),
            num_qubits: definition.num_qubits,
            transform: definition.transform.clone(),
            inverse_transform: definition.inverse_transform.clone(),
            sample_count: definition.sample_count,
            time_estimate: definition.time_estimate,
            hint: definition.hint.clone(),
            train_vectors,
            train_labels,
            test_vectors,
            test_labels,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check every structural invariant of the problem.
    ///
    /// - `1 <= num_qubits <= MAX_QUBITS` and both transforms fit the register
    /// - `len(train_vectors) == len(train_labels) == sample_count`
    /// - `len(test_vectors) == len(test_labels) == 2^num_qubits`
    /// - every vector has `2^num_qubits` entries and unit norm
    /// - `test_labels[i]` is the parity of `i`
    pub fn validate(&self) -> DataResult<()> {
        if self.num_qubits == 0 {
            return Err(self.invalid("num_qubits must be at least 1".into()));
        }
        let dim = dimension(self.num_qubits).map_err(|e| self.invalid(e.to_string()))?;
        self.transform.validate(self.num_qubits)?;
        if let Some(inverse) = &self.inverse_transform {
            inverse.validate(self.num_qubits)?;
        }
        if !self.time_estimate.is_finite() || self.time_estimate < 0.0 {
            return Err(self.invalid(format!(
                "time estimate {} is not a non-negative number",
                self.time_estimate
            )));
        }

        if self.train_vectors.len() != self.sample_count
            || self.train_labels.len() != self.sample_count
        {
            return Err(self.invalid(format!(
                "sample_count is {} but there are {} training vectors and {} labels",
                self.sample_count,
                self.train_vectors.len(),
                self.train_labels.len()
            )));
        }

        if self.test_vectors.len() != dim || self.test_labels.len() != dim {
            return Err(self.invalid(format!(
                "expected {dim} test vectors and labels, got {} and {}",
                self.test_vectors.len(),
                self.test_labels.len()
            )));
        }

        for (set, vectors) in [("training", &self.train_vectors), ("test", &self.test_vectors)] {
            for (i, v) in vectors.iter().enumerate() {
                if v.len() != dim {
                    return Err(self.invalid(format!(
                        "{set} vector {i} has {} entries, expected {dim}",
                        v.len()
                    )));
                }
                let n = norm(v);
                if (n - 1.0).abs() > NORM_TOLERANCE {
                    return Err(self.invalid(format!("{set} vector {i} has norm {n}")));
                }
            }
        }

        if let Some(i) = self
            .test_labels
            .iter()
            .enumerate()
            .position(|(i, label)| *label != Label::of_index(i))
        {
            return Err(self.invalid(format!("test label {i} does not match its parity")));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> DataError {
        DataError::InvalidProblem {
            problem: self.name.clone(),
            reason,
        }
    }

    /// Problem identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short human description.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `N` for problems named `problemN`.
    pub fn index(&self) -> Option<u32> {
        self.name.strip_prefix("problem")?.parse().ok()
    }

    /// Register width.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The hidden transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The recorded inverse, if known.
    pub fn inverse_transform(&self) -> Option<&Transform> {
        self.inverse_transform.as_ref()
    }

    /// Number of training samples.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Advisory training budget in seconds.
    pub fn time_estimate(&self) -> f64 {
        self.time_estimate
    }

    /// Participant-facing hint.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Training vectors in draw order.
    pub fn train_vectors(&self) -> &[StateVector] {
        &self.train_vectors
    }

    /// Training labels, index-aligned with [`Self::train_vectors`].
    pub fn train_labels(&self) -> &[Label] {
        &self.train_labels
    }

    /// Transformed basis kets in ascending index order.
    pub fn test_vectors(&self) -> &[StateVector] {
        &self.test_vectors
    }

    /// Test labels, the parity of each index.
    pub fn test_labels(&self) -> &[Label] {
        &self.test_labels
    }

    /// The first `limit` training pairs (all of them when `limit` is `None`).
    pub fn training_pairs(&self, limit: Option<usize>) -> Vec<TrainingPair> {
        let take = limit.unwrap_or(self.sample_count);
        self.train_vectors
            .iter()
            .cloned()
            .zip(self.train_labels.iter().copied())
            .take(take)
            .collect()
    }

    /// Mean training label; `None` without training data.
    pub fn label_bias(&self) -> Option<f64> {
        if self.train_labels.is_empty() {
            return None;
        }
        let sum: f64 = self.train_labels.iter().map(|l| l.value()).sum();
        Some(sum / self.train_labels.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use qparity_ir::state::basis_state;

    fn definition() -> ProblemDefinition {
        ProblemDefinition {
            name: "problem7".into(),
            title: "test".into(),
            num_qubits: 1,
            transform: Transform::new(),
            inverse_transform: None,
            sample_count: 2,
            time_estimate: 1.0,
            hint: "none".into(),
            fixed_training: None,
        }
    }

    fn basis_pairs() -> (Vec<StateVector>, Vec<Label>) {
        (
            vec![basis_state(0, 1), basis_state(1, 1)],
            vec![Label::Even, Label::Odd],
        )
    }

    #[test]
    fn test_valid_problem() {
        let (tv, tl) = basis_pairs();
        let spec = ProblemSpec::new(&definition(), tv.clone(), tl.clone(), tv, tl).unwrap();
        assert_eq!(spec.index(), Some(7));
        assert_eq!(spec.sample_count(), 2);
        assert_eq!(spec.label_bias(), Some(0.0));
    }

    #[test]
    fn test_rejects_wrong_test_count() {
        let (tv, tl) = basis_pairs();
        let err = ProblemSpec::new(&definition(), tv.clone(), tl.clone(), vec![tv[0].clone()], vec![tl[0]])
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidProblem { .. }));
    }

    #[test]
    fn test_rejects_mismatched_labels() {
        let (tv, tl) = basis_pairs();
        let err = ProblemSpec::new(&definition(), tv.clone(), vec![Label::Even], tv, tl).unwrap_err();
        assert!(err.to_string().contains("sample_count"));
    }

    #[test]
    fn test_rejects_unnormalized_vector() {
        let (tv, tl) = basis_pairs();
        let mut train = tv.clone();
        train[1] = vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        let err = ProblemSpec::new(&definition(), train, tl.clone(), tv, tl).unwrap_err();
        assert!(err.to_string().contains("norm"));
    }

    #[test]
    fn test_rejects_wrong_parity_label() {
        let (tv, tl) = basis_pairs();
        let err = ProblemSpec::new(
            &definition(),
            tv.clone(),
            tl,
            tv,
            vec![Label::Odd, Label::Even],
        )
        .unwrap_err();
        assert!(err.to_string().contains("parity"));
    }

    #[test]
    fn test_rejects_short_training_draw() {
        let mut def = definition();
        def.sample_count = 3;
        let (tv, tl) = basis_pairs();
        let err = ProblemSpec::new(&def, tv.clone(), tl.clone(), tv, tl).unwrap_err();
        assert!(err.to_string().contains("sample_count is 3"));
    }

    #[test]
    fn test_rejects_register_too_wide_to_address() {
        let mut def = definition();
        for num_qubits in [qparity_ir::state::MAX_QUBITS + 1, 64, u32::MAX] {
            def.num_qubits = num_qubits;
            let err = ProblemSpec::new(&def, vec![], vec![], vec![], vec![]).unwrap_err();
            assert!(
                matches!(err, DataError::InvalidProblem { ref reason, .. } if reason.contains("exceeds")),
                "{err}"
            );
        }
    }

    #[test]
    fn test_training_pairs_truncate_in_order() {
        let (tv, tl) = basis_pairs();
        let spec = ProblemSpec::new(&definition(), tv.clone(), tl.clone(), tv, tl).unwrap();
        let pairs = spec.training_pairs(Some(1));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, Label::Even);
        assert_eq!(spec.training_pairs(None).len(), 2);
        assert_eq!(spec.training_pairs(Some(10)).len(), 2);
    }

    #[test]
    fn test_name_without_index() {
        let mut def = definition();
        def.name = "custom".into();
        def.sample_count = 0;
        let (tv, tl) = basis_pairs();
        let spec = ProblemSpec::new(&def, vec![], vec![], tv, tl).unwrap();
        assert_eq!(spec.index(), None);
        assert_eq!(spec.label_bias(), None);
    }
}
