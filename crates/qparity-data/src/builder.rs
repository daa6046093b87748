//! Training and test set construction.

use rand::Rng;
use tracing::debug;

use qparity_hal::{HalError, TransformAdapter};
use qparity_ir::state::{basis_state, dimension};
use qparity_ir::{StateVector, Transform};

use crate::error::DataResult;
use crate::label::Label;
use crate::partition::ParityPartition;
use crate::problem::{ProblemDefinition, ProblemSpec};
use crate::sampler::StateSampler;

/// Builds problem data by pushing states through a [`TransformAdapter`].
pub struct DatasetBuilder<A> {
    adapter: A,
}

impl<A: TransformAdapter> DatasetBuilder<A> {
    /// Create a builder backed by `adapter`.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// The adapter in use.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Reject registers the adapter cannot evolve before sizing anything.
    fn check_width(&self, num_qubits: u32) -> DataResult<()> {
        let max = self.adapter.max_qubits();
        if num_qubits > max {
            return Err(HalError::TooManyQubits {
                requested: num_qubits,
                max,
            }
            .into());
        }
        Ok(())
    }

    /// Draw `definition.sample_count` labeled training vectors.
    ///
    /// Each draw is sampled from one parity class, labeled by that class and
    /// then transformed. Fixed training data is returned untouched.
    pub fn training_set<R: Rng + ?Sized>(
        &self,
        definition: &ProblemDefinition,
        rng: &mut R,
    ) -> DataResult<(Vec<StateVector>, Vec<Label>)> {
        if let Some(fixed) = &definition.fixed_training {
            debug!(problem = %definition.name, count = fixed.len(), "using fixed training data");
            return Ok(fixed.iter().cloned().unzip());
        }

        self.check_width(definition.num_qubits)?;
        let partition = ParityPartition::new(definition.num_qubits);
        let sampler = StateSampler::new(&partition);

        let mut vectors = Vec::with_capacity(definition.sample_count);
        let mut labels = Vec::with_capacity(definition.sample_count);
        for _ in 0..definition.sample_count {
            let (state, label) = sampler.sample(rng);
            vectors.push(self.adapter.apply(&definition.transform, &state)?);
            labels.push(label);
        }

        debug!(
            problem = %definition.name,
            count = vectors.len(),
            adapter = self.adapter.name(),
            "drew training set"
        );
        Ok((vectors, labels))
    }

    /// Transform every basis ket of an `num_qubits` register, in index order.
    pub fn test_set(
        &self,
        num_qubits: u32,
        transform: &Transform,
    ) -> DataResult<(Vec<StateVector>, Vec<Label>)> {
        self.check_width(num_qubits)?;
        let dim = dimension(num_qubits)?;
        let mut vectors = Vec::with_capacity(dim);
        let mut labels = Vec::with_capacity(dim);
        for index in 0..dim {
            let ket = basis_state(index, num_qubits);
            vectors.push(self.adapter.apply(transform, &ket)?);
            labels.push(Label::of_index(index));
        }
        debug!(num_qubits, count = dim, "enumerated test set");
        Ok((vectors, labels))
    }

    /// Build and validate a complete problem.
    pub fn build<R: Rng + ?Sized>(
        &self,
        definition: &ProblemDefinition,
        rng: &mut R,
    ) -> DataResult<ProblemSpec> {
        definition.transform.validate(definition.num_qubits)?;
        let (train_vectors, train_labels) = self.training_set(definition, rng)?;
        let (test_vectors, test_labels) =
            self.test_set(definition.num_qubits, &definition.transform)?;
        ProblemSpec::new(
            definition,
            train_vectors,
            train_labels,
            test_vectors,
            test_labels,
        )
    }
}
