//! The contract between the harness and a participant's classifier.

use std::fmt;

use num_complex::Complex64;

use qparity_data::TrainingPair;
use qparity_ir::Transform;

/// Maps one state vector to a scalar prediction.
pub type InferenceFn = Box<dyn Fn(&[Complex64]) -> f64>;

/// A trainable classifier.
pub trait Solution {
    /// Identifier used on the command line and in result records.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn summary(&self) -> &str {
        ""
    }

    /// Fit to `data` and return the trained bundle.
    ///
    /// Called exactly once per evaluation; the call is blocking and is
    /// never interrupted.
    fn train(&self, data: &[TrainingPair]) -> TrainedModel;

    /// Source text of the solution, kept with the result for later grading.
    fn source(&self) -> Option<&'static str> {
        None
    }
}

/// What a solution hands back after training.
#[derive(Default)]
pub struct TrainedModel {
    /// Inference function; a bundle without one cannot be scored.
    pub infer: Option<InferenceFn>,
    /// Circuit the solution learned, rendered into the result record.
    pub circuit: Option<Transform>,
    /// Self-reported training error; `None` when unknown.
    pub training_error: Option<f64>,
}

impl TrainedModel {
    /// A bundle that only carries an inference function.
    pub fn from_fn(infer: impl Fn(&[Complex64]) -> f64 + 'static) -> Self {
        Self {
            infer: Some(Box::new(infer)),
            ..Default::default()
        }
    }

    /// Attach a learned circuit.
    pub fn with_circuit(mut self, circuit: Transform) -> Self {
        self.circuit = Some(circuit);
        self
    }

    /// Attach a training error.
    pub fn with_training_error(mut self, error: f64) -> Self {
        self.training_error = Some(error);
        self
    }
}

impl fmt::Debug for TrainedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedModel")
            .field("infer", &self.infer.as_ref().map(|_| "<fn>"))
            .field("circuit", &self.circuit)
            .field("training_error", &self.training_error)
            .finish()
    }
}
