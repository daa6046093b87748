//! Constant-zero baseline.

use qparity_data::TrainingPair;

use crate::solution::{Solution, TrainedModel};

/// Predicts `0` for every state, scoring exactly 100% error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl Solution for Zero {
    fn name(&self) -> &str {
        "zero"
    }

    fn summary(&self) -> &str {
        "always predicts 0 (baseline)"
    }

    fn train(&self, _data: &[TrainingPair]) -> TrainedModel {
        TrainedModel::from_fn(|_| 0.0)
    }

    fn source(&self) -> Option<&'static str> {
        Some(include_str!("zero.rs"))
    }
}
