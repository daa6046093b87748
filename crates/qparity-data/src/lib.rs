//! `qparity-data`: labeled dataset synthesis for hidden-transform problems.
//!
//! A problem hides a fixed [`Transform`](qparity_ir::Transform) `U`. Training
//! states are drawn at random from one of the two parity subspaces (even or
//! odd popcount of the basis index) and labeled by that subspace *before* `U`
//! is applied; the test set sends every basis ket through `U` in ascending
//! index order, so it is identical on every run.
//!
//! ```text
//! ParityPartition ──→ StateSampler ──┐
//!                                    ├──→ DatasetBuilder ──→ ProblemSpec ──→ store
//!        TransformAdapter ───────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use qparity_adapter_sim::StatevectorSimulator;
//! use qparity_data::{DatasetBuilder, catalog};
//!
//! let sim = StatevectorSimulator::new();
//! let builder = DatasetBuilder::new(&sim);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let spec = builder.build(&catalog::definition(1).unwrap(), &mut rng).unwrap();
//! assert_eq!(spec.train_vectors().len(), 50);
//! assert_eq!(spec.test_vectors().len(), 4);
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod label;
pub mod partition;
pub mod problem;
pub mod sampler;
pub mod store;

pub use builder::DatasetBuilder;
pub use error::{DataError, DataResult};
pub use label::Label;
pub use partition::ParityPartition;
pub use problem::{ProblemDefinition, ProblemSpec, TrainingPair};
pub use sampler::StateSampler;
