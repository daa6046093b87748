//! qparity Evaluator: blind scoring of trainable classifiers
//!
//! A [`Solution`] is trained exactly once on a problem's training pairs and
//! its inference function is scored against the problem's exhaustive test
//! set. The outcome becomes a write-once [`ResultRecord`] on disk.
//!
//! # Architecture
//!
//! ```text
//! [ProblemSpec] ─→ EvaluationHarness ─→ train (timed, once)
//!                        |
//!                        v
//!                  Score (Σ|ŷ − y|)
//!                        |
//!                        v
//!           Diagnostics (source, circuit)
//!                        |
//!                        v
//!           ResultRecorder ─→ JSON artifact
//! ```
//!
//! # Example
//!
//! ```ignore
//! use qparity_eval::{EvaluationHarness, ResultRecorder, solutions};
//!
//! let problem = qparity_data::store::load(dir, "problem1")?;
//! let solution = solutions::find("density_contrast")?;
//! let evaluation = EvaluationHarness::new(&problem)
//!     .with_sample_limit(Some(10))
//!     .run(solution.as_ref())?;
//! println!("{}", evaluation.summary());
//! let path = ResultRecorder::new(".").record(&evaluation.record, chrono::Utc::now())?;
//! ```

pub mod diagnostic;
pub mod error;
pub mod export;
pub mod harness;
pub mod record;
pub mod recorder;
pub mod score;
pub mod solution;
pub mod solutions;

pub use diagnostic::Diagnostic;
pub use error::{EvalError, EvalResult};
pub use harness::{Evaluation, EvaluationHarness};
pub use record::ResultRecord;
pub use recorder::ResultRecorder;
pub use score::Score;
pub use solution::{InferenceFn, Solution, TrainedModel};
