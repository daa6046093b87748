//! One blind evaluation of a solution against a problem.

use std::time::Instant;

use tracing::{debug, info, warn};

use qparity_data::ProblemSpec;
use qparity_ir::diagram;

use crate::diagnostic::Diagnostic;
use crate::error::{EvalError, EvalResult};
use crate::record::ResultRecord;
use crate::score::Score;
use crate::solution::{Solution, TrainedModel};

/// Runs a solution once against a problem and scores it.
pub struct EvaluationHarness<'a> {
    problem: &'a ProblemSpec,
    sample_limit: Option<usize>,
}

/// Harness output: the record plus its diagnostics.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The record to persist.
    pub record: ResultRecord,
    /// Source capture outcome.
    pub source: Diagnostic,
    /// Circuit diagram outcome.
    pub circuit: Diagnostic,
    /// Advisory training budget of the problem, in seconds.
    pub time_estimate: f64,
}

impl<'a> EvaluationHarness<'a> {
    /// Evaluate against `problem` using every training pair.
    pub fn new(problem: &'a ProblemSpec) -> Self {
        Self {
            problem,
            sample_limit: None,
        }
    }

    /// Hand the solution only the first `limit` training pairs.
    pub fn with_sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Train `solution` once, score it, and collect diagnostics.
    ///
    /// Fails with [`EvalError::InvalidInference`] when the trained bundle has
    /// no inference function; nothing is scored in that case. Diagnostic
    /// capture failures are logged and leave the matching field empty.
    pub fn run(&self, solution: &dyn Solution) -> EvalResult<Evaluation> {
        let pairs = self.problem.training_pairs(self.sample_limit);
        info!(
            problem = self.problem.name(),
            solution = solution.name(),
            samples = pairs.len(),
            "training"
        );

        let start = Instant::now();
        let TrainedModel {
            infer,
            circuit,
            training_error,
        } = solution.train(&pairs);
        let training_time = start.elapsed().as_secs_f64();
        debug!(training_time, "training returned");

        let infer = infer.ok_or_else(|| EvalError::InvalidInference(solution.name().to_string()))?;
        let score = Score::compute(
            infer,
            self.problem.test_vectors(),
            self.problem.test_labels(),
        );
        info!(
            test_error = score.test_error,
            test_accuracy = score.test_accuracy,
            "scored"
        );

        let source = Diagnostic::capture(
            "source",
            solution
                .source()
                .map(str::to_string)
                .ok_or_else(|| format!("no source text available for '{}'", solution.name())),
        );
        let circuit = Diagnostic::capture(
            "circuit",
            match &circuit {
                Some(c) => diagram::render(c, self.problem.num_qubits()).map_err(|e| e.to_string()),
                None => Err(format!("'{}' returned no circuit", solution.name())),
            },
        );

        let time_estimate = self.problem.time_estimate();
        if training_time > time_estimate {
            warn!(training_time, time_estimate, "training exceeded the time estimate");
        }

        let record = ResultRecord {
            problem_name: self.problem.name().to_string(),
            problem_index: self.problem.index(),
            training_vectors_limit: self.sample_limit,
            solution_function_name: solution.name().to_string(),
            source_code: source.text().map(str::to_string),
            circuit_str: circuit.text().map(str::to_string),
            training_time,
            training_error,
            test_accuracy: score.test_accuracy,
            test_error: score.test_error,
        };

        Ok(Evaluation {
            record,
            source,
            circuit,
            time_estimate,
        })
    }
}

impl Evaluation {
    /// `Training error: …, taking … seconds to train. Test error: …`
    pub fn summary(&self) -> String {
        let training_error = match self.record.training_error {
            Some(e) => format!("{e:.2}"),
            None => "Unknown".to_string(),
        };
        format!(
            "Training error: {training_error}, taking {:.1} seconds to train. Test error: {:.2}",
            self.record.training_time, self.record.test_error
        )
    }

    /// Whether training ran past the problem's estimate.
    pub fn over_budget(&self) -> bool {
        self.record.training_time > self.time_estimate
    }

    /// Advisory line shown when training ran past the estimate.
    pub fn advisory(&self) -> Option<String> {
        self.over_budget().then(|| {
            format!(
                "Training took more than {} seconds; there is very likely a faster method.",
                self.time_estimate
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(training_error: Option<f64>, training_time: f64) -> Evaluation {
        Evaluation {
            record: ResultRecord {
                problem_name: "problem0".into(),
                problem_index: Some(0),
                training_vectors_limit: None,
                solution_function_name: "zero".into(),
                source_code: None,
                circuit_str: None,
                training_time,
                training_error,
                test_accuracy: 100.0,
                test_error: 2.0,
            },
            source: Diagnostic::Failed("none".into()),
            circuit: Diagnostic::Failed("none".into()),
            time_estimate: 5.0,
        }
    }

    #[test]
    fn test_summary_unknown_training_error() {
        let e = evaluation(None, 0.04);
        assert_eq!(
            e.summary(),
            "Training error: Unknown, taking 0.0 seconds to train. Test error: 2.00"
        );
        assert!(e.advisory().is_none());
    }

    #[test]
    fn test_summary_with_training_error() {
        let e = evaluation(Some(1.5), 6.31);
        assert_eq!(
            e.summary(),
            "Training error: 1.50, taking 6.3 seconds to train. Test error: 2.00"
        );
        assert!(e.over_budget());
        assert!(e.advisory().unwrap().contains("more than 5 seconds"));
    }
}
