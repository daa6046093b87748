//! Evaluate command implementation.
//!
//! `qparity evaluate --fun <solution> --problem <name> [-n <limit>] [--stats] [--cheat]`

use anyhow::{Context, Result};
use chrono::Utc;
use console::style;

use qparity_data::{ProblemSpec, store};
use qparity_eval::{EvalError, EvaluationHarness, ResultRecorder, solutions};
use qparity_ir::diagram;

use super::common::{ensure_dir, section};
use crate::config::Settings;

/// Arguments of one evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluateArgs {
    pub fun: Option<String>,
    pub problem: String,
    pub sample_limit: Option<usize>,
    pub stats: bool,
    pub cheat: bool,
}

/// Execute the evaluate command.
pub fn execute(args: &EvaluateArgs, settings: &Settings) -> Result<()> {
    let problem = store::load(&settings.problems_dir, &args.problem)
        .with_context(|| format!("Failed to load problem '{}'", args.problem))?;

    println!(
        "{} {}",
        style(problem.name()).bold(),
        style(problem.title()).dim()
    );
    section("Problem hint");
    print!("{}", problem.hint());
    section("Now running your code");

    if args.stats {
        print_stats(&problem);
    }
    if args.cheat {
        print_hidden_transform(&problem)?;
    }

    let Some(name) = args.fun.as_deref() else {
        return Err(EvalError::MissingSolution.into());
    };
    let solution = solutions::find(name)?;
    println!("using {}", style(solution.name()).cyan());

    let evaluation = EvaluationHarness::new(&problem)
        .with_sample_limit(args.sample_limit)
        .run(solution.as_ref())?;

    println!("{}", evaluation.summary());
    if let Some(advisory) = evaluation.advisory() {
        println!("{}", style(advisory).yellow());
    }

    ensure_dir(&settings.results_dir)?;
    let path = ResultRecorder::new(&settings.results_dir).record(&evaluation.record, Utc::now())?;
    println!(
        "{} Run saved to {}",
        style("✓").green().bold(),
        style(path.display()).green()
    );

    Ok(())
}

fn print_stats(problem: &ProblemSpec) {
    println!("number of training samples: {}", problem.sample_count());
    match problem.label_bias() {
        Some(bias) => println!("label bias (sum/number): {bias}"),
        None => println!("label bias (sum/number): n/a"),
    }
    println!("Training ETA: {}", problem.time_estimate());
}

fn print_hidden_transform(problem: &ProblemSpec) -> Result<()> {
    println!("{}", style("Hidden transform (debug only):").red().bold());
    print!("{}", diagram::render(problem.transform(), problem.num_qubits())?);
    match problem.inverse_transform() {
        Some(inverse) => {
            println!("{}", style("Inverse:").red());
            print!("{}", diagram::render(inverse, problem.num_qubits())?);
        }
        None => println!("{}", style("Inverse: unknown").red()),
    }
    Ok(())
}
