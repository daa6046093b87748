//! qparity Command-Line Interface
//!
//! Generates the parity-subspace problem files and scores solutions
//! against them.
//!
//! ```text
//! qparity generate [0 1 2 3] --seed 42        # write problemN_spec.json
//! qparity evaluate --fun parity_search --problem problem1 --stats
//! qparity solutions                           # list built-in solutions
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::evaluate::EvaluateArgs;
use commands::{evaluate, generate, solutions, version};
use config::{Overrides, Settings};
use qparity_eval::EvalError;

/// qparity - hidden-transform classification problems and their evaluator
#[derive(Parser)]
#[command(name = "qparity")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and save catalog problems
    Generate {
        /// Problem indices to (re)generate; all when omitted
        problems: Vec<usize>,

        /// RNG seed for the training draws
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for problem files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Train a solution once and score it on a problem
    Evaluate {
        /// Name of the solution to evaluate
        #[arg(long, alias = "solution-function-name")]
        fun: Option<String>,

        /// Name of the problem to test against
        #[arg(long, default_value = "problem0")]
        problem: String,

        /// Number of training vectors to hand the solution
        #[arg(short = 'n', long)]
        sample_limit: Option<usize>,

        /// Print statistics about the training data
        #[arg(long)]
        stats: bool,

        /// Print the hidden transform. DEBUG ONLY.
        #[arg(long)]
        cheat: bool,

        /// Directory holding problem files
        #[arg(long)]
        problems_dir: Option<PathBuf>,

        /// Directory for result records
        #[arg(long)]
        results_dir: Option<PathBuf>,
    },

    /// List built-in solutions
    Solutions,

    /// Show version information
    Version,
}

fn init_tracing(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &settings.log_level);

    match cli.command {
        Commands::Generate {
            problems,
            seed,
            out,
        } => {
            let settings = settings.with_overrides(Overrides {
                problems_dir: out,
                seed,
                ..Default::default()
            });
            generate::execute(&problems, &settings)
        }

        Commands::Evaluate {
            fun,
            problem,
            sample_limit,
            stats,
            cheat,
            problems_dir,
            results_dir,
        } => {
            let settings = settings.with_overrides(Overrides {
                problems_dir,
                results_dir,
                ..Default::default()
            });
            let args = EvaluateArgs {
                fun,
                problem,
                sample_limit,
                stats,
                cheat,
            };
            evaluate::execute(&args, &settings)
        }

        Commands::Solutions => {
            solutions::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle errors
    if let Err(e) = run(cli) {
        if let Some(eval_err) = e.downcast_ref::<EvalError>() {
            if eval_err.is_graceful() {
                println!("{} {}", style("Note:").yellow().bold(), eval_err);
                return Ok(());
            }
        }
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
