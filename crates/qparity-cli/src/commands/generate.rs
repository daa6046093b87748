//! Generate command implementation.

use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use qparity_data::{DatasetBuilder, catalog, store};
use qparity_hal::TransformAdapter;

use super::common::{ensure_dir, simulator};
use crate::config::Settings;

/// Build and save the catalog problems named by `indices` (all when empty).
///
/// Problem `i` is drawn from its own RNG seeded with `seed + i`, so its data
/// does not depend on which other problems are generated alongside it.
pub fn execute(indices: &[usize], settings: &Settings) -> Result<()> {
    let indices: Vec<usize> = if indices.is_empty() {
        (0..catalog::COUNT).collect()
    } else {
        indices.to_vec()
    };
    let definitions = indices
        .iter()
        .map(|&i| catalog::definition(i).map(|def| (i, def)))
        .collect::<Result<Vec<_>, _>>()?;

    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    let out = settings.problems_dir.as_path();
    ensure_dir(out)?;

    let sim = simulator(settings);
    let builder = DatasetBuilder::new(&sim);

    println!(
        "{} Generating {} problem(s) into {} with {} (seed {})",
        style("→").cyan().bold(),
        definitions.len(),
        style(out.display()).green(),
        builder.adapter().name(),
        style(seed).yellow()
    );

    let bar = ProgressBar::new(definitions.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    for (index, def) in &definitions {
        bar.set_message(def.name.clone());
        let started = Instant::now();
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(*index as u64));

        let spec = builder
            .build(def, &mut rng)
            .with_context(|| format!("Failed to build {}", def.name))?;
        let path = store::save(&spec, out)?;

        info!(
            problem = %def.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "problem generated"
        );
        bar.println(format!(
            "  {} {} ({} qubits, {} train / {} test) -> {}",
            style("✓").green(),
            style(&def.name).bold(),
            spec.num_qubits(),
            spec.train_vectors().len(),
            spec.test_vectors().len(),
            path.display()
        ));
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(())
}
