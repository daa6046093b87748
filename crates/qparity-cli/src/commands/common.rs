//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qparity_adapter_sim::StatevectorSimulator;

use crate::config::Settings;

/// Simulator configured from the settings.
pub fn simulator(settings: &Settings) -> StatevectorSimulator {
    StatevectorSimulator::with_max_qubits(settings.max_qubits)
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Print a section divider.
pub fn section(title: &str) {
    println!("{}", style(format!("── {title} ──")).bold());
}
