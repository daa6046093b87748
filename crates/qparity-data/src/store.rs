//! Problem files on disk (`{name}_spec.json`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::problem::ProblemSpec;

/// Path of the problem file for `name` inside `dir`.
pub fn spec_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}_spec.json"))
}

/// Write `spec` as pretty JSON, replacing any previous file.
pub fn save(spec: &ProblemSpec, dir: &Path) -> DataResult<PathBuf> {
    let path = spec_path(dir, spec.name());
    let json = serde_json::to_string_pretty(spec)?;
    fs::write(&path, json).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "saved problem");
    Ok(path)
}

/// Read and validate the problem `name` from `dir`.
pub fn load(dir: &Path, name: &str) -> DataResult<ProblemSpec> {
    load_file(&spec_path(dir, name))
}

/// Read and validate a problem file at an explicit path.
pub fn load_file(path: &Path) -> DataResult<ProblemSpec> {
    let json = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: ProblemSpec = serde_json::from_str(&json)?;
    spec.validate()?;
    debug!(path = %path.display(), problem = spec.name(), "loaded problem");
    Ok(spec)
}
