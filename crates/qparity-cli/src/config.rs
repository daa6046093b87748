//! Configuration for the qparity CLI.
//!
//! Settings come from, highest precedence first:
//! 1. Command-line flags
//! 2. Environment variables (`QPARITY_` prefix)
//! 3. A YAML file given with `--config`
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use qparity_ir::state::MAX_QUBITS;
use thiserror::Error;

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where `{name}_spec.json` problem files live.
    pub problems_dir: PathBuf,
    /// Where result records are written.
    pub results_dir: PathBuf,
    /// Seed for problem generation; fresh entropy when unset.
    pub seed: Option<u64>,
    /// Log filter used when no `-v` flag is given.
    pub log_level: String,
    /// Widest register the simulator will accept.
    pub max_qubits: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            problems_dir: PathBuf::from("."),
            results_dir: PathBuf::from("."),
            seed: None,
            log_level: "warn".into(),
            max_qubits: 20,
        }
    }
}

/// Values given on the command line; `None` leaves the setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub problems_dir: Option<PathBuf>,
    pub results_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// File (if any), then process environment, then validation.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let settings = settings.merge_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `QPARITY_*` variables found through `lookup`.
    ///
    /// Only variables that are set override the current values.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QPARITY_PROBLEMS_DIR") {
            self.problems_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("QPARITY_RESULTS_DIR") {
            self.results_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("QPARITY_SEED") {
            self.seed = Some(parse_env("QPARITY_SEED", &v)?);
        }
        if let Some(v) = lookup("QPARITY_LOG_LEVEL") {
            self.log_level = v;
        }
        if let Some(v) = lookup("QPARITY_MAX_QUBITS") {
            self.max_qubits = parse_env("QPARITY_MAX_QUBITS", &v)?;
        }
        Ok(self)
    }

    /// Apply command-line flags.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.problems_dir {
            self.problems_dir = dir;
        }
        if let Some(dir) = overrides.results_dir {
            self.results_dir = dir;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(ConfigError::ValidationError(format!(
                "max_qubits must be between 1 and {MAX_QUBITS}, got {}",
                self.max_qubits
            )));
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationError(format!("{key} has an invalid value: {value}")))
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.problems_dir, PathBuf::from("."));
        assert_eq!(s.log_level, "warn");
        assert_eq!(s.max_qubits, 20);
        assert!(s.seed.is_none());
        s.validate().unwrap();
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qparity.yaml");
        std::fs::write(&path, "problems_dir: /data/problems\nseed: 7\n").unwrap();

        let s = Settings::from_file(&path).unwrap();
        assert_eq!(s.problems_dir, PathBuf::from("/data/problems"));
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.results_dir, PathBuf::from("."));
    }

    #[test]
    fn test_unknown_yaml_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qparity.yaml");
        std::fs::write(&path, "problem_dir: typo\n").unwrap();
        assert!(matches!(
            Settings::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file(Path::new("/nonexistent/qparity.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = Settings {
            seed: Some(1),
            results_dir: PathBuf::from("from-file"),
            ..Default::default()
        };
        let s = file
            .merge_env(env(&[("QPARITY_SEED", "99"), ("QPARITY_LOG_LEVEL", "debug")]))
            .unwrap();
        assert_eq!(s.seed, Some(99));
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.results_dir, PathBuf::from("from-file"));
    }

    #[test]
    fn test_flags_override_env() {
        let s = Settings::default()
            .merge_env(env(&[("QPARITY_PROBLEMS_DIR", "env-dir"), ("QPARITY_SEED", "5")]))
            .unwrap()
            .with_overrides(Overrides {
                problems_dir: Some(PathBuf::from("flag-dir")),
                ..Default::default()
            });
        assert_eq!(s.problems_dir, PathBuf::from("flag-dir"));
        assert_eq!(s.seed, Some(5));
    }

    #[test]
    fn test_bad_env_number() {
        let err = Settings::default()
            .merge_env(env(&[("QPARITY_MAX_QUBITS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("QPARITY_MAX_QUBITS"));
    }

    #[test]
    fn test_validate_rejects() {
        let bad_level = Settings {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert!(bad_level.validate().is_err());

        let no_qubits = Settings {
            max_qubits: 0,
            ..Default::default()
        };
        assert!(no_qubits.validate().is_err());

        let too_wide = Settings {
            max_qubits: 64,
            ..Default::default()
        };
        let err = too_wide.validate().unwrap_err();
        assert!(err.to_string().contains("got 64"));
    }
}
