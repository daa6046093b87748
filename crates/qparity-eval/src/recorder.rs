//! Write-once persistence of result records.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{EvalError, EvalResult};
use crate::export;
use crate::record::ResultRecord;

/// Upper bound on suffix probing within one directory.
const MAX_SUFFIX: u32 = 100_000;

/// Persists each record to a fresh, never-overwritten file.
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    dir: PathBuf,
}

impl ResultRecorder {
    /// Record into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Candidate file name for suffix `i`.
    ///
    /// `{problem}_solution.{HH:MM}_{accuracy:.2}_{i}.json` with the UTC time.
    pub fn file_name(record: &ResultRecord, now: DateTime<Utc>, i: u32) -> String {
        format!(
            "{}_solution.{}_{:.2}_{}.json",
            record.problem_name,
            now.format("%H:%M"),
            record.test_accuracy,
            i
        )
    }

    /// Write `record` to the first unused candidate name and return its path.
    ///
    /// Suffixes are probed from 0 upwards. The file is opened with
    /// `create_new`, so a name taken between probe and create moves the
    /// suffix forward instead of overwriting.
    pub fn record(&self, record: &ResultRecord, now: DateTime<Utc>) -> EvalResult<PathBuf> {
        let json = export::to_json(record)?;

        for i in 0..MAX_SUFFIX {
            let path = self.dir.join(Self::file_name(record, now, i));
            if path.exists() {
                continue;
            }
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "lost creation race, probing on");
                    continue;
                }
                Err(source) => return Err(EvalError::Io { path, source }),
            };
            file.write_all(json.as_bytes())
                .map_err(|source| EvalError::Io {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "result recorded");
            return Ok(path);
        }

        Err(EvalError::Io {
            path: self.dir.clone(),
            source: std::io::Error::new(
                ErrorKind::AlreadyExists,
                format!("no free result file name after {MAX_SUFFIX} attempts"),
            ),
        })
    }
}
