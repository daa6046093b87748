//! Best-effort artifacts attached to a result.

use std::fmt;

use tracing::warn;

/// Outcome of a capture that must never abort scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The artifact text.
    Captured(String),
    /// Why capture failed.
    Failed(String),
}

impl Diagnostic {
    /// Wrap a fallible capture, logging a failure under `what`.
    pub fn capture<E: fmt::Display>(what: &str, result: Result<String, E>) -> Self {
        match result {
            Ok(text) => Diagnostic::Captured(text),
            Err(e) => {
                let message = e.to_string();
                warn!(artifact = what, error = %message, "diagnostic capture failed");
                Diagnostic::Failed(message)
            }
        }
    }

    /// Captured text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Diagnostic::Captured(text) => Some(text),
            Diagnostic::Failed(_) => None,
        }
    }

    /// Whether capture succeeded.
    pub fn is_captured(&self) -> bool {
        matches!(self, Diagnostic::Captured(_))
    }
}
