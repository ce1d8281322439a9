//! Program output report.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CurationError;

/// Error recorded for a failed program run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramError {
    /// Error kind, e.g. `ParseError` or `ProgramError`.
    pub kind: String,

    /// Human-readable message.
    pub message: String,
}

impl From<&CurationError> for ProgramError {
    fn from(err: &CurationError) -> Self {
        let message = match err {
            CurationError::Program(message) => message.clone(),
            other => other.to_string(),
        };

        Self {
            kind: err.kind().to_string(),
            message,
        }
    }
}

/// Result of applying a curation program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramOutput {
    /// Name of the program that ran.
    pub program: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run finished.
    pub finished_at: DateTime<Utc>,

    /// Console output, one line per logged value.
    pub log: String,

    /// Set when session setup or the program itself failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProgramError>,
}

impl ProgramOutput {
    /// True if the program ran to completion.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Wall-clock time spent in the run.
    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// Render the report shown to the user after a run.
    ///
    /// The console log comes first, followed by a blank line. A failed run
    /// appends the error kind, its message, the program name, and a final
    /// `ERROR:` line.
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(self.log.len() + 1);
        text.push_str(&self.log);
        text.push('\n');

        if let Some(error) = &self.error {
            text.push_str(&format!("{}\n", error.kind));
            text.push_str(&format!("{}\n", error.message));
            text.push_str(&format!("program {}\n", self.program));
            text.push_str(&format!("ERROR: {}: {}\n", error.kind, error.message));
        }

        text
    }
}

impl fmt::Display for ProgramOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
