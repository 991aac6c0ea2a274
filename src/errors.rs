//! Matchfile error handling.
//!
//! Only genuinely fatal conditions surface here. A missing reference file in
//! read-only mode and a content mismatch are assertion *failures*, reported
//! through [`MatchOutcome`](crate::matcher::MatchOutcome); they never become
//! a `MatchError`.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Fatal failures raised while evaluating a file match.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Filesystem failure (permission denied, disk full, unreadable file).
    /// Never retried; aborts the assertion.
    #[error("i/o failure on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid invocation detected before any I/O is attempted.
    #[error("invalid usage: {message}")]
    InvalidUsage { message: String },
}

impl MatchError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage {
            message: message.into(),
        }
    }

    /// Stable error code for diagnostics and test assertions.
    pub const fn code_str(&self) -> &'static str {
        match self {
            Self::Io { .. } => "matchfile::store::io",
            Self::InvalidUsage { .. } => "matchfile::usage",
        }
    }
}

impl Diagnostic for MatchError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Self::Io { .. } => {
                "Check permissions and free space for the reference file directory."
            }
            Self::InvalidUsage { .. } => {
                "Supply a non-empty reference file path, or a test name that survives sanitization."
            }
        };
        Some(Box::new(help) as Box<dyn fmt::Display>)
    }
}
