//! Unified error handling for Prlint Core.
//!
//! A missing or unreadable template is a *configuration* problem, never a
//! validation outcome: it is surfaced as a typed error rather than a silent
//! empty header list, and callers are expected to treat it as fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Prlint Core operations.
#[derive(Debug, Error)]
pub enum PrlintError {
    /// The template file could not be read.
    #[error("failed to read template '{}'", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrlintError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRead { path, .. } => vec![
                format!("Ensure the template exists at '{}'", path.display()),
                "Pass an explicit template with --template <FILE>".into(),
                "Check file permissions on the template".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRead { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PrlintResult<T> = Result<T, PrlintError>;
