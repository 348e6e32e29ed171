//! Comprehensive error handling for the Prlint CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping
//!
//! A failed *validation* is not an error — `check` returns it as data and
//! maps it to the exit code itself.  These variants cover everything that
//! prevents validation from running at all.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use prlint_core::PrlintError;

// Re-export so callers only need `use crate::error::*`.
pub use prlint_core::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No PR description was supplied at all — neither the positional
    /// argument nor the `PR_BODY` environment variable.  Distinct from an
    /// explicit empty string, which reaches the validator.
    #[error(
        "No PR body provided. Please provide the PR description as an argument or set the PR_BODY environment variable."
    )]
    MissingBody,

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `prlint-core` (unreadable template).
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Validation could not run: {0}")]
    Core(#[from] PrlintError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed (terminal writes, completion output).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingBody => vec![
                "Pass the description as an argument: prlint check \"$BODY\"".into(),
                "Or export it first: PR_BODY=\"...\" prlint check".into(),
                "In GitHub Actions, use: PR_BODY: ${{ github.event.pull_request.body }}".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/prlint/config.toml".into(),
                "Pass an explicit config with --config <FILE>".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout/stderr are writable".into(),
            ],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingBody => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every error maps to `1`.  The exit status is a CI contract — callers
    /// branch only on zero/non-zero — so missing input, an unreadable
    /// template, and internal failures all share the same code.  (clap
    /// argument-parse failures exit `2` before this type is ever built.)
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing description).
    UserError,
    /// Configuration error (config file, template).
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn template_error() -> CliError {
        CliError::Core(PrlintError::TemplateRead {
            path: PathBuf::from("/nope/template.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        })
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_body_suggests_env_var() {
        let err = CliError::MissingBody;
        assert!(err.suggestions().iter().any(|s| s.contains("PR_BODY")));
    }

    #[test]
    fn core_error_suggestions_pass_through() {
        assert!(
            template_error()
                .suggestions()
                .iter()
                .any(|s| s.contains("--template"))
        );
    }

    #[test]
    fn config_error_suggestions_non_empty() {
        let err = CliError::ConfigError {
            message: "bad toml".into(),
            source: None,
        };
        assert!(!err.suggestions().is_empty());
    }

    // ── categories ────────────────────────────────────────────────────────

    #[test]
    fn missing_body_is_user_error() {
        assert_eq!(CliError::MissingBody.category(), ErrorCategory::UserError);
    }

    #[test]
    fn template_read_is_configuration() {
        assert_eq!(template_error().category(), ErrorCategory::Configuration);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_error_exits_one() {
        assert_eq!(CliError::MissingBody.exit_code(), 1);
        assert_eq!(template_error().exit_code(), 1);
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = CliError::MissingBody.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::MissingBody.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_chain() {
        let s = template_error().format_plain(true);
        assert!(s.contains("Caused by:"));
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CliError::IoError { .. }));
    }
}
