//! Prlint Core - Template-Driven Section Validation
//!
//! This crate provides the validation logic for the Prlint pull-request
//! description checker. It is deliberately free of process-level concerns:
//!
//! - no process exit — failures are typed errors or report values
//! - no terminal output — the CLI crate renders reports
//! - the only I/O is the one-shot template read in [`Template::load`]
//!
//! ## Data flow
//!
//! ```text
//! template file ──► Template::load ──► required_headers()
//!                                            │
//! candidate text ──► SectionValidator ◄──────┘
//!                         │
//!                         ▼
//!                  ValidationReport (is_valid, errors, missing_headers)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use prlint_core::{SectionValidator, Template};
//!
//! let template = Template::load(Path::new(".github/pull_request_template.md"))?;
//! let validator = SectionValidator::from_template(&template);
//! let report = validator.validate("### Summary\nAdds a widget.\n### Testing\ncargo test");
//! assert!(report.is_valid);
//! # Ok::<(), prlint_core::PrlintError>(())
//! ```

pub mod error;
pub mod template;
pub mod validation;

pub use error::{ErrorCategory, PrlintError, PrlintResult};
pub use template::{Template, extract_headers};
pub use validation::{EMPTY_DESCRIPTION_ERROR, SectionValidator, ValidationReport};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
