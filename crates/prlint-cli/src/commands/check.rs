//! Implementation of the `prlint check` command.
//!
//! Responsibility: resolve the candidate text and template path, call the
//! core validator, and render the result.  The validation verdict is mapped
//! to the exit code here — a failed check is an expected outcome, not an
//! error.

use std::process::ExitCode;

use tracing::{debug, info, instrument};

use prlint_core::{SectionValidator, Template};

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    report,
};

#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<ExitCode> {
    // clap has already applied the PR_BODY env fallback; `None` here means
    // neither source supplied anything.  An explicit empty string passes
    // through to the validator's empty-description branch.
    let body = args.body.ok_or(CliError::MissingBody)?;

    let template_path = super::resolve_template_path(args.template, &config);
    debug!(template = %template_path.display(), "resolving required sections");

    // A missing or unreadable template is fatal — never treated as "no
    // required sections".
    let template = Template::load(&template_path)?;
    let validator = SectionValidator::from_template(&template);
    let report = validator.validate(&body);

    info!(
        valid = report.is_valid,
        errors = report.errors.len(),
        "validation finished"
    );

    if output.format() == OutputFormat::Json {
        // Machine-readable report to stdout, bypassing the OutputManager so
        // it stays parseable in non-TTY pipes.
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into());
        println!("{json}");
    } else {
        report::print_report(&output, &report, &template_path)?;
        if let Some(marker) = report::missing_sections_marker(&report) {
            // For automation callers; printed even in quiet mode.
            println!("{marker}");
        }
    }

    Ok(if report.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
