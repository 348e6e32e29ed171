//! Report rendering: human-readable summary plus the machine-readable
//! `MISSING_SECTIONS` marker consumed by CI automation.

use std::io;
use std::path::Path;

use prlint_core::ValidationReport;

use crate::output::OutputManager;

/// Print the human-readable validation summary.
///
/// Quiet mode suppresses everything except the failure lines (via
/// [`OutputManager::error`]); the machine marker is handled separately by
/// [`missing_sections_marker`] so it survives quiet mode and redirection.
pub fn print_report(
    output: &OutputManager,
    report: &ValidationReport,
    template_path: &Path,
) -> io::Result<()> {
    output.print("")?;
    output.header("PR Description Validation Results")?;
    output.print("")?;

    if report.is_valid {
        output.success("PR description is valid!")?;
    } else {
        output.error("PR description validation failed:")?;
        for error in &report.errors {
            output.print(&format!("   • {error}"))?;
        }
    }

    if let Some(missing) = report.missing_headers.as_ref().filter(|m| !m.is_empty()) {
        output.print("")?;
        output.header("Missing required sections:")?;
        for header in missing {
            output.print(&format!("   • {header}"))?;
        }
    }

    output.print("")?;
    output.info(&format!("Template reference: {}", template_path.display()))?;
    Ok(())
}

/// The `MISSING_SECTIONS="..."` marker line, if one should be emitted.
///
/// Present exactly when the report is invalid *and* carries a computed
/// missing list (the empty-description short-circuit has none).  The value
/// is a bulleted list with real newlines inside the quotes.
pub fn missing_sections_marker(report: &ValidationReport) -> Option<String> {
    if report.is_valid {
        return None;
    }
    let missing = report.missing_headers.as_ref()?;
    let bullets = missing
        .iter()
        .map(|h| format!("- {h}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("MISSING_SECTIONS=\"{bullets}\""))
}
