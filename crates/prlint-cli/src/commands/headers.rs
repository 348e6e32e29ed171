//! Implementation of the `prlint headers` command.

use tracing::debug;

use prlint_core::Template;

use crate::{
    cli::{HeadersArgs, HeadersFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: HeadersArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template_path = super::resolve_template_path(args.template, &config);
    debug!(template = %template_path.display(), "listing required sections");

    let template = Template::load(&template_path)?;
    let headers = template.required_headers();

    match args.format {
        HeadersFormat::Table => {
            output.header(&format!(
                "Required sections ({}):",
                template_path.display()
            ))?;
            if headers.is_empty() {
                output.info("No required sections — every description passes.")?;
            }
            for header in &headers {
                output.print(&format!("  • {header}"))?;
            }
        }
        HeadersFormat::List => {
            for header in &headers {
                println!("{header}");
            }
        }
        HeadersFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&headers).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
