//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "prlint",
    bin_name = "prlint",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4cb} Validate PR descriptions against the repository template",
    long_about = "Prlint checks that a pull-request description contains every \
                  required section declared in the markdown PR template.",
    after_help = "EXAMPLES:\n\
        \x20 prlint check \"$PR_DESCRIPTION\"\n\
        \x20 PR_BODY=\"...\" prlint check\n\
        \x20 prlint check --template docs/pr_template.md \"$BODY\"\n\
        \x20 prlint headers --format list\n\
        \x20 prlint completions bash > /usr/share/bash-completion/completions/prlint",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a PR description against the template.
    #[command(
        visible_alias = "c",
        about = "Validate a PR description",
        after_help = "EXAMPLES:\n\
            \x20 prlint check \"### Summary\\nFixes the widget.\\n### Testing\\ncargo test\"\n\
            \x20 PR_BODY=\"$(gh pr view --json body -q .body)\" prlint check\n\
            \x20 prlint check --template .github/pull_request_template.md \"$BODY\""
    )]
    Check(CheckArgs),

    /// List the required section headers extracted from the template.
    #[command(
        visible_alias = "ls",
        about = "List required sections",
        after_help = "EXAMPLES:\n\
            \x20 prlint headers\n\
            \x20 prlint headers --format json\n\
            \x20 prlint headers --template docs/pr_template.md"
    )]
    Headers(HeadersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 prlint completions bash > ~/.local/share/bash-completion/completions/prlint\n\
            \x20 prlint completions zsh  > ~/.zfunc/_prlint\n\
            \x20 prlint completions fish > ~/.config/fish/completions/prlint.fish"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `prlint check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The PR description to validate.  Falls back to the `PR_BODY`
    /// environment variable when the argument is omitted; absence of both is
    /// a fatal input error, while an explicit empty string is a validation
    /// failure.
    #[arg(value_name = "BODY", env = "PR_BODY", help = "PR description text")]
    pub body: Option<String>,

    /// Template file to read required sections from.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file (default: .github/pull_request_template.md next to the install dir)"
    )]
    pub template: Option<PathBuf>,
}

// ── headers ───────────────────────────────────────────────────────────────────

/// Arguments for `prlint headers`.
#[derive(Debug, Args)]
pub struct HeadersArgs {
    /// Template file to read required sections from.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file (default: .github/pull_request_template.md next to the install dir)"
    )]
    pub template: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: HeadersFormat,
}

/// Output format for the `headers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadersFormat {
    /// Human-readable list with a heading.
    Table,
    /// One header per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `prlint completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_with_body() {
        let cli = Cli::parse_from(["prlint", "check", "### Summary\ntext"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.body.as_deref(), Some("### Summary\ntext"));
            assert!(args.template.is_none());
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn parse_check_template_flag() {
        let cli = Cli::parse_from(["prlint", "check", "-t", "tpl.md", "body"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.template.as_deref(), Some("tpl.md".as_ref()));
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn check_alias() {
        let cli = Cli::parse_from(["prlint", "c", "body"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn parse_headers_default_format() {
        let cli = Cli::parse_from(["prlint", "headers"]);
        if let Commands::Headers(args) = cli.command {
            assert!(matches!(args.format, HeadersFormat::Table));
        } else {
            panic!("expected Headers command");
        }
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["prlint", "completions", "zsh"]);
        if let Commands::Completions(args) = cli.command {
            assert!(matches!(args.shell, Shell::Zsh));
        } else {
            panic!("expected Completions command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["prlint", "--quiet", "--verbose", "headers"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["prlint"]).is_err());
    }
}
