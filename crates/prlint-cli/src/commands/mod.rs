//! Command handlers.  Each submodule exposes a single `execute` function
//! that translates CLI arguments into core calls and renders the outcome.

use std::path::PathBuf;

use crate::config::{AppConfig, default_template_path};

pub mod check;
pub mod completions;
pub mod headers;

/// Resolve which template file to read.
///
/// Precedence: `--template` flag, then the config file, then the default
/// install-relative location.
fn resolve_template_path(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.template.path.clone())
        .unwrap_or_else(default_template_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.template.path = Some(PathBuf::from("from-config.md"));
        let resolved = resolve_template_path(Some(PathBuf::from("from-flag.md")), &config);
        assert_eq!(resolved, PathBuf::from("from-flag.md"));
    }

    #[test]
    fn config_wins_over_default() {
        let mut config = AppConfig::default();
        config.template.path = Some(PathBuf::from("from-config.md"));
        assert_eq!(
            resolve_template_path(None, &config),
            PathBuf::from("from-config.md")
        );
    }

    #[test]
    fn default_used_when_nothing_set() {
        let resolved = resolve_template_path(None, &AppConfig::default());
        assert!(resolved.ends_with("pull_request_template.md"));
    }
}
