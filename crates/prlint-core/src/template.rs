//! Template loading and required-header extraction.
//!
//! A required section is any full line of the template matching `^### .+$` —
//! exactly three hashes and one space, then non-empty content. Other heading
//! levels are ignored; only level-3 headings declare requirements.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{PrlintError, PrlintResult};

/// Line-anchored matcher for required section headers.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### .+$").expect("header regex is valid"));

/// A pull-request description template.
///
/// Holds the raw markdown content plus the path it was loaded from (kept for
/// diagnostics and the report footer).
#[derive(Debug, Clone)]
pub struct Template {
    path: Option<PathBuf>,
    content: String,
}

impl Template {
    /// Read the template from `path`.
    ///
    /// A read failure (missing file, permission error) is returned as
    /// [`PrlintError::TemplateRead`] — never as an empty header list.
    pub fn load(path: &Path) -> PrlintResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| PrlintError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "template loaded");
        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
        })
    }

    /// Build a template from in-memory content (used by tests and embedding).
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into(),
        }
    }

    /// The path this template was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw template content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The required section headers, in order of first appearance.
    pub fn required_headers(&self) -> Vec<String> {
        extract_headers(&self.content)
    }
}

/// Extract every `### `-level header line from `content`.
///
/// Each match is trimmed of surrounding whitespace. Order of appearance is
/// preserved and duplicates are kept (presence checking is idempotent, so a
/// repeated header adds no extra requirement). An empty or header-less
/// template yields an empty vec — a valid degenerate configuration under
/// which every description passes.
pub fn extract_headers(content: &str) -> Vec<String> {
    HEADER_RE
        .find_iter(content)
        .map(|m| m.as_str().trim().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const TEMPLATE: &str = "\
## Description

### Summary
What does this PR do?

### Testing
How was it verified?

#### Checklist
- [ ] not a requirement
";

    #[test]
    fn extracts_level_three_headers_in_order() {
        assert_eq!(
            extract_headers(TEMPLATE),
            vec!["### Summary", "### Testing"]
        );
    }

    #[test]
    fn ignores_other_heading_levels() {
        let headers = extract_headers("## Two\n### Three\n#### Four\n# One\n");
        assert_eq!(headers, vec!["### Three"]);
    }

    #[test]
    fn requires_space_after_hashes() {
        assert!(extract_headers("###NoSpace\n").is_empty());
    }

    #[test]
    fn requires_non_empty_remainder() {
        assert!(extract_headers("### \n###\n").is_empty());
    }

    #[test]
    fn indented_headers_do_not_match() {
        // The pattern is anchored to the start of the line.
        assert!(extract_headers("  ### Indented\n").is_empty());
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        assert_eq!(extract_headers("### Padded   \n"), vec!["### Padded"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let headers = extract_headers("### Twice\ntext\n### Twice\n");
        assert_eq!(headers, vec!["### Twice", "### Twice"]);
    }

    #[test]
    fn empty_template_yields_no_headers() {
        assert!(extract_headers("").is_empty());
    }

    #[test]
    fn template_from_content_has_no_path() {
        let t = Template::from_content("### A\n");
        assert!(t.path().is_none());
        assert_eq!(t.required_headers(), vec!["### A"]);
    }

    #[test]
    fn load_reads_file_and_records_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "### Summary\n### Testing\n").unwrap();

        let t = Template::load(file.path()).unwrap();
        assert_eq!(t.path(), Some(file.path()));
        assert_eq!(t.required_headers(), vec!["### Summary", "### Testing"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = Template::load(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, PrlintError::TemplateRead { .. }));
    }
}
