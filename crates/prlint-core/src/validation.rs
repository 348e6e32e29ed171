//! Candidate description validation.
//!
//! Checking is pure substring containment: a required header counts as
//! present wherever it appears in the candidate, even mid-sentence. Matching
//! is case- and whitespace-sensitive.

use serde::Serialize;
use tracing::debug;

use crate::template::Template;

/// Error message for the empty-candidate short-circuit.
pub const EMPTY_DESCRIPTION_ERROR: &str =
    "PR description is empty. Please provide a description following the template.";

/// The outcome of validating a candidate description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True iff every required header was found in the candidate.
    pub is_valid: bool,
    /// One human-readable message per problem.
    pub errors: Vec<String>,
    /// The headers that were not found. `None` on the empty-candidate
    /// short-circuit — distinct from `Some(vec![])`, which means "checked,
    /// nothing missing".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_headers: Option<Vec<String>>,
}

impl ValidationReport {
    fn empty_candidate() -> Self {
        Self {
            is_valid: false,
            errors: vec![EMPTY_DESCRIPTION_ERROR.to_owned()],
            missing_headers: None,
        }
    }
}

/// Checks candidate descriptions against a fixed set of required headers.
#[derive(Debug, Clone)]
pub struct SectionValidator {
    required: Vec<String>,
}

impl SectionValidator {
    /// Build a validator from an explicit header list.
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }

    /// Build a validator from a loaded template.
    pub fn from_template(template: &Template) -> Self {
        Self::new(template.required_headers())
    }

    /// The headers this validator requires, in template order.
    pub fn required_headers(&self) -> &[String] {
        &self.required
    }

    /// Validate `candidate` against the required headers.
    ///
    /// Empty or whitespace-only input short-circuits with a single error and
    /// no missing-header computation. Otherwise each required header is
    /// tested for literal containment, in order; the report accumulates one
    /// error per missing header.
    pub fn validate(&self, candidate: &str) -> ValidationReport {
        if candidate.trim().is_empty() {
            debug!("candidate is empty, short-circuiting");
            return ValidationReport::empty_candidate();
        }

        let mut errors = Vec::new();
        let mut missing = Vec::new();
        for header in &self.required {
            if !candidate.contains(header.as_str()) {
                missing.push(header.clone());
                errors.push(format!("Missing required section: {header}"));
            }
        }

        debug!(
            required = self.required.len(),
            missing = missing.len(),
            "validation complete"
        );

        ValidationReport {
            is_valid: missing.is_empty(),
            errors,
            missing_headers: Some(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> SectionValidator {
        SectionValidator::new(vec!["### Summary".into(), "### Testing".into()])
    }

    #[test]
    fn all_headers_present_is_valid() {
        let report = validator().validate("### Summary\nstuff\n### Testing\nmore");
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.missing_headers, Some(vec![]));
    }

    #[test]
    fn missing_header_is_reported() {
        let report = validator().validate("### Summary\nSome text");
        assert!(!report.is_valid);
        assert_eq!(report.missing_headers, Some(vec!["### Testing".into()]));
        assert_eq!(
            report.errors,
            vec!["Missing required section: ### Testing".to_owned()]
        );
    }

    #[test]
    fn empty_candidate_short_circuits() {
        let report = validator().validate("");
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![EMPTY_DESCRIPTION_ERROR.to_owned()]);
        assert!(report.missing_headers.is_none());
    }

    #[test]
    fn whitespace_only_candidate_short_circuits() {
        let report = validator().validate("  \n\t \n");
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.missing_headers.is_none());
    }

    #[test]
    fn empty_short_circuit_ignores_template_content() {
        // Even with no required headers at all, empty input is invalid.
        let report = SectionValidator::new(vec![]).validate("");
        assert!(!report.is_valid);
    }

    #[test]
    fn containment_is_pure_substring() {
        // The header need not sit on its own line in the candidate.
        let v = SectionValidator::new(vec!["### Summary".into()]);
        let report = v.validate("no headers here at all ### Summary trailing");
        assert!(report.is_valid);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let v = SectionValidator::new(vec!["### Summary".into()]);
        assert!(!v.validate("### summary\ntext").is_valid);
    }

    #[test]
    fn missing_headers_preserve_template_order() {
        let v = SectionValidator::new(vec![
            "### A".into(),
            "### B".into(),
            "### C".into(),
        ]);
        let report = v.validate("only ### B is here");
        assert_eq!(
            report.missing_headers,
            Some(vec!["### A".into(), "### C".into()])
        );
    }

    #[test]
    fn no_required_headers_is_trivially_valid() {
        let report = SectionValidator::new(vec![]).validate("anything");
        assert!(report.is_valid);
        assert_eq!(report.missing_headers, Some(vec![]));
    }

    #[test]
    fn validation_is_idempotent() {
        let v = validator();
        let first = v.validate("### Summary only");
        let second = v.validate("### Summary only");
        assert_eq!(first, second);
    }

    #[test]
    fn errors_track_missing_headers() {
        let report = validator().validate("unrelated text");
        let missing = report.missing_headers.as_ref().unwrap();
        assert_eq!(report.errors.len(), missing.len());
        assert_eq!(report.is_valid, missing.is_empty());
    }

    #[test]
    fn json_omits_missing_headers_on_empty_branch() {
        let report = validator().validate("");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("missing_headers").is_none());
        assert_eq!(json["is_valid"], false);
    }

    #[test]
    fn json_includes_missing_headers_otherwise() {
        let report = validator().validate("### Summary");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missing_headers"][0], "### Testing");
    }
}
