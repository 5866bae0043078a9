//! Finding and verdict types produced by the scanners.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of rule produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A PHI pattern match
    Phi,
    /// A restricted term occurrence
    RestrictedTerm,
}

impl FindingKind {
    /// Uppercase label used in rendered reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phi => "PHI",
            Self::RestrictedTerm => "RESTRICTED_TERM",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One located occurrence of a PHI pattern or restricted term.
///
/// `start`/`end` are byte offsets into the exact text that was scanned;
/// they are only meaningful together with that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Kind of rule that matched
    pub kind: FindingKind,

    /// The matched text
    pub matched_text: String,

    /// Byte offset where the match starts
    pub start: usize,

    /// Byte offset one past the end of the match
    pub end: usize,

    /// Surrounding text, populated only for restricted-term findings
    pub context: Option<String>,

    /// The rule that matched: the pattern source string for PHI findings,
    /// the term itself for restricted-term findings
    pub rule_reference: String,
}

/// Aggregate verdict for one piece of scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// PHI findings, ordered by pattern order then position
    pub phi_findings: Vec<Finding>,

    /// Required disclaimers that were absent, in rule-set order
    pub missing_disclaimers: Vec<String>,

    /// Restricted-term findings; reported for awareness, never gating
    pub restricted_term_findings: Vec<Finding>,

    /// True iff no PHI finding and no missing disclaimer. Restricted-term
    /// findings deliberately do not affect this flag.
    pub compliant: bool,

    /// Reference to externally captured evidence, if any was attached
    pub evidence_ref: Option<String>,
}

impl ValidationResult {
    /// Total number of findings of both kinds.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.phi_findings.len() + self.restricted_term_findings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_kind_labels() {
        assert_eq!(FindingKind::Phi.to_string(), "PHI");
        assert_eq!(FindingKind::RestrictedTerm.to_string(), "RESTRICTED_TERM");
    }

    #[test]
    fn test_finding_kind_serialization() {
        let json = serde_json::to_string(&FindingKind::RestrictedTerm).expect("serialize kind");
        assert_eq!(json, "\"restricted_term\"");
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = ValidationResult {
            phi_findings: vec![Finding {
                kind: FindingKind::Phi,
                matched_text: "555-123-4567".to_string(),
                start: 9,
                end: 21,
                context: None,
                rule_reference: r"\b\d{3}-\d{3}-\d{4}\b".to_string(),
            }],
            missing_disclaimers: vec!["Recorded line".to_string()],
            restricted_term_findings: vec![],
            compliant: false,
            evidence_ref: Some("screens/case-12.png".to_string()),
        };

        let json = serde_json::to_string(&result).expect("serialize result");
        let back: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(back, result);
        assert_eq!(back.finding_count(), 1);
    }
}
