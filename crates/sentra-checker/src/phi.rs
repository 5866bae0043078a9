//! PHI pattern scanning.

use crate::types::{Finding, FindingKind};
use sentra_rules::ComplianceRuleSet;

/// Scan text for PHI pattern matches.
///
/// Every pattern in the rule set is applied in order; each non-overlapping
/// match yields one finding, left to right. Matches from different patterns
/// may overlap in position and are never deduplicated, so two patterns
/// covering the same span produce two findings.
#[must_use]
pub fn scan(text: &str, rules: &ComplianceRuleSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pattern in rules.phi_patterns() {
        for m in pattern.regex().find_iter(text) {
            findings.push(Finding {
                kind: FindingKind::Phi,
                matched_text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                context: None,
                rule_reference: pattern.source().to_string(),
            });
        }
    }

    findings
}
