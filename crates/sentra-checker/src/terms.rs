//! Restricted term scanning with surrounding context.

use crate::types::{Finding, FindingKind};
use sentra_rules::ComplianceRuleSet;

/// Context radius around a term match, in characters.
const CONTEXT_RADIUS: usize = 20;

/// Scan text for restricted term occurrences.
///
/// Matching is case-insensitive and whole-word: a term never matches as a
/// strict substring of a larger word. Every occurrence produces a separate
/// finding carrying the surrounding context, clamped at text boundaries.
#[must_use]
pub fn scan(text: &str, rules: &ComplianceRuleSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for term in rules.restricted_terms() {
        for m in term.matcher().find_iter(text) {
            findings.push(Finding {
                kind: FindingKind::RestrictedTerm,
                matched_text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                context: Some(context_window(text, m.start(), m.end())),
                rule_reference: term.term().to_string(),
            });
        }
    }

    findings
}

/// Extract the context window around a match.
///
/// Offsets are byte indices; the window is widened by [`CONTEXT_RADIUS`]
/// characters on each side, walking chars so it never splits a UTF-8
/// sequence, and clamped at the text boundaries.
fn context_window(text: &str, start: usize, end: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_RADIUS - 1)
        .map_or(0, |(i, _)| i);
    let window_end = text[end..]
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map_or(text.len(), |(i, _)| end + i);

    text[window_start..window_end].to_string()
}
