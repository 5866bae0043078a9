//! Evidence attachment for validation results.
//!
//! Evidence capture (typically a screen snapshot taken by the surrounding
//! browser tooling) is an opaque caller-supplied operation: a closure
//! returning either an evidence reference string or a failure. The checker
//! neither imposes nor manages timeouts on it; cancellation and retry
//! policy belong to the caller.

use crate::types::ValidationResult;
use crate::validator::ComplianceChecker;
use std::fmt::Display;
use tracing::warn;

impl ComplianceChecker {
    /// Validate text and attach an externally captured evidence reference.
    ///
    /// The text is validated first; `capture` is then invoked and its
    /// result attached as `evidence_ref`. A capture failure degrades the
    /// result (`evidence_ref` stays `None`) and is logged — it never aborts
    /// or alters the compliance verdict itself.
    pub fn validate_with_evidence<F, E>(&self, text: &str, capture: F) -> ValidationResult
    where
        F: FnOnce() -> std::result::Result<String, E>,
        E: Display,
    {
        let mut result = self.validate(text);

        match capture() {
            Ok(reference) => result.evidence_ref = Some(reference),
            Err(e) => {
                warn!(error = %e, "evidence capture failed, returning verdict without reference");
            }
        }

        result
    }
}
