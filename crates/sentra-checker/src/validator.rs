//! Verdict aggregation over the three scanners.

use crate::types::ValidationResult;
use crate::{disclaimer, phi, terms};
use sentra_rules::{ComplianceRuleSet, RuleSetLoader, Result};
use std::path::Path;
use tracing::debug;

/// The compliance checker: one immutable rule set, stateless validation.
///
/// `validate` is a pure function of the rule set and the text, so a single
/// checker may be shared and called concurrently from any number of parallel
/// callers (one per test case or per screen check) without synchronization.
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    rules: ComplianceRuleSet,
}

impl ComplianceChecker {
    /// Create a checker over an already constructed rule set.
    #[must_use]
    pub fn new(rules: ComplianceRuleSet) -> Self {
        Self { rules }
    }

    /// Create a checker with the built-in default rule set.
    #[must_use]
    pub fn with_builtin_rules() -> Self {
        Self::new(ComplianceRuleSet::builtin())
    }

    /// Create a checker by loading a rule file.
    ///
    /// A missing or malformed file falls back to the built-in rule set.
    ///
    /// # Errors
    /// Returns [`sentra_rules::RulesError::PatternCompile`] if a custom
    /// pattern in the file fails to compile.
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        let rules = RuleSetLoader::new(path.as_ref()).load()?;
        Ok(Self::new(rules))
    }

    /// The rule set this checker validates against.
    #[must_use]
    pub fn rules(&self) -> &ComplianceRuleSet {
        &self.rules
    }

    /// Validate a piece of text against the rule set.
    ///
    /// Runs all three scanners over the same text and merges their output.
    /// The verdict is compliant iff there are no PHI findings and no missing
    /// disclaimers; restricted-term findings are reported for awareness but
    /// never gate.
    #[must_use]
    pub fn validate(&self, text: &str) -> ValidationResult {
        let phi_findings = phi::scan(text, &self.rules);
        let missing_disclaimers = disclaimer::check(text, &self.rules);
        let restricted_term_findings = terms::scan(text, &self.rules);

        let compliant = phi_findings.is_empty() && missing_disclaimers.is_empty();

        debug!(
            phi = phi_findings.len(),
            missing_disclaimers = missing_disclaimers.len(),
            restricted_terms = restricted_term_findings.len(),
            compliant,
            "validated text"
        );

        ValidationResult {
            phi_findings,
            missing_disclaimers,
            restricted_term_findings,
            compliant,
            evidence_ref: None,
        }
    }
}
