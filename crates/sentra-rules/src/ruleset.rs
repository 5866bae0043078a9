//! The compliance rule bundle: PHI patterns, disclaimers, restricted terms.
//!
//! A [`ComplianceRuleSet`] is immutable after construction and shared
//! read-only by every scanner, so validation over the same bundle is
//! deterministic and safe to run from any number of parallel callers.

use crate::error::{Result, RulesError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in PHI pattern sources, in scan order: national ID (SSN-like),
/// US phone number, email address, numeric date.
const DEFAULT_PHI_PATTERNS: &[&str] = &[
    r"\b\d{3}-\d{2}-\d{4}\b",
    r"\b(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
];

/// Built-in disclaimers that must appear in patient-facing text.
const DEFAULT_DISCLAIMERS: &[&str] = &[
    "This call may be recorded for quality and training purposes",
    "This information is not a substitute for professional medical advice",
];

/// Built-in restricted terms, tracked for awareness (illustrative, not
/// exhaustive).
const DEFAULT_RESTRICTED_TERMS: &[&str] =
    &["HIV", "AIDS", "mental illness", "substance abuse", "overdose"];

static BUILTIN: Lazy<ComplianceRuleSet> = Lazy::new(|| {
    ComplianceRuleSet::new(
        DEFAULT_PHI_PATTERNS.iter().map(ToString::to_string).collect(),
        DEFAULT_DISCLAIMERS.iter().map(ToString::to_string).collect(),
        DEFAULT_RESTRICTED_TERMS
            .iter()
            .map(ToString::to_string)
            .collect(),
    )
    .expect("built-in rule set compiles")
});

/// A compiled PHI detection pattern together with its original source string.
///
/// The source string doubles as the identifying label carried in findings.
#[derive(Debug, Clone)]
pub struct PhiPattern {
    source: String,
    regex: Regex,
}

impl PhiPattern {
    /// Compile a pattern from its source string.
    ///
    /// # Errors
    /// Returns [`RulesError::PatternCompile`] naming the pattern if the
    /// source is not a valid regular expression.
    pub fn compile(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(RulesError::InvalidRule {
                reason: "PHI pattern cannot be empty".to_string(),
            });
        }
        let regex = Regex::new(&source).map_err(|e| RulesError::PatternCompile {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self { source, regex })
    }

    /// The original pattern source string.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled matcher.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// A restricted term together with its precompiled case-insensitive,
/// whole-word matcher.
#[derive(Debug, Clone)]
pub struct RestrictedTerm {
    term: String,
    matcher: Regex,
}

impl RestrictedTerm {
    /// Compile a whole-word matcher for a term.
    ///
    /// The term itself is escaped, so it matches literally. Word boundaries
    /// around the escaped term keep a term from matching inside a larger
    /// word (`HIV` must not match inside `archive`).
    fn compile(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(RulesError::InvalidRule {
                reason: "restricted term cannot be empty".to_string(),
            });
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&term));
        let matcher = Regex::new(&pattern).map_err(|e| RulesError::PatternCompile {
            pattern: term.clone(),
            source: e,
        })?;
        Ok(Self { term, matcher })
    }

    /// The restricted term string.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The compiled whole-word matcher.
    #[must_use]
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// The immutable bundle of patterns, disclaimers, and terms driving
/// validation.
///
/// One instance is constructed at startup and shared by all scanners for
/// the lifetime of the checker. Pattern sources are compiled exactly once
/// here, never re-parsed per scan.
#[derive(Debug, Clone)]
pub struct ComplianceRuleSet {
    phi_patterns: Vec<PhiPattern>,
    required_disclaimers: Vec<String>,
    restricted_terms: Vec<RestrictedTerm>,
}

impl ComplianceRuleSet {
    /// Build a rule set from raw rule strings, compiling every pattern.
    ///
    /// Restricted terms have set semantics: duplicates are dropped,
    /// first-occurrence order is kept.
    ///
    /// # Errors
    /// Returns [`RulesError::PatternCompile`] for the first PHI pattern that
    /// fails to compile, or [`RulesError::InvalidRule`] for an empty entry.
    /// Construction fails rather than silently skipping a broken rule.
    pub fn new(
        phi_patterns: Vec<String>,
        required_disclaimers: Vec<String>,
        restricted_terms: Vec<String>,
    ) -> Result<Self> {
        let phi_patterns = phi_patterns
            .into_iter()
            .map(PhiPattern::compile)
            .collect::<Result<Vec<_>>>()?;

        for disclaimer in &required_disclaimers {
            if disclaimer.trim().is_empty() {
                return Err(RulesError::InvalidRule {
                    reason: "required disclaimer cannot be empty".to_string(),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        let restricted_terms = restricted_terms
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .map(RestrictedTerm::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            phi_patterns,
            required_disclaimers,
            restricted_terms,
        })
    }

    /// The built-in default rule set.
    ///
    /// Used whenever no custom rule file is available.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// PHI patterns, in scan order.
    #[must_use]
    pub fn phi_patterns(&self) -> &[PhiPattern] {
        &self.phi_patterns
    }

    /// Required disclaimers, in check order.
    #[must_use]
    pub fn required_disclaimers(&self) -> &[String] {
        &self.required_disclaimers
    }

    /// Restricted terms, deduplicated, in the order they were declared.
    #[must_use]
    pub fn restricted_terms(&self) -> &[RestrictedTerm] {
        &self.restricted_terms
    }
}
