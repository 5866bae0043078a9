//! Rule bundle loading from TOML files.
//!
//! A rule file has three required top-level fields:
//!
//! ```toml
//! phi_patterns = ['\b\d{3}-\d{2}-\d{4}\b']
//! required_disclaimers = ["This call may be recorded"]
//! restricted_terms = ["HIV", "overdose"]
//! ```

use crate::error::{Result, RulesError};
use crate::ruleset::ComplianceRuleSet;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// On-disk shape of a rule bundle.
///
/// All three fields are required: a partially written file is treated as a
/// structural error rather than silently disabling one scanner while
/// keeping the others.
#[derive(Debug, Deserialize)]
struct RuleFile {
    phi_patterns: Vec<String>,
    required_disclaimers: Vec<String>,
    restricted_terms: Vec<String>,
}

/// Loader for compliance rule bundles.
pub struct RuleSetLoader {
    /// Path to the rule file
    path: PathBuf,
}

impl RuleSetLoader {
    /// Create a loader for the given rule file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a loader pointed at the default rules path,
    /// `~/.config/sentra/rules.toml` (or platform equivalent).
    ///
    /// # Errors
    /// Returns [`RulesError::NoConfigDir`] if the XDG base directories
    /// cannot be determined.
    pub fn with_default_path() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "sentra", "sentra").ok_or(RulesError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join("rules.toml")))
    }

    /// The path this loader reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the rule bundle.
    ///
    /// A missing, unreadable, or structurally malformed file is recovered
    /// locally: a warning is logged and the built-in bundle is returned.
    ///
    /// # Errors
    /// A custom pattern that fails to compile is not recovered. The load
    /// fails with [`RulesError::PatternCompile`] naming the pattern, so a
    /// bundle with a silently skipped pattern never exists.
    pub fn load(&self) -> Result<ComplianceRuleSet> {
        let file = match self.read_rule_file() {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "falling back to built-in rule set"
                );
                return Ok(ComplianceRuleSet::builtin());
            }
        };

        let rules = ComplianceRuleSet::new(
            file.phi_patterns,
            file.required_disclaimers,
            file.restricted_terms,
        )?;

        info!(
            path = %self.path.display(),
            phi_patterns = rules.phi_patterns().len(),
            disclaimers = rules.required_disclaimers().len(),
            restricted_terms = rules.restricted_terms().len(),
            "loaded rule set"
        );

        Ok(rules)
    }

    /// Read and parse the rule file without compiling patterns.
    fn read_rule_file(&self) -> Result<RuleFile> {
        let contents = std::fs::read_to_string(&self.path)?;
        toml::from_str(&contents).map_err(|e| RulesError::ParseError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
