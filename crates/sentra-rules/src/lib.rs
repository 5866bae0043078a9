//! Sentra Rules - Compliance rule bundle model and loading.
//!
//! This crate owns the [`ComplianceRuleSet`]: the immutable bundle of PHI
//! patterns, required disclaimers, and restricted terms that drives
//! validation. Rule files are TOML documents; a missing or malformed file
//! falls back to a built-in default bundle, while a custom pattern that
//! fails to compile fails the load so a broken rule can never silently
//! skip scans.
//!
//! # Modules
//!
//! - [`ruleset`] - The rule bundle and compiled pattern types
//! - [`loader`] - TOML loading with built-in fallback
//! - [`error`] - Error types using thiserror
//!
//! # Example
//!
//! ```rust
//! use sentra_rules::RuleSetLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A missing file yields the built-in bundle, never an error.
//! let rules = RuleSetLoader::new("rules.toml").load()?;
//! assert!(!rules.phi_patterns().is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod loader;
pub mod ruleset;

// Re-export commonly used types
pub use error::{Result, RulesError};
pub use loader::RuleSetLoader;
pub use ruleset::{ComplianceRuleSet, PhiPattern, RestrictedTerm};
