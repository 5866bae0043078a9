//! Sentra Checker - Compliance validation over transcripts and UI text.
//!
//! This crate inspects arbitrary text for regulated health information,
//! verifies mandatory legal disclaimers, and flags clinically sensitive
//! terms, merging everything into one structured verdict that release
//! gating consumes. All scanning is pure and synchronous over an immutable
//! rule set; a checker may be shared across any number of parallel callers.
//!
//! # Modules
//!
//! - [`types`] - [`Finding`] and [`ValidationResult`]
//! - [`phi`] - PHI pattern scanning
//! - [`disclaimer`] - Mandatory disclaimer verification
//! - [`terms`] - Restricted term scanning with context
//! - [`validator`] - The [`ComplianceChecker`] aggregator
//! - [`evidence`] - Evidence reference attachment
//!
//! # Example
//!
//! ```rust
//! use sentra_checker::ComplianceChecker;
//!
//! let checker = ComplianceChecker::with_builtin_rules();
//! let result = checker.validate("Please call me back at 555-123-4567");
//!
//! assert!(!result.compliant);
//! assert_eq!(result.phi_findings[0].matched_text, "555-123-4567");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod disclaimer;
pub mod evidence;
pub mod phi;
pub mod terms;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use types::{Finding, FindingKind, ValidationResult};
pub use validator::ComplianceChecker;
