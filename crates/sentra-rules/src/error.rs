//! Error types for rule bundle loading and construction.

use thiserror::Error;

/// Errors that can occur while constructing or loading a rule bundle.
#[derive(Error, Debug)]
pub enum RulesError {
    /// A custom pattern failed to compile.
    ///
    /// Surfaced once at rule-set construction so a bundle with a broken
    /// pattern never reaches the scanners.
    #[error("failed to compile rule pattern '{pattern}': {source}")]
    PatternCompile {
        /// Source string of the offending pattern
        pattern: String,
        /// Underlying regex compile error
        #[source]
        source: regex::Error,
    },

    /// A rule entry is structurally unusable (e.g., an empty string).
    #[error("invalid rule entry: {reason}")]
    InvalidRule {
        /// Reason the entry was rejected
        reason: String,
    },

    /// Failed to parse the rule file TOML.
    #[error("failed to parse rule file {path}: {source}")]
    ParseError {
        /// Path to the rule file
        path: String,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// Failed to determine the default rules path.
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// I/O error while reading the rule file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RulesError>;
