//! errors.rs - Custom error types for the phishcheck-core library.
//!
//! Extraction and scoring are total and never fail. The variants here cover
//! the fallible edges around them: loading and validating scoring
//! configuration, and the internal authority parser whose failures are
//! absorbed by the feature extractor.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `phishcheck-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PhishcheckError {
    #[error("Failed to parse scoring configuration: {0}")]
    ConfigParse(String),

    #[error("Unknown scoring rule '{0}'")]
    UnknownRule(String),

    #[error("Rule '{rule}': weight {weight} must be a finite, non-negative number")]
    InvalidWeight { rule: String, weight: f64 },

    #[error("Verdict threshold '{name}' must be finite (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Suspicious threshold ({suspicious}) must not exceed phishing threshold ({phishing})")]
    ThresholdOrder { suspicious: f64, phishing: f64 },

    #[error("Malformed authority '{authority}': {reason}")]
    MalformedAuthority { authority: String, reason: String },

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
