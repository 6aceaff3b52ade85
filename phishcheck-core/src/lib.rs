// phishcheck-core/src/lib.rs
//! # phishcheck Core Library
//!
//! `phishcheck-core` classifies a single URL string as LEGIT, SUSPICIOUS or
//! PHISHING. It extracts a fixed set of lexical and statistical features from
//! the raw string and feeds them through a hand-tuned additive rule table.
//!
//! The library is pure and stateless: no network lookups, no persistence, no
//! I/O beyond optionally reading a scoring configuration file. Identical
//! input always yields an identical report.
//!
//! ## Modules
//!
//! * `features`: Defines [`FeatureSet`] and [`extract_features`].
//! * `host`: Extracts the authority (host component) of a URL.
//! * `lexicon`: The fixed keyword, TLD and character denylists.
//! * `rules`: The static table of weighted risk rules.
//! * `scoring`: [`RiskScorer`], [`Verdict`] and the verdict thresholds.
//! * `config`: YAML scoring configuration ([`ScoringConfig`]).
//! * `engine`: [`PhishingEngine`], [`UrlReport`] and [`check_url`].
//! * `errors`: [`PhishcheckError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use phishcheck_core::{check_url, Verdict};
//!
//! let report = check_url("http://192.168.1.1/login");
//! assert!(report.features.has_ip_address);
//! assert_eq!(report.verdict, Verdict::Suspicious);
//! println!("RISK SCORE = {}", report.score);
//! ```
//!
//! ## Error Handling
//!
//! Checking a URL cannot fail. Loading a scoring configuration returns
//! `anyhow::Result`, with [`PhishcheckError`] describing validation failures.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod features;
pub mod host;
pub mod lexicon;
pub mod rules;
pub mod scoring;

/// Re-exports the scoring configuration.
pub use config::ScoringConfig;

/// Re-exports the custom error type for clear error reporting.
pub use errors::PhishcheckError;

/// Re-exports the engine and its one-shot entry points.
pub use engine::{check_url, evaluate_phishing, PhishingEngine, UrlReport};

/// Re-exports feature extraction.
pub use features::{extract_features, FeatureName, FeatureSet};

/// Re-exports the rule table and scoring types.
pub use rules::{RiskRule, RuleId, RULES};
pub use scoring::{Assessment, RiskScorer, RuleHit, Verdict, VerdictThresholds};
