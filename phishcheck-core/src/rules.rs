//! The additive risk rules.
//!
//! Each rule is an independent `(predicate, weight)` pair over a
//! [`FeatureSet`]. Rules never look at each other; the scorer simply adds up
//! the weights of every rule whose predicate holds.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PhishcheckError;
use crate::features::FeatureSet;

/// URLs longer than this many characters are penalized.
pub const LONG_URL_LENGTH: usize = 30;
pub const MAX_HYPHENS: usize = 3;
pub const MAX_SLASHES: usize = 5;
pub const MAX_DIGITS: usize = 5;
pub const MAX_SUSPICIOUS_CHARS: usize = 3;
/// Bits per character above which a URL looks randomly generated.
pub const HIGH_ENTROPY_BITS: f64 = 4.0;

/// Stable identifier of a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    IpAddress,
    AtSymbol,
    SuspiciousKeywords,
    SuspiciousTld,
    LongUrl,
    ManyHyphens,
    ManySlashes,
    ManyDigits,
    HighEntropy,
    NoWwwPrefix,
    ManySuspiciousChars,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::IpAddress => "ip_address",
            RuleId::AtSymbol => "at_symbol",
            RuleId::SuspiciousKeywords => "suspicious_keywords",
            RuleId::SuspiciousTld => "suspicious_tld",
            RuleId::LongUrl => "long_url",
            RuleId::ManyHyphens => "many_hyphens",
            RuleId::ManySlashes => "many_slashes",
            RuleId::ManyDigits => "many_digits",
            RuleId::HighEntropy => "high_entropy",
            RuleId::NoWwwPrefix => "no_www_prefix",
            RuleId::ManySuspiciousChars => "many_suspicious_chars",
        }
    }

    /// Position of this rule in [`RULES`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = PhishcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RULES
            .iter()
            .map(|rule| rule.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PhishcheckError::UnknownRule(s.to_string()))
    }
}

/// A single weighted indicator.
#[derive(Clone, Copy)]
pub struct RiskRule {
    pub id: RuleId,
    pub description: &'static str,
    /// Default contribution to the score when the rule fires.
    pub weight: f64,
    predicate: fn(&FeatureSet) -> bool,
}

impl RiskRule {
    /// True if this rule fires for the given features.
    pub fn matches(&self, features: &FeatureSet) -> bool {
        (self.predicate)(features)
    }
}

impl fmt::Debug for RiskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskRule")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Number of rules in [`RULES`].
pub const RULE_COUNT: usize = 11;

/// The rule table, in evaluation order. `RULES[id.index()].id == id`.
pub static RULES: [RiskRule; RULE_COUNT] = [
    // Strong indicators
    RiskRule {
        id: RuleId::IpAddress,
        description: "contains a dotted-quad IP address",
        weight: 3.0,
        predicate: |f| f.has_ip_address,
    },
    RiskRule {
        id: RuleId::AtSymbol,
        description: "contains '@' (credential trick)",
        weight: 3.0,
        predicate: |f| f.has_at_symbol,
    },
    RiskRule {
        id: RuleId::SuspiciousKeywords,
        description: "contains a lure keyword",
        weight: 2.0,
        predicate: |f| f.suspicious_keywords,
    },
    RiskRule {
        id: RuleId::SuspiciousTld,
        description: "ends with a high-risk TLD",
        weight: 2.0,
        predicate: |f| f.suspicious_tld,
    },
    // Structure anomalies
    RiskRule {
        id: RuleId::LongUrl,
        description: "URL longer than 30 characters",
        weight: 2.0,
        predicate: |f| f.url_length > LONG_URL_LENGTH,
    },
    RiskRule {
        id: RuleId::ManyHyphens,
        description: "more than 3 hyphens",
        weight: 2.0,
        predicate: |f| f.hyphen_count > MAX_HYPHENS,
    },
    RiskRule {
        id: RuleId::ManySlashes,
        description: "more than 5 slashes",
        weight: 2.0,
        predicate: |f| f.slash_count > MAX_SLASHES,
    },
    RiskRule {
        id: RuleId::ManyDigits,
        description: "more than 5 digits",
        weight: 1.0,
        predicate: |f| f.digit_count > MAX_DIGITS,
    },
    RiskRule {
        id: RuleId::HighEntropy,
        description: "character entropy above 4.0 bits",
        weight: 2.0,
        predicate: |f| f.entropy_score > HIGH_ENTROPY_BITS,
    },
    // Mild indicators
    RiskRule {
        id: RuleId::NoWwwPrefix,
        description: "host does not start with 'www'",
        weight: 0.5,
        predicate: |f| !f.starts_with_www,
    },
    RiskRule {
        id: RuleId::ManySuspiciousChars,
        description: "more than 3 of '%', '=', '?', '_'",
        weight: 1.0,
        predicate: |f| f.suspicious_chars > MAX_SUSPICIOUS_CHARS,
    },
];

/// Looks up a rule by id.
pub fn rule(id: RuleId) -> &'static RiskRule {
    &RULES[id.index()]
}

/// Sum of every default weight; the highest score the default table can produce.
pub fn max_default_score() -> f64 {
    RULES.iter().map(|r| r.weight).sum()
}
