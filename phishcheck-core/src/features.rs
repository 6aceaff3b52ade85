//! Lexical feature extraction.
//!
//! [`extract_features`] turns a raw URL string into a [`FeatureSet`]: a fixed
//! collection of counts, flags and the character entropy of the string. The
//! URL is never validated; anything the authority parser cannot make sense of
//! simply yields an empty host.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use phishcheck_entropy::entropy::calculate_char_entropy;

use crate::host::host_component;
use crate::lexicon;

/// Names of every extracted feature, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    UrlLength,
    SlashCount,
    DotCount,
    HyphenCount,
    StartsWithWww,
    HasIpAddress,
    HasAtSymbol,
    HasPort,
    DigitCount,
    SuspiciousChars,
    EntropyScore,
    SuspiciousKeywords,
    SuspiciousTld,
}

impl FeatureName {
    /// All feature names in canonical order.
    pub const ALL: [FeatureName; 13] = [
        FeatureName::UrlLength,
        FeatureName::SlashCount,
        FeatureName::DotCount,
        FeatureName::HyphenCount,
        FeatureName::StartsWithWww,
        FeatureName::HasIpAddress,
        FeatureName::HasAtSymbol,
        FeatureName::HasPort,
        FeatureName::DigitCount,
        FeatureName::SuspiciousChars,
        FeatureName::EntropyScore,
        FeatureName::SuspiciousKeywords,
        FeatureName::SuspiciousTld,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::UrlLength => "url_length",
            FeatureName::SlashCount => "slash_count",
            FeatureName::DotCount => "dot_count",
            FeatureName::HyphenCount => "hyphen_count",
            FeatureName::StartsWithWww => "starts_with_www",
            FeatureName::HasIpAddress => "has_ip_address",
            FeatureName::HasAtSymbol => "has_at_symbol",
            FeatureName::HasPort => "has_port",
            FeatureName::DigitCount => "digit_count",
            FeatureName::SuspiciousChars => "suspicious_chars",
            FeatureName::EntropyScore => "entropy_score",
            FeatureName::SuspiciousKeywords => "suspicious_keywords",
            FeatureName::SuspiciousTld => "suspicious_tld",
        }
    }

    /// True for features encoded as 0/1 flags.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            FeatureName::StartsWithWww
                | FeatureName::HasIpAddress
                | FeatureName::HasAtSymbol
                | FeatureName::HasPort
                | FeatureName::SuspiciousKeywords
                | FeatureName::SuspiciousTld
        )
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown feature '{}'", s))
    }
}

/// The signals extracted from one URL.
///
/// Built fresh by [`extract_features`] for every call. Lengths and counts are
/// in characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    pub url_length: usize,
    pub slash_count: usize,
    pub dot_count: usize,
    pub hyphen_count: usize,
    pub starts_with_www: bool,
    pub has_ip_address: bool,
    pub has_at_symbol: bool,
    pub has_port: bool,
    pub digit_count: usize,
    pub suspicious_chars: usize,
    pub entropy_score: f64,
    pub suspicious_keywords: bool,
    pub suspicious_tld: bool,
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl FeatureSet {
    /// Numeric value of a feature; flags read as `0.0` or `1.0`.
    pub fn get(&self, name: FeatureName) -> f64 {
        match name {
            FeatureName::UrlLength => self.url_length as f64,
            FeatureName::SlashCount => self.slash_count as f64,
            FeatureName::DotCount => self.dot_count as f64,
            FeatureName::HyphenCount => self.hyphen_count as f64,
            FeatureName::StartsWithWww => flag(self.starts_with_www),
            FeatureName::HasIpAddress => flag(self.has_ip_address),
            FeatureName::HasAtSymbol => flag(self.has_at_symbol),
            FeatureName::HasPort => flag(self.has_port),
            FeatureName::DigitCount => self.digit_count as f64,
            FeatureName::SuspiciousChars => self.suspicious_chars as f64,
            FeatureName::EntropyScore => self.entropy_score,
            FeatureName::SuspiciousKeywords => flag(self.suspicious_keywords),
            FeatureName::SuspiciousTld => flag(self.suspicious_tld),
        }
    }

    /// Iterates `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FeatureName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

// Flags and counts are emitted as integers, entropy as a real.
impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FeatureName::ALL.len()))?;
        for name in FeatureName::ALL {
            if name == FeatureName::EntropyScore {
                map.serialize_entry(name.as_str(), &self.entropy_score)?;
            } else {
                map.serialize_entry(name.as_str(), &(self.get(name) as u64))?;
            }
        }
        map.end()
    }
}

/// Derives the [`FeatureSet`] for a URL string.
///
/// Never fails. The empty string produces all-zero counts, all-false flags and
/// an entropy of `0.0`.
pub fn extract_features(url: &str) -> FeatureSet {
    let host = host_component(url);

    let mut features = FeatureSet {
        starts_with_www: host.starts_with("www"),
        has_port: host.contains(':'),
        has_ip_address: lexicon::has_dotted_quad(url),
        has_at_symbol: url.contains('@'),
        digit_count: lexicon::count_decimal_digits(url),
        entropy_score: calculate_char_entropy(url),
        suspicious_keywords: lexicon::has_suspicious_keyword(url),
        suspicious_tld: lexicon::has_suspicious_tld(url),
        ..FeatureSet::default()
    };

    for c in url.chars() {
        features.url_length += 1;
        match c {
            '/' => features.slash_count += 1,
            '.' => features.dot_count += 1,
            '-' => features.hyphen_count += 1,
            c if lexicon::is_suspicious_char(c) => features.suspicious_chars += 1,
            _ => {}
        }
    }

    debug!("Extracted features for host '{}': {:?}", host, features);
    features
}
