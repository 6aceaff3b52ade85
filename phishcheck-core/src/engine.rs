//! The URL checking engine.
//!
//! Couples feature extraction with a [`RiskScorer`] and packages the outcome
//! as a [`UrlReport`]. [`check_url`] is the entry point presentation layers
//! call; it always uses the built-in scoring.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::errors::PhishcheckError;
use crate::features::{extract_features, FeatureSet};
use crate::lexicon;
use crate::scoring::{RiskScorer, RuleHit, Verdict};

/// Everything a caller needs to render the result of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub verdict: Verdict,
    pub score: f64,
    pub features: FeatureSet,
    pub triggered_rules: Vec<RuleHit>,
}

/// Stateless checker; cheap to share between threads.
#[derive(Debug, Clone, Default)]
pub struct PhishingEngine {
    scorer: RiskScorer,
}

impl PhishingEngine {
    /// An engine using the built-in weights and thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose scorer is built from `config`.
    pub fn with_config(config: &ScoringConfig) -> Result<Self, PhishcheckError> {
        let scorer = RiskScorer::from_config(config)?;
        info!("Phishing engine initialized with custom scoring configuration.");
        Ok(Self { scorer })
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Extracts features from `url`, scores them and reports the outcome.
    pub fn check(&self, url: &str) -> UrlReport {
        let features = extract_features(url);
        let assessment = self.scorer.assess(&features);

        if features.suspicious_keywords {
            debug!("Matched keywords: {:?}", lexicon::matched_keywords(url));
        }
        debug!("URL checked: verdict={}, score={}", assessment.verdict, assessment.score);

        UrlReport {
            url: url.to_string(),
            verdict: assessment.verdict,
            score: assessment.score,
            features,
            triggered_rules: assessment.hits,
        }
    }
}

static DEFAULT_ENGINE: Lazy<PhishingEngine> = Lazy::new(PhishingEngine::new);

/// Checks a URL with the built-in scoring.
pub fn check_url(url: &str) -> UrlReport {
    DEFAULT_ENGINE.check(url)
}

/// Verdict, features and score for a URL, using the built-in scoring.
pub fn evaluate_phishing(url: &str) -> (Verdict, FeatureSet, f64) {
    let report = check_url(url);
    (report.verdict, report.features, report.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;
    use std::collections::BTreeMap;

    #[test]
    fn test_check_url_reports_hits_matching_score() {
        let report = check_url("http://user@bank-login.com/verify");
        let total: f64 = report.triggered_rules.iter().map(|h| h.weight).sum();
        assert_eq!(total, report.score);
        assert_eq!(report.url, "http://user@bank-login.com/verify");
    }

    #[test]
    fn test_evaluate_phishing_matches_check_url() {
        let url = "http://192.168.1.1/login";
        let (verdict, features, score) = evaluate_phishing(url);
        let report = check_url(url);
        assert_eq!(verdict, report.verdict);
        assert_eq!(features, report.features);
        assert_eq!(score, report.score);
    }

    #[test]
    fn test_custom_engine_does_not_affect_check_url() {
        let mut weights = BTreeMap::new();
        weights.insert("no_www_prefix".to_string(), 0.0);
        let config = ScoringConfig { weights, ..ScoringConfig::default() };
        let engine = PhishingEngine::with_config(&config).unwrap();

        assert_eq!(engine.check("").score, 0.0);
        assert_eq!(engine.scorer().weight(RuleId::NoWwwPrefix), 0.0);
        assert_eq!(check_url("").score, 0.5);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let json = serde_json::to_value(check_url("http://freebies.xyz")).unwrap();
        assert_eq!(json["verdict"], "SUSPICIOUS");
        assert_eq!(json["score"], 4.5);
        assert_eq!(json["features"]["suspicious_keywords"], 1);
        assert_eq!(json["triggered_rules"][0]["rule"], "suspicious_keywords");
    }
}
