//! Rule-based risk scoring.
//!
//! The [`RiskScorer`] walks the rule table in order, adds the weight of every
//! rule that fires, and maps the total onto a [`Verdict`].
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::errors::PhishcheckError;
use crate::features::FeatureSet;
use crate::rules::{RuleId, RULES, RULE_COUNT};

/// Final classification of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Legit,
    Suspicious,
    Phishing,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Legit => "LEGIT",
            Verdict::Suspicious => "SUSPICIOUS",
            Verdict::Phishing => "PHISHING",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score boundaries between verdicts. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerdictThresholds {
    /// Lowest score classified as SUSPICIOUS (default: 4.0).
    pub suspicious: f64,
    /// Lowest score classified as PHISHING (default: 7.0).
    pub phishing: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            suspicious: 4.0,
            phishing: 7.0,
        }
    }
}

impl VerdictThresholds {
    /// Maps a score onto a verdict; the phishing bound is checked first.
    pub fn classify(&self, score: f64) -> Verdict {
        if score >= self.phishing {
            Verdict::Phishing
        } else if score >= self.suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Legit
        }
    }

    pub fn validate(&self) -> Result<(), PhishcheckError> {
        for (name, value) in [("suspicious", self.suspicious), ("phishing", self.phishing)] {
            if !value.is_finite() {
                return Err(PhishcheckError::InvalidThreshold { name, value });
            }
        }
        if self.suspicious > self.phishing {
            return Err(PhishcheckError::ThresholdOrder {
                suspicious: self.suspicious,
                phishing: self.phishing,
            });
        }
        Ok(())
    }
}

/// A rule that fired, with the weight it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleHit {
    pub rule: RuleId,
    pub weight: f64,
}

/// Verdict, score and the rules that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub score: f64,
    pub hits: Vec<RuleHit>,
}

/// Applies the weighted rule table to feature sets.
///
/// Holds no per-call state; one scorer can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScorer {
    weights: [f64; RULE_COUNT],
    thresholds: VerdictThresholds,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self {
            weights: RULES.map(|rule| rule.weight),
            thresholds: VerdictThresholds::default(),
        }
    }
}

impl RiskScorer {
    /// A scorer using the built-in weights and thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scorer from a validated configuration.
    ///
    /// Rules absent from `config.weights` keep their default weight.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, PhishcheckError> {
        config.validate()?;

        let mut scorer = Self {
            thresholds: config.thresholds,
            ..Self::default()
        };
        for (name, weight) in &config.weights {
            let id: RuleId = name.parse()?;
            scorer.weights[id.index()] = *weight;
        }

        debug!("Initialized RiskScorer with weights {:?} and thresholds {:?}", scorer.weights, scorer.thresholds);
        Ok(scorer)
    }

    /// The weight this scorer assigns to a rule.
    pub fn weight(&self, id: RuleId) -> f64 {
        self.weights[id.index()]
    }

    pub fn thresholds(&self) -> &VerdictThresholds {
        &self.thresholds
    }

    /// Scores the features and lists every rule that fired, in table order.
    pub fn assess(&self, features: &FeatureSet) -> Assessment {
        let hits: Vec<RuleHit> = RULES
            .iter()
            .filter(|rule| rule.matches(features))
            .map(|rule| RuleHit {
                rule: rule.id,
                weight: self.weight(rule.id),
            })
            .collect();

        let score = hits.iter().fold(0.0, |acc, hit| acc + hit.weight);
        let verdict = self.thresholds.classify(score);

        debug!("Scored {} -> {} ({} rules fired)", score, verdict, hits.len());
        Assessment { verdict, score, hits }
    }

    /// Verdict and score for the features.
    pub fn evaluate(&self, features: &FeatureSet) -> (Verdict, f64) {
        let assessment = self.assess(features);
        (assessment.verdict, assessment.score)
    }
}
