//! Configuration management for `phishcheck-core`.
//!
//! A [`ScoringConfig`] overrides rule weights (keyed by rule id) and the
//! verdict thresholds. Rules it does not mention keep their built-in weight,
//! so an empty configuration reproduces the default scoring exactly.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::PhishcheckError;
use crate::rules::RuleId;
use crate::scoring::VerdictThresholds;

/// Represents the YAML scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight overrides keyed by rule id (e.g. `at_symbol: 3.0`).
    pub weights: BTreeMap<String, f64>,
    /// Score boundaries between verdicts.
    pub thresholds: VerdictThresholds,
}

impl ScoringConfig {
    /// Loads a scoring configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(PhishcheckError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        info!("Loaded {} weight overrides from file {}.", config.weights.len(), path.display());
        Ok(config)
    }

    /// Loads the built-in scoring configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scoring configuration from embedded string...");
        let default_yaml = include_str!("../config/default_scoring.yaml");
        let config = Self::from_yaml(default_yaml).context("Failed to parse default scoring configuration")?;

        debug!("Loaded {} default weights.", config.weights.len());
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, PhishcheckError> {
        let config: ScoringConfig =
            serde_yml::from_str(text).map_err(|e| PhishcheckError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks rule ids, weights and thresholds.
    pub fn validate(&self) -> Result<(), PhishcheckError> {
        for (name, weight) in &self.weights {
            name.parse::<RuleId>()?;
            if !weight.is_finite() || *weight < 0.0 {
                return Err(PhishcheckError::InvalidWeight {
                    rule: name.clone(),
                    weight: *weight,
                });
            }
        }
        self.thresholds.validate()
    }
}
