//! Tunable parameters, loaded from the data/ directory.
//!
//! Every struct here has a `Default` that reproduces the dashboard's
//! built-in behaviour. A data directory only needs to carry the files it
//! wants to override.

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Matching ───────────────────────────────────────────────────────

/// Points awarded per factor. The four factor weights must sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill:      f64,
    /// Availability points for an `available` employee.
    pub available:  f64,
    /// Availability points for a `busy` employee.
    pub busy:       f64,
    pub workload:   f64,
    pub experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill:      40.0,
            available:  25.0,
            busy:       10.0,
            workload:   20.0,
            experience: 15.0,
        }
    }
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.skill + self.available + self.workload + self.experience
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JustificationThresholds {
    /// "Low workload" when workload is strictly below this.
    pub low_workload:      u32,
    /// "Senior experience" at or above this many years.
    pub senior_experience: u32,
    /// "High productivity" at or above this.
    pub high_productivity: u32,
}

impl Default for JustificationThresholds {
    fn default() -> Self {
        Self {
            low_workload:      50,
            senior_experience: 5,
            high_productivity: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub weights:              MatchWeights,
    /// Experience contribution saturates at this many years.
    #[serde(default = "default_experience_cap")]
    pub experience_cap_years: u32,
    #[serde(default)]
    pub thresholds:           JustificationThresholds,
}

fn default_experience_cap() -> u32 {
    10
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights:              MatchWeights::default(),
            experience_cap_years: default_experience_cap(),
            thresholds:           JustificationThresholds::default(),
        }
    }
}

impl MatchingConfig {
    /// Any config accepted here keeps every score inside 0..=100.
    pub fn validate(&self) -> DeskResult<()> {
        let w = &self.weights;
        let all = [w.skill, w.available, w.busy, w.workload, w.experience];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(DeskError::InvalidConfig {
                reason: "weights must be finite and non-negative".into(),
            });
        }
        if (w.total() - 100.0).abs() > 1e-9 {
            return Err(DeskError::InvalidConfig {
                reason: format!("factor weights sum to {}, expected 100", w.total()),
            });
        }
        if w.busy > w.available {
            return Err(DeskError::InvalidConfig {
                reason: format!("busy weight {} exceeds available weight {}", w.busy, w.available),
            });
        }
        if self.experience_cap_years == 0 {
            return Err(DeskError::InvalidConfig {
                reason: "experience_cap_years must be positive".into(),
            });
        }
        Ok(())
    }
}

// ── Desk ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub matching:              MatchingConfig,
    /// How many recommendations a task detail view asks for.
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count:  usize,
    /// How many employees the dashboard lists as top performers.
    #[serde(default = "default_top_performer_count")]
    pub top_performer_count:   usize,
}

fn default_recommendation_count() -> usize {
    crate::matching::DEFAULT_RECOMMENDATIONS
}

fn default_top_performer_count() -> usize {
    crate::stats::TOP_PERFORMER_COUNT
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            matching:             MatchingConfig::default(),
            recommendation_count: default_recommendation_count(),
            top_performer_count:  default_top_performer_count(),
        }
    }
}

impl DeskConfig {
    /// Load from the data/ directory.
    /// A missing `desk_config.json` falls back to the built-in defaults;
    /// a present but malformed or invalid one is an error.
    /// In tests, use DeskConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = Path::new(data_dir).join("desk_config.json");
        if !path.exists() {
            log::info!("{} not found, using default desk config", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: DeskConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        config.matching.validate()?;

        log::debug!("Loaded desk config from {}", path.display());
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matching_config_is_valid() {
        let cfg = MatchingConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weights.total(), 100.0);
        assert_eq!(cfg.experience_cap_years, 10);
    }

    #[test]
    fn weights_not_summing_to_100_are_rejected() {
        let mut cfg = MatchingConfig::default();
        cfg.weights.skill = 50.0;
        assert!(matches!(cfg.validate(), Err(DeskError::InvalidConfig { .. })));
    }

    #[test]
    fn busy_above_available_is_rejected() {
        let mut cfg = MatchingConfig::default();
        cfg.weights.busy = 30.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: DeskConfig =
            serde_json::from_str(r#"{ "recommendation_count": 5 }"#).unwrap();
        assert_eq!(cfg.recommendation_count, 5);
        assert_eq!(cfg.matching, MatchingConfig::default());
        assert_eq!(cfg.top_performer_count, 5);
    }

    #[test]
    fn missing_data_dir_loads_defaults() {
        let cfg = DeskConfig::load("/nonexistent/teamdesk/data").unwrap();
        assert_eq!(cfg, DeskConfig::default());
    }
}
