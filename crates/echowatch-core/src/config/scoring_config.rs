//! Drift score weighting policy.

use serde::{Deserialize, Serialize};

/// Weights combined into the aggregate drift score.
///
/// These are policy constants, not derived quantities.
// TODO: calibrate against labeled drift samples once the sampling pipeline
// has accumulated enough history.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight on (100 - content similarity). Default: 0.4.
    pub similarity_weight: Option<f64>,
    /// Points per added or removed mention. Default: 5.0.
    pub mention_weight: Option<f64>,
    /// Points for a sentiment flip. Default: 20.0.
    pub sentiment_weight: Option<f64>,
    /// Points for a positioning change. Default: 15.0.
    pub positioning_weight: Option<f64>,
}

impl ScoringConfig {
    /// Returns the effective similarity weight, defaulting to 0.4.
    pub fn effective_similarity_weight(&self) -> f64 {
        self.similarity_weight.unwrap_or(0.4)
    }

    /// Returns the effective per-mention weight, defaulting to 5.0.
    pub fn effective_mention_weight(&self) -> f64 {
        self.mention_weight.unwrap_or(5.0)
    }

    /// Returns the effective sentiment weight, defaulting to 20.0.
    pub fn effective_sentiment_weight(&self) -> f64 {
        self.sentiment_weight.unwrap_or(20.0)
    }

    /// Returns the effective positioning weight, defaulting to 15.0.
    pub fn effective_positioning_weight(&self) -> f64 {
        self.positioning_weight.unwrap_or(15.0)
    }
}
