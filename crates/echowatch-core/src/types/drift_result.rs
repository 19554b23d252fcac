//! Drift analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse significance tier derived from the drift score, driving alerting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Low,
    Medium,
    High,
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Significance::Low => "low",
            Significance::Medium => "medium",
            Significance::High => "high",
        };
        f.write_str(label)
    }
}

/// Per-dimension change breakdown between two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftChanges {
    /// Context windows present in current but not previous,
    /// order of first appearance.
    pub mentions_added: Vec<String>,
    /// Context windows present in previous but not current,
    /// order of first appearance.
    pub mentions_removed: Vec<String>,
    pub sentiment_changed: bool,
    /// Content similarity fell below the positioning threshold.
    pub positioning_changed: bool,
    /// Edit-distance similarity percentage, 0-100.
    pub content_similarity: u8,
}

impl DriftChanges {
    /// The breakdown for byte-identical content.
    pub fn none() -> Self {
        Self {
            mentions_added: Vec::new(),
            mentions_removed: Vec::new(),
            sentiment_changed: false,
            positioning_changed: false,
            content_similarity: 100,
        }
    }
}

/// Aggregate result of comparing two snapshots of an LLM answer.
///
/// Computed, never persisted by the core; the alerting and UI layers
/// consume it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftResult {
    pub has_drift: bool,
    /// 0-100, higher means more change between the snapshots.
    pub drift_score: u8,
    pub changes: DriftChanges,
    pub significance: Significance,
    /// Human-readable flags, in policy order.
    pub alerts: Vec<String>,
}

impl DriftResult {
    /// The result for byte-identical content: nothing changed.
    pub fn unchanged() -> Self {
        Self {
            has_drift: false,
            drift_score: 0,
            changes: DriftChanges::none(),
            significance: Significance::Low,
            alerts: Vec::new(),
        }
    }
}
