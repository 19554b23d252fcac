//! Drift score aggregation and significance tiers.

use echowatch_core::config::ScoringConfig;
use echowatch_core::types::{DriftChanges, Significance};

/// Similarity below this counts as a positioning change.
pub const POSITIONING_THRESHOLD: u8 = 70;
/// Similarity below this counts as a major content rewrite.
pub const REWRITE_THRESHOLD: u8 = 50;
/// Scores above this count as drift.
pub const DRIFT_THRESHOLD: u8 = 10;
/// Score floor for the high significance tier.
pub const HIGH_THRESHOLD: u8 = 60;
/// Score floor for the medium significance tier.
pub const MEDIUM_THRESHOLD: u8 = 30;

/// Aggregate the per-dimension changes into a 0-100 drift score.
pub fn drift_score(changes: &DriftChanges, weights: &ScoringConfig) -> u8 {
    let mention_churn = changes.mentions_added.len() + changes.mentions_removed.len();
    let raw = weights.effective_similarity_weight()
        * f64::from(100 - changes.content_similarity)
        + weights.effective_mention_weight() * mention_churn as f64
        + weights.effective_sentiment_weight() * f64::from(u8::from(changes.sentiment_changed))
        + weights.effective_positioning_weight()
            * f64::from(u8::from(changes.positioning_changed));
    raw.round().clamp(0.0, 100.0) as u8
}

/// Map a drift score onto its significance tier.
pub fn significance(score: u8) -> Significance {
    if score >= HIGH_THRESHOLD {
        Significance::High
    } else if score >= MEDIUM_THRESHOLD {
        Significance::Medium
    } else {
        Significance::Low
    }
}
