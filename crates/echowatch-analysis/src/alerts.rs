//! Alert policy: which results surface, and with what messages.

use echowatch_core::types::{DriftChanges, DriftResult, Significance};

use crate::scoring::REWRITE_THRESHOLD;

/// Removed-mention count above which a result always alerts.
pub const REMOVED_MENTION_ALERT_THRESHOLD: usize = 2;

/// Whether a computed result merits surfacing as an alert.
pub fn should_alert(result: &DriftResult) -> bool {
    result.significance == Significance::High
        || result.changes.sentiment_changed
        || result.changes.mentions_removed.len() > REMOVED_MENTION_ALERT_THRESHOLD
}

/// Build the human-readable alert strings: at most one per condition, in
/// fixed order. The rewrite flag fires on similarity alone, independent of
/// the positioning flag.
pub fn build_alerts(changes: &DriftChanges) -> Vec<String> {
    let mut alerts = Vec::new();
    if !changes.mentions_added.is_empty() {
        alerts.push(format!(
            "{} new mention(s) detected",
            changes.mentions_added.len()
        ));
    }
    if !changes.mentions_removed.is_empty() {
        alerts.push(format!(
            "{} mention(s) removed",
            changes.mentions_removed.len()
        ));
    }
    if changes.sentiment_changed {
        alerts.push("Sentiment change detected".to_string());
    }
    if changes.positioning_changed {
        alerts.push("Significant positioning change detected".to_string());
    }
    if changes.content_similarity < REWRITE_THRESHOLD {
        alerts.push("Major content rewrite detected".to_string());
    }
    alerts
}
