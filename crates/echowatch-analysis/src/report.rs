//! Plain-text rendering of a drift result.

use std::fmt::Write;

use echowatch_core::types::DriftResult;

/// Mention windows longer than this are truncated in reports.
const MENTION_DISPLAY_CHARS: usize = 100;

/// Render a drift result as a deterministic multi-line summary.
///
/// Fixed order: header, new mentions, removed mentions, sentiment line if
/// changed, positioning line if changed, similarity percentage, alerts.
/// Pure rendering, no I/O.
pub fn render_report(result: &DriftResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Drift score: {}/100 ({} significance)",
        result.drift_score, result.significance
    );

    if !result.changes.mentions_added.is_empty() {
        let _ = writeln!(out, "New mentions:");
        for mention in &result.changes.mentions_added {
            let _ = writeln!(out, "  + {}", truncate_mention(mention));
        }
    }
    if !result.changes.mentions_removed.is_empty() {
        let _ = writeln!(out, "Removed mentions:");
        for mention in &result.changes.mentions_removed {
            let _ = writeln!(out, "  - {}", truncate_mention(mention));
        }
    }
    if result.changes.sentiment_changed {
        let _ = writeln!(out, "Sentiment changed");
    }
    if result.changes.positioning_changed {
        let _ = writeln!(out, "Positioning changed");
    }
    let _ = writeln!(
        out,
        "Content similarity: {}%",
        result.changes.content_similarity
    );
    if !result.alerts.is_empty() {
        let _ = writeln!(out, "Alerts:");
        for alert in &result.alerts {
            let _ = writeln!(out, "  ! {alert}");
        }
    }

    out
}

fn truncate_mention(mention: &str) -> String {
    if mention.chars().count() <= MENTION_DISPLAY_CHARS {
        mention.to_string()
    } else {
        let cut: String = mention.chars().take(MENTION_DISPLAY_CHARS).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echowatch_core::types::{DriftChanges, Significance};

    fn sample_result() -> DriftResult {
        DriftResult {
            has_drift: true,
            drift_score: 41,
            changes: DriftChanges {
                mentions_added: vec!["Acme gains ground".to_string()],
                mentions_removed: vec!["Acme was the default pick".to_string()],
                sentiment_changed: true,
                positioning_changed: false,
                content_similarity: 72,
            },
            significance: Significance::Medium,
            alerts: vec!["Sentiment change detected".to_string()],
        }
    }

    #[test]
    fn report_sections_appear_in_order() {
        let report = render_report(&sample_result());
        let header = report.find("Drift score: 41/100 (medium significance)").unwrap();
        let added = report.find("New mentions:").unwrap();
        let removed = report.find("Removed mentions:").unwrap();
        let sentiment = report.find("Sentiment changed").unwrap();
        let similarity = report.find("Content similarity: 72%").unwrap();
        let alerts = report.find("Alerts:").unwrap();
        assert!(header < added && added < removed && removed < sentiment);
        assert!(sentiment < similarity && similarity < alerts);
    }

    #[test]
    fn conditional_lines_are_omitted() {
        let mut result = sample_result();
        result.changes.sentiment_changed = false;
        result.changes.mentions_added.clear();
        result.alerts.clear();
        let report = render_report(&result);
        assert!(!report.contains("Sentiment changed"));
        assert!(!report.contains("New mentions:"));
        assert!(!report.contains("Alerts:"));
        assert!(report.contains("Removed mentions:"));
    }

    #[test]
    fn positioning_line_renders_when_flagged() {
        let mut result = sample_result();
        result.changes.positioning_changed = true;
        assert!(render_report(&result).contains("Positioning changed"));
    }

    #[test]
    fn long_mentions_are_truncated_with_ellipsis() {
        let mut result = sample_result();
        result.changes.mentions_added = vec!["m".repeat(150)];
        let report = render_report(&result);
        let expected = format!("  + {}...", "m".repeat(100));
        assert!(report.contains(&expected));
        assert!(!report.contains(&"m".repeat(101)));
    }

    #[test]
    fn rendering_is_deterministic() {
        let result = sample_result();
        assert_eq!(render_report(&result), render_report(&result));
    }
}
