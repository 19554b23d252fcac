//! Brand mention extraction and add/remove diffing.

use aho_corasick::AhoCorasick;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use echowatch_core::errors::AnalysisError;

/// Mentions present on one side of a comparison but not the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentionDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

/// Extract the context window around every occurrence of `brand` in `text`.
///
/// Matching is case-insensitive, non-overlapping, left to right. Each hit
/// yields the surrounding `window` characters on both sides, clamped to the
/// text bounds and trimmed of whitespace. Adjacent hits may yield
/// overlapping windows; they are kept as-is.
pub fn extract_mentions(
    text: &str,
    brand: &str,
    window: usize,
) -> Result<Vec<String>, AnalysisError> {
    if brand.trim().is_empty() {
        return Err(AnalysisError::InvalidInput {
            message: "brand name must not be blank".to_string(),
        });
    }

    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([brand])
        .map_err(|e| AnalysisError::InvalidInput {
            message: format!("brand name is not matchable: {e}"),
        })?;

    // Byte offset of every char, so windows count characters, not bytes.
    let char_starts: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();

    let mut mentions = Vec::new();
    for hit in matcher.find_iter(text) {
        // Match boundaries always fall on char boundaries.
        let hit_start = char_starts.partition_point(|&offset| offset < hit.start());
        let hit_end = char_starts.partition_point(|&offset| offset < hit.end());

        let from = hit_start.saturating_sub(window);
        let to = (hit_end + window).min(char_starts.len());
        let from_byte = char_starts[from];
        let to_byte = if to == char_starts.len() {
            text.len()
        } else {
            char_starts[to]
        };
        mentions.push(text[from_byte..to_byte].trim().to_string());
    }
    Ok(mentions)
}

/// Set-difference between two mention lists, order of first appearance
/// preserved on each side.
///
/// With `normalize` on, windows are compared case-folded with whitespace
/// collapsed, so formatting reflow alone does not register as drift. The
/// returned strings are always the original windows.
pub fn diff_mentions(previous: &[String], current: &[String], normalize: bool) -> MentionDiff {
    MentionDiff {
        added: one_sided_difference(current, previous, normalize),
        removed: one_sided_difference(previous, current, normalize),
    }
}

/// Mentions of `side` whose identity key does not appear in `other`.
fn one_sided_difference(side: &[String], other: &[String], normalize: bool) -> Vec<String> {
    let other_keys: FxHashSet<String> = other
        .iter()
        .map(|mention| identity_key(mention, normalize))
        .collect();

    let mut seen = FxHashSet::default();
    let mut difference = Vec::new();
    for mention in side {
        let key = identity_key(mention, normalize);
        if !other_keys.contains(&key) && seen.insert(key) {
            difference.push(mention.clone());
        }
    }
    difference
}

/// Identity key deciding whether two windows are "the same mention".
fn identity_key(window: &str, normalize: bool) -> String {
    if normalize {
        window
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    } else {
        window.to_string()
    }
}
