//! Snapshot and comparison types for captured LLM answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped capture of an LLM answer for a brand/prompt/provider key.
///
/// Produced by the sampling pipeline; immutable once created. `hash` is the
/// SHA-256 lower-hex digest of `content`, left empty when the pipeline did
/// not precompute it, in which case the analyzer recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub hash: String,
    pub content: String,
    /// Mention context windows attached at sampling time, if any.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Sentiment label attached at sampling time, if any.
    #[serde(default)]
    pub sentiment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    /// Create a snapshot with no precomputed hash or pipeline annotations.
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            hash: String::new(),
            content: content.into(),
            mentions: Vec::new(),
            sentiment: None,
            timestamp,
        }
    }
}

/// An ordered pair of snapshots for the same logical key, oldest first.
///
/// Constructed by the caller from the two most recent captures; never
/// persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub previous: Snapshot,
    pub current: Snapshot,
}
