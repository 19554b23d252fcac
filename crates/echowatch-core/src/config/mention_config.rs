//! Mention extraction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the mention extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MentionConfig {
    /// Context window radius in characters around each brand hit.
    /// Default: 50.
    pub context_window: Option<usize>,
    /// Case-fold and collapse whitespace in windows before using them as
    /// identity keys for add/remove diffing, so formatting reflow alone is
    /// not reported as drift. Default: true.
    pub normalize_keys: Option<bool>,
}

impl MentionConfig {
    pub const DEFAULT_CONTEXT_WINDOW: usize = 50;

    /// Returns the effective window radius, defaulting to 50 characters.
    pub fn effective_context_window(&self) -> usize {
        self.context_window.unwrap_or(Self::DEFAULT_CONTEXT_WINDOW)
    }

    /// Returns whether identity keys are normalized, defaulting to true.
    pub fn effective_normalize_keys(&self) -> bool {
        self.normalize_keys.unwrap_or(true)
    }
}
