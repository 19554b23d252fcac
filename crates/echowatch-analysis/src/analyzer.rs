//! Drift analysis orchestration.

use rayon::prelude::*;
use tracing::{debug, warn};

use echowatch_core::config::EchowatchConfig;
use echowatch_core::errors::AnalysisError;
use echowatch_core::traits::SentimentDetector;
use echowatch_core::types::{Comparison, DriftChanges, DriftResult, Snapshot};

use crate::alerts::build_alerts;
use crate::hashing::content_hash;
use crate::mentions::{diff_mentions, extract_mentions};
use crate::scoring::{drift_score, significance, DRIFT_THRESHOLD, POSITIONING_THRESHOLD};
use crate::sentiment::LexiconSentiment;
use crate::similarity::similarity;

/// Compares snapshot pairs and produces drift results.
///
/// Holds configuration and a sentiment detector, no mutable state; one
/// analyzer may serve arbitrarily many comparisons concurrently.
pub struct DriftAnalyzer {
    config: EchowatchConfig,
    sentiment: Box<dyn SentimentDetector>,
}

impl DriftAnalyzer {
    /// Analyzer with the built-in lexicon sentiment detector.
    pub fn new(config: EchowatchConfig) -> Self {
        Self::with_sentiment(config, Box::new(LexiconSentiment::new()))
    }

    /// Analyzer with an injected sentiment detector.
    pub fn with_sentiment(config: EchowatchConfig, sentiment: Box<dyn SentimentDetector>) -> Self {
        Self { config, sentiment }
    }

    /// Compare two snapshots of an LLM answer about `brand_name`.
    ///
    /// Fails fast on a blank brand name and on content beyond the configured
    /// length ceiling, before any quadratic work runs. Everything else
    /// (empty content, identical content, brand absent from either text) is
    /// a valid input with a well-defined result.
    pub fn analyze(
        &self,
        previous: &Snapshot,
        current: &Snapshot,
        brand_name: &str,
    ) -> Result<DriftResult, AnalysisError> {
        if brand_name.trim().is_empty() {
            warn!("rejecting comparison with blank brand name");
            return Err(AnalysisError::InvalidInput {
                message: "brand name must not be blank".to_string(),
            });
        }
        let limit = self.config.limits.effective_max_content_bytes();
        for content in [&previous.content, &current.content] {
            if content.len() > limit {
                warn!(
                    actual = content.len(),
                    limit, "rejecting oversized snapshot content"
                );
                return Err(AnalysisError::ResourceLimitExceeded {
                    actual: content.len(),
                    limit,
                });
            }
        }

        if effective_hash(previous) == effective_hash(current) {
            debug!(brand = brand_name, "content hash unchanged, short-circuiting");
            return Ok(DriftResult::unchanged());
        }

        let content_similarity = similarity(&previous.content, &current.content);

        let window = self.config.mentions.effective_context_window();
        let previous_mentions = extract_mentions(&previous.content, brand_name, window)?;
        let current_mentions = extract_mentions(&current.content, brand_name, window)?;
        let diff = diff_mentions(
            &previous_mentions,
            &current_mentions,
            self.config.mentions.effective_normalize_keys(),
        );

        let sentiment_changed = self
            .sentiment
            .flipped(&previous.content, &current.content);

        let changes = DriftChanges {
            mentions_added: diff.added,
            mentions_removed: diff.removed,
            sentiment_changed,
            positioning_changed: content_similarity < POSITIONING_THRESHOLD,
            content_similarity,
        };
        let score = drift_score(&changes, &self.config.scoring);
        let alerts = build_alerts(&changes);
        debug!(
            brand = brand_name,
            score,
            similarity = content_similarity,
            added = changes.mentions_added.len(),
            removed = changes.mentions_removed.len(),
            "drift computed"
        );

        Ok(DriftResult {
            has_drift: score > DRIFT_THRESHOLD,
            drift_score: score,
            significance: significance(score),
            changes,
            alerts,
        })
    }

    /// Convenience wrapper over a [`Comparison`] pair.
    pub fn analyze_comparison(
        &self,
        comparison: &Comparison,
        brand_name: &str,
    ) -> Result<DriftResult, AnalysisError> {
        self.analyze(&comparison.previous, &comparison.current, brand_name)
    }

    /// Analyze many comparisons for one brand in parallel.
    ///
    /// Results keep the input order; each comparison fails or succeeds
    /// independently.
    pub fn analyze_many(
        &self,
        comparisons: &[Comparison],
        brand_name: &str,
    ) -> Vec<Result<DriftResult, AnalysisError>> {
        comparisons
            .par_iter()
            .map(|comparison| self.analyze_comparison(comparison, brand_name))
            .collect()
    }
}

/// The stored hash when present, otherwise recomputed from content.
fn effective_hash(snapshot: &Snapshot) -> String {
    if snapshot.hash.is_empty() {
        content_hash(&snapshot.content)
    } else {
        snapshot.hash.clone()
    }
}
