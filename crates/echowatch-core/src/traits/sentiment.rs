//! SentimentDetector trait, the classifier seam.
//!
//! The analysis crate ships a lexicon-based implementation. A statistical
//! classifier can implement this trait and be injected into the analyzer
//! without touching the scorer.

/// Polarity tokens found in one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolaritySignals {
    pub has_positive: bool,
    pub has_negative: bool,
}

/// Detector of polarity signals in an answer text.
pub trait SentimentDetector: Send + Sync {
    /// Scan a whole text for polarity tokens.
    fn signals(&self, text: &str) -> PolaritySignals;

    /// Whether polarity flipped between two texts: a positive signal on one
    /// side coexisting with a negative signal on the other.
    ///
    /// Detects coexistence of opposite-polarity tokens, not the sentiment
    /// direction of the brand-specific clause.
    fn flipped(&self, previous: &str, current: &str) -> bool {
        let prev = self.signals(previous);
        let curr = self.signals(current);
        (prev.has_positive && curr.has_negative) || (prev.has_negative && curr.has_positive)
    }
}
