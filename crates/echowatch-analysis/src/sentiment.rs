//! Lexicon-based sentiment signals.

use aho_corasick::AhoCorasick;

use echowatch_core::traits::{PolaritySignals, SentimentDetector};

/// Positive-polarity tokens, matched as case-insensitive substrings over the
/// whole text (not just mention windows).
const POSITIVE_WORDS: [&str; 10] = [
    "good",
    "great",
    "excellent",
    "love",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
];

/// Negative-polarity tokens.
const NEGATIVE_WORDS: [&str; 10] = [
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "sad",
    "angry",
    "disappointed",
    "poor",
];

/// Lexicon-based [`SentimentDetector`].
///
/// Detects coexistence of opposite-polarity tokens between two texts; a
/// heuristic, not a classifier. Swap in a statistical model through the
/// trait when false positives become a problem.
pub struct LexiconSentiment {
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconSentiment {
    pub fn new() -> Self {
        Self {
            positive: build_matcher(&POSITIVE_WORDS),
            negative: build_matcher(&NEGATIVE_WORDS),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentDetector for LexiconSentiment {
    fn signals(&self, text: &str) -> PolaritySignals {
        PolaritySignals {
            has_positive: self.positive.is_match(text),
            has_negative: self.negative.is_match(text),
        }
    }
}

fn build_matcher(words: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(words)
        .expect("fixed lexicon compiles")
}
