//! Extension seams implemented outside this crate.

pub mod sentiment;

pub use sentiment::{PolaritySignals, SentimentDetector};
