//! Analysis engine for Echowatch: content hashing, edit-distance
//! similarity, brand mention extraction, sentiment signals, drift scoring,
//! alert policy, and report rendering.
//!
//! Everything here is synchronous and pure; identical inputs always produce
//! identical outputs. Parallelism is the caller's choice, either directly or
//! via [`analyzer::DriftAnalyzer::analyze_many`].

pub mod alerts;
pub mod analyzer;
pub mod hashing;
pub mod mentions;
pub mod report;
pub mod scoring;
pub mod sentiment;
pub mod similarity;

pub use alerts::should_alert;
pub use analyzer::DriftAnalyzer;
pub use report::render_report;
pub use sentiment::LexiconSentiment;
