//! Core types, traits, errors, config, and telemetry for the Echowatch
//! drift engine.
//!
//! No algorithmic code lives here: the analysis crate depends on this one,
//! never the other way around.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use config::EchowatchConfig;
pub use errors::{AnalysisError, ConfigError, EchowatchErrorCode};
pub use traits::{PolaritySignals, SentimentDetector};
pub use types::{Comparison, DriftChanges, DriftResult, Significance, Snapshot};
