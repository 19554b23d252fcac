//! Configuration system for Echowatch.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod echowatch_config;
pub mod limits_config;
pub mod mention_config;
pub mod scoring_config;

pub use echowatch_config::EchowatchConfig;
pub use limits_config::LimitsConfig;
pub use mention_config::MentionConfig;
pub use scoring_config::ScoringConfig;
