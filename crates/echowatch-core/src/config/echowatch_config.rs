//! Top-level Echowatch configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LimitsConfig, MentionConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ECHOWATCH_*`)
/// 2. Project config (`echowatch.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EchowatchConfig {
    pub limits: LimitsConfig,
    pub mentions: MentionConfig,
    pub scoring: ScoringConfig,
}

impl EchowatchConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// A missing project config is not an error; the layer is skipped.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("echowatch.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EchowatchConfig) -> Result<(), ConfigError> {
        if let Some(max_content_bytes) = config.limits.max_content_bytes {
            if max_content_bytes == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "limits.max_content_bytes".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(context_window) = config.mentions.context_window {
            if context_window == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "mentions.context_window".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for (field, value) in [
            ("scoring.similarity_weight", config.scoring.similarity_weight),
            ("scoring.mention_weight", config.scoring.mention_weight),
            ("scoring.sentiment_weight", config.scoring.sentiment_weight),
            (
                "scoring.positioning_weight",
                config.scoring.positioning_weight,
            ),
        ] {
            if let Some(weight) = value {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite non-negative number".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut EchowatchConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: EchowatchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, file_config);
        Ok(())
    }

    /// Overlay every field set in `layer` onto `base`.
    fn merge(base: &mut EchowatchConfig, layer: EchowatchConfig) {
        if layer.limits.max_content_bytes.is_some() {
            base.limits.max_content_bytes = layer.limits.max_content_bytes;
        }
        if layer.mentions.context_window.is_some() {
            base.mentions.context_window = layer.mentions.context_window;
        }
        if layer.mentions.normalize_keys.is_some() {
            base.mentions.normalize_keys = layer.mentions.normalize_keys;
        }
        if layer.scoring.similarity_weight.is_some() {
            base.scoring.similarity_weight = layer.scoring.similarity_weight;
        }
        if layer.scoring.mention_weight.is_some() {
            base.scoring.mention_weight = layer.scoring.mention_weight;
        }
        if layer.scoring.sentiment_weight.is_some() {
            base.scoring.sentiment_weight = layer.scoring.sentiment_weight;
        }
        if layer.scoring.positioning_weight.is_some() {
            base.scoring.positioning_weight = layer.scoring.positioning_weight;
        }
    }

    /// Apply `ECHOWATCH_*` environment overrides.
    /// Unparsable values are ignored with a warning.
    fn apply_env_overrides(config: &mut EchowatchConfig) {
        if let Some(value) = env_parse::<usize>("ECHOWATCH_MAX_CONTENT_BYTES") {
            config.limits.max_content_bytes = Some(value);
        }
        if let Some(value) = env_parse::<usize>("ECHOWATCH_CONTEXT_WINDOW") {
            config.mentions.context_window = Some(value);
        }
        if let Some(value) = env_parse::<bool>("ECHOWATCH_NORMALIZE_KEYS") {
            config.mentions.normalize_keys = Some(value);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
