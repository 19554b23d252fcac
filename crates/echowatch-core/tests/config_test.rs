//! Tests for the Echowatch configuration system.

use std::sync::Mutex;

use echowatch_core::config::EchowatchConfig;
use echowatch_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all ECHOWATCH_ env vars to prevent cross-test contamination.
fn clear_echowatch_env_vars() {
    for key in [
        "ECHOWATCH_MAX_CONTENT_BYTES",
        "ECHOWATCH_CONTEXT_WINDOW",
        "ECHOWATCH_NORMALIZE_KEYS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_when_no_project_config_exists() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_echowatch_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = EchowatchConfig::load(dir.path()).unwrap();

    assert_eq!(config.limits.effective_max_content_bytes(), 1024 * 1024);
    assert_eq!(config.mentions.effective_context_window(), 50);
    assert!(config.mentions.effective_normalize_keys());
    assert_eq!(config.scoring.effective_similarity_weight(), 0.4);
    assert_eq!(config.scoring.effective_mention_weight(), 5.0);
    assert_eq!(config.scoring.effective_sentiment_weight(), 20.0);
    assert_eq!(config.scoring.effective_positioning_weight(), 15.0);
}

#[test]
fn project_config_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_echowatch_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("echowatch.toml"),
        r#"
[limits]
max_content_bytes = 4096

[mentions]
context_window = 30

[scoring]
sentiment_weight = 25.0
"#,
    )
    .unwrap();

    let config = EchowatchConfig::load(dir.path()).unwrap();

    assert_eq!(config.limits.effective_max_content_bytes(), 4096);
    assert_eq!(config.mentions.effective_context_window(), 30);
    assert_eq!(config.scoring.effective_sentiment_weight(), 25.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.scoring.effective_mention_weight(), 5.0);
}

#[test]
fn env_overrides_project_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_echowatch_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("echowatch.toml"),
        "[mentions]\ncontext_window = 30\n",
    )
    .unwrap();
    std::env::set_var("ECHOWATCH_CONTEXT_WINDOW", "80");

    let config = EchowatchConfig::load(dir.path()).unwrap();
    assert_eq!(config.mentions.effective_context_window(), 80);

    clear_echowatch_env_vars();
}

#[test]
fn unparsable_env_override_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_echowatch_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("ECHOWATCH_CONTEXT_WINDOW", "not-a-number");

    let config = EchowatchConfig::load(dir.path()).unwrap();
    assert_eq!(config.mentions.effective_context_window(), 50);

    clear_echowatch_env_vars();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let result = EchowatchConfig::from_toml("[limits\nmax_content_bytes = 1");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = EchowatchConfig::from_toml(
        "[limits]\nmax_content_bytes = 2048\nfuture_knob = true\n",
    )
    .unwrap();
    assert_eq!(config.limits.effective_max_content_bytes(), 2048);
}

#[test]
fn zero_content_limit_fails_validation() {
    let config = EchowatchConfig::from_toml("[limits]\nmax_content_bytes = 0\n").unwrap();
    let result = EchowatchConfig::validate(&config);
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { field, .. }) if field == "limits.max_content_bytes"
    ));
}

#[test]
fn zero_context_window_fails_validation() {
    let config = EchowatchConfig::from_toml("[mentions]\ncontext_window = 0\n").unwrap();
    assert!(EchowatchConfig::validate(&config).is_err());
}

#[test]
fn negative_weight_fails_validation() {
    let config =
        EchowatchConfig::from_toml("[scoring]\nmention_weight = -1.0\n").unwrap();
    let result = EchowatchConfig::validate(&config);
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { field, .. }) if field == "scoring.mention_weight"
    ));
}

#[test]
fn non_finite_weight_fails_validation() {
    let config = EchowatchConfig::from_toml("[scoring]\nsimilarity_weight = inf\n").unwrap();
    assert!(EchowatchConfig::validate(&config).is_err());
}
