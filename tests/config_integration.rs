//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use driftfield::config::AppConfig;
use driftfield_core::FieldMode;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("DRIFT_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("DRIFT_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_mode_env_override() {
    std::env::set_var("DRIFT_FIELD__MODE", "circuit");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.field.mode, FieldMode::Circuit);
    std::env::remove_var("DRIFT_FIELD__MODE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("DRIFT_WINDOW__TITLE");
    std::env::remove_var("DRIFT_FIELD__MODE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Driftfield");
    assert_eq!(config.field.mode, FieldMode::Snow);
    assert_eq!(config.rendering.circle_segments, 12);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    std::env::remove_var("DRIFT_WINDOW__TITLE");

    // No files present: figment extracts pure serde defaults
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
}
