//! Unit tests for configuration loading.

use std::time::Duration;

use fittrack::storage::config::{load_config_from, AppConfig, ConfigError, ThemePreference};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[scheduler]
motivation_delay_secs = 10

[ui]
theme = "light"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.scheduler.motivation_delay(), Duration::from_secs(10));
    assert_eq!(config.scheduler.reminder_interval(), Duration::from_secs(60));
    assert_eq!(config.ui.theme, ThemePreference::Light);
    assert_eq!(config.ui.font_scale, 1.0);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scheduler\nmotivation_delay_secs = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntheme = \"sepia\"\n").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}
