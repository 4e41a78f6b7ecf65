use scorepad::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.title, "SportApp");
    assert_eq!(config.ui.subtitle, "Track your fitness goals");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("scorepad/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"[ui]
title = "Match Day"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.title, "Match Day");
    assert_eq!(config.ui.subtitle, "Track your fitness goals");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"[ui]
title = "Gym"
subtitle = "Reps"
tick_rate_ms = 100

[logging]
level = "scorepad=debug"
file = "/tmp/scorepad-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "scorepad=debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/scorepad-test.log"))
    );
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_blank_title_is_rejected() {
    let (_dir, path) = write_config("[ui]\ntitle = \"   \"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ncolour = \"blue\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntitle = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_directory_path_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_to_toml_reloads_to_same_config() {
    let (_dir, path) = write_config("[ui]\ntitle = \"Gym\"\n");
    let config = Config::load_from(&path).unwrap();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("title = \"Gym\""));
    assert!(!rendered.contains("file"));

    let (_dir2, path2) = write_config(&rendered);
    assert_eq!(Config::load_from(&path2).unwrap(), config);
}
