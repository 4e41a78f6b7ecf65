//! Tests for the binary's command-line surface. None of these start the TUI.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn scorepad_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scorepad"))
}

#[test]
fn test_help_lists_options() {
    let output = scorepad_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn test_version_flag() {
    let output = scorepad_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_config_applies_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\nsubtitle = \"Leg day\"\n").unwrap();

    let output = scorepad_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--title")
        .arg("Gym")
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("title = \"Gym\""));
    assert!(stdout.contains("subtitle = \"Leg day\""));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = scorepad_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"));
}
