//! End-to-end tests for `emoty config` commands.

mod fixtures;
use fixtures::*;

use tempfile::TempDir;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Theme Mode: system"));
    assert!(stdout.contains("Default Palette: hearts"));
    assert!(stdout.contains("Fill: perimeter"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn test_config_show_json_format() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert!(result["ui"].is_object(), "Should have ui object");
    assert!(result["canvas"].is_object(), "Should have canvas object");
    assert_eq!(result["ui"]["theme_mode"], "system");
    assert_eq!(result["ui"]["language"], "en");
    assert_eq!(result["canvas"]["cell_width"], 4);
    assert_eq!(result["canvas"]["animation_enabled"], true);
}

#[test]
fn test_config_show_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[canvas]\ncell_width = 40\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "show"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cell_width"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_then_show() {
    let temp = TempDir::new().unwrap();

    let output = isolated_command(
        &[
            "config", "set", "--theme", "dark", "--language", "fr", "--palette", "nature",
            "--fill", "anchor", "--read-only", "true",
        ],
        temp.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated"));
    assert!(temp.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], temp.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(result["ui"]["theme_mode"], "dark");
    assert_eq!(result["ui"]["language"], "fr");
    assert_eq!(result["ui"]["default_palette"], "nature");
    assert_eq!(result["canvas"]["fill"], "anchor");
    assert_eq!(result["canvas"]["read_only"], true);
    // Untouched values keep their defaults
    assert_eq!(result["canvas"]["cell_width"], 4);
}

#[test]
fn test_config_set_auto_theme_is_system() {
    let temp = TempDir::new().unwrap();

    let output = isolated_command(&["config", "set", "--theme", "auto"], temp.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("theme_mode = \"system\""), "config: {content}");
}

#[test]
fn test_config_set_without_options_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_theme() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--theme", "sepia"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_config_set_cell_width_out_of_range() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--cell-width", "9"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cell_width"));
}

#[test]
fn test_config_set_unknown_palette() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--palette", "missing"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown default_palette"));
}

#[test]
fn test_config_set_non_boolean_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--animation", "maybe"], temp.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
}
