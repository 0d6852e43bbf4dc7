//! Shared test fixtures for library and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use emoty::app::{AnnouncementLog, Editor, SessionContext};
use emoty::models::{PaletteCatalog, PatternMode, PatternState};
use emoty::services::create_pattern_state;
use std::path::Path;
use std::process::Command;

/// Emojis used across tests, in insertion order.
pub const SMILEYS: [&str; 3] = ["😀", "😎", "🥳"];

/// Path to the emoty binary
pub fn emoty_bin() -> String {
    std::env::var("CARGO_BIN_EXE_emoty").unwrap_or_else(|_| "target/release/emoty".to_string())
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share config between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(emoty_bin());
    cmd.env("EMOTY_CONFIG_DIR", config_dir);
    cmd.env_remove("EMOTY_LOG");
    cmd.args(args);
    cmd
}

/// Owned sequence from string literals.
pub fn seq(emojis: &[&str]) -> Vec<String> {
    emojis.iter().map(|e| (*e).to_string()).collect()
}

/// Concentric state for the given emojis.
pub fn concentric(emojis: &[&str]) -> PatternState {
    create_pattern_state(seq(emojis), PatternMode::Concentric)
}

/// Editor over the built-in palettes, starting on `hearts`.
pub fn editor() -> Editor {
    let catalog = PaletteCatalog::load().expect("built-in palettes load");
    Editor::new(catalog, SessionContext::default(), "hearts")
}

/// Fresh announcement log.
pub fn log() -> AnnouncementLog {
    AnnouncementLog::default()
}
