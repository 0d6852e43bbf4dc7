//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::i18n::Language;
use crate::models::PaletteCatalog;
use crate::services::FillPolicy;

/// Smallest allowed canvas cell width in terminal columns.
pub const MIN_CELL_WIDTH: u16 = 2;
/// Largest allowed canvas cell width in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 6;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
    /// Follow the OS theme
    #[default]
    System,
}

impl ThemeMode {
    /// Next mode in the toggle cycle: light, dark, system.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            // "auto" kept as an alias for older config files
            "system" | "auto" => Ok(Self::System),
            other => anyhow::bail!(
                "Invalid theme mode '{other}'. Must be 'light', 'dark', or 'system'"
            ),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Light, Dark, System)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Interface language
    #[serde(default)]
    pub language: Language,
    /// Palette shown at startup
    #[serde(default = "default_palette_id")]
    pub default_palette: String,
}

fn default_palette_id() -> String {
    "hearts".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language: Language::default(),
            default_palette: default_palette_id(),
        }
    }
}

/// Canvas display options handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width of one grid cell in terminal columns
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
    /// Flash the newest ring after an edit
    #[serde(default = "default_true")]
    pub animation_enabled: bool,
    /// Ignore canvas clicks
    #[serde(default)]
    pub read_only: bool,
    /// How rings are drawn
    #[serde(default = "default_fill")]
    pub fill: FillPolicy,
}

const fn default_cell_width() -> u16 {
    4
}

const fn default_true() -> bool {
    true
}

const fn default_fill() -> FillPolicy {
    FillPolicy::Perimeter
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            animation_enabled: true,
            read_only: false,
            fill: default_fill(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Emoty/config.toml`
/// - macOS: `~/Library/Application Support/Emoty/config.toml`
/// - Windows: `%APPDATA%\Emoty\config.toml`
///
/// Setting `EMOTY_CONFIG_DIR` replaces the whole directory.
///
/// # Validation
///
/// - `cell_width` must be within 2..=6
/// - `default_palette` must name a built-in palette
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Canvas display options
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&self.canvas.cell_width) {
            anyhow::bail!(
                "Invalid cell_width {}. Must be between {MIN_CELL_WIDTH} and {MAX_CELL_WIDTH}",
                self.canvas.cell_width
            );
        }

        let catalog = PaletteCatalog::load()?;
        if catalog.get(&self.ui.default_palette).is_none() {
            let known: Vec<&str> = catalog.palettes().iter().map(|p| p.id.as_str()).collect();
            anyhow::bail!(
                "Unknown default_palette '{}'. Available: {}",
                self.ui.default_palette,
                known.join(", ")
            );
        }

        Ok(())
    }
}
