//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::i18n::Language;
use crate::services::FillPolicy;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Theme mode (light, dark, or system)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Interface language (en or fr)
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Palette shown at startup
    #[arg(long, value_name = "ID")]
    palette: Option<String>,

    /// Canvas cell width in columns (2-6)
    #[arg(long, value_name = "COLS")]
    cell_width: Option<u16>,

    /// Ring fill (anchor or perimeter)
    #[arg(long, value_name = "FILL")]
    fill: Option<String>,

    /// Flash the newest ring after edits
    #[arg(long, value_name = "BOOL")]
    animation: Option<bool>,

    /// Ignore canvas taps
    #[arg(long, value_name = "BOOL")]
    read_only: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.language.is_none()
            && self.palette.is_none()
            && self.cell_width.is_none()
            && self.fill.is_none()
            && self.animation.is_none()
            && self.read_only.is_none()
    }

    /// Applies the given options on top of `config`.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }
        if let Some(language) = &self.language {
            config.ui.language = language
                .parse::<Language>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }
        if let Some(palette) = &self.palette {
            config.ui.default_palette.clone_from(palette);
        }
        if let Some(width) = self.cell_width {
            config.canvas.cell_width = width;
        }
        if let Some(fill) = &self.fill {
            config.canvas.fill = fill
                .parse::<FillPolicy>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }
        if let Some(animation) = self.animation {
            config.canvas.animation_enabled = animation;
        }
        if let Some(read_only) = self.read_only {
            config.canvas.read_only = read_only;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::usage(
                "At least one option must be given: --theme, --language, --palette, \
                 --cell-width, --fill, --animation or --read-only",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable configuration: {e:#}");
            Config::default()
        });
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Emoty Configuration");
    println!("===================");
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!("  Language: {}", config.ui.language.code());
    println!("  Default Palette: {}", config.ui.default_palette);
    println!();

    println!("Canvas:");
    println!("  Cell Width: {}", config.canvas.cell_width);
    println!("  Fill: {}", config.canvas.fill);
    println!("  Animation: {}", config.canvas.animation_enabled);
    println!("  Read Only: {}", config.canvas.read_only);
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
    }
}
