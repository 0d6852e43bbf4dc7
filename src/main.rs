//! Emoty - Terminal emoji pattern editor
//!
//! Runs the interactive editor when started without a subcommand, otherwise
//! executes one headless command and exits.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use emoty::cli::{CliError, ConfigArgs, ExitCode, GenerateArgs, PalettesArgs};
use emoty::config::Config;
use emoty::constants::APP_BINARY_NAME;
use emoty::{logging, tui};

/// Emoty - Terminal emoji pattern editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by EMOTY_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out emojis as a pattern and print it
    Generate(GenerateArgs),
    /// List the built-in palettes
    Palettes(PalettesArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Palettes(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::UsageError.code());
        }
    };

    match cli.command {
        Some(command) => {
            if let Err(e) = logging::init_stderr(cli.verbose) {
                eprintln!("Warning: {e:#}");
            }
            if let Err(e) = command.execute() {
                tracing::debug!(code = e.exit_code(), "command failed");
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code());
            }
            Ok(())
        }
        None => run_editor(cli.verbose),
    }
}

fn run_editor(verbose: bool) -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Starting with defaults. Fix it with `{APP_BINARY_NAME} config set`.");
            Config::default()
        }
    };

    // Logging is optional for the editor; a read-only config dir must not stop it
    if let Ok(dir) = Config::config_dir() {
        if let Err(e) = logging::init_file(&dir, verbose) {
            eprintln!("Warning: {e:#}");
        }
    }

    if !std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        Cli::command().print_help()?;
        anyhow::bail!("The editor needs an interactive terminal");
    }

    tui::run(config)
}
