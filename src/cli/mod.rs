//! CLI command handlers for Emoty.
//!
//! This module provides headless, scriptable access to the pattern generator,
//! the palettes and the configuration for automation and testing.

pub mod common;
pub mod config;
pub mod generate;
pub mod palettes;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use palettes::PalettesArgs;
