//! Palettes command: lists the built-in emoji palettes.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::i18n::Language;
use crate::models::PaletteCatalog;
use clap::Args;

/// List built-in emoji palettes
#[derive(Debug, Clone, Args)]
pub struct PalettesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Language for palette names: en or fr
    #[arg(long, value_name = "LANG", default_value = "en")]
    pub lang: String,
}

impl PalettesArgs {
    /// Execute the palettes command
    pub fn execute(&self) -> CliResult<()> {
        let language: Language = self
            .lang
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let catalog = PaletteCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load palettes: {e}")))?;

        if self.json {
            return print_json(&catalog.palettes());
        }

        for palette in catalog.palettes() {
            println!(
                "{:<10} {:<20} {}",
                palette.id,
                palette.display_name(language),
                palette.emojis.join(" ")
            );
        }
        Ok(())
    }
}
