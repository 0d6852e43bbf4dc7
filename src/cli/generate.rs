//! Generate command: lays out an emoji sequence without the TUI.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::i18n::Language;
use crate::models::{
    CanvasSize, GridCell, PatternAccessibilityInfo, PatternGrid, PatternMetadata, PatternMode,
    PatternState,
};
use crate::services::{create_pattern_state, describe_pattern, generate_with_fill, FillPolicy};
use crate::validation::{validate_sequence, ValidationRule};
use clap::Args;
use serde::Serialize;

/// Generate a pattern from emojis given in insertion order
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Emojis, first is the outermost ring, last is the centre
    #[arg(value_name = "EMOJI", required = true)]
    pub emojis: Vec<String>,

    /// Layout mode: concentric or sequential
    #[arg(long, value_name = "MODE", default_value = "concentric")]
    pub mode: String,

    /// Ring fill: anchor (one cell per ring) or perimeter
    #[arg(long, value_name = "FILL", default_value = "perimeter")]
    pub fill: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include screen-reader descriptions
    #[arg(long)]
    pub describe: bool,

    /// Give the pattern a name, id and timestamps
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Free-form description stored on the pattern
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Language for descriptions: en or fr
    #[arg(long, value_name = "LANG", default_value = "en")]
    pub lang: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateOutput<'a> {
    pattern: &'a PatternState,
    fill: FillPolicy,
    grid_size: usize,
    cells: Vec<&'a GridCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility: Option<PatternAccessibilityInfo>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let validation = validate_sequence(&self.emojis, &ValidationRule::defaults());
        if !validation.is_valid {
            let mut message = format!("Invalid emoji sequence:\n  {}", validation.errors.join("\n  "));
            if !validation.suggestions.is_empty() {
                message.push_str(&format!("\nHint: {}", validation.suggestions.join("; ")));
            }
            return Err(CliError::validation(message));
        }

        let mode: PatternMode = self
            .mode
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let fill: FillPolicy = self
            .fill
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let language: Language = self
            .lang
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let state = self.build_state(mode, language);
        let grid = generate_with_fill(&state, fill);
        tracing::debug!(
            emojis = state.len(),
            size = grid.size(),
            filled = grid.filled_count(),
            "pattern generated"
        );

        let accessibility = self.describe.then(|| describe_pattern(&state, language));

        if self.json {
            let output = GenerateOutput {
                pattern: &state,
                fill,
                grid_size: grid.size(),
                cells: grid.cells().collect(),
                accessibility,
            };
            print_json(&output)?;
        } else {
            print!("{}", render_text(&grid));
            if let Some(info) = accessibility {
                println!();
                println!("{}", info.alt_text);
                println!("{}", info.description);
                println!("{}", info.sequence_description);
                println!("{}", info.spatial_description);
            }
        }

        Ok(())
    }

    fn build_state(&self, mode: PatternMode, language: Language) -> PatternState {
        let state = create_pattern_state(self.emojis.clone(), mode);
        let size = u32::try_from(state.pattern_size()).unwrap_or(u32::MAX);
        let mut metadata = PatternMetadata::manual(state.len(), language);
        metadata.canvas_size = Some(CanvasSize {
            width: size,
            height: size,
        });

        let mut state = state.with_metadata(metadata);
        if let Some(name) = &self.name {
            state = state.with_identity(name.as_str());
        }
        if let Some(description) = &self.description {
            state = state.with_description(description.as_str());
        }
        state
    }
}

/// One line per grid row, cells separated by a space, `·` for empty cells.
#[must_use]
pub fn render_text(grid: &PatternGrid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_ref().map_or("·", |c| c.emoji.as_str()))
                .collect();
            format!("{}\n", cells.join(" "))
        })
        .collect()
}
