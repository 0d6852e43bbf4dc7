//! Palette carousel: the active palette's emoji strip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};
use crate::i18n::Message;

/// Columns taken by one emoji slot.
pub const SLOT_WIDTH: u16 = 4;

/// Palette bar widget
pub struct PaletteBar;

impl PaletteBar {
    fn block(state: &AppState) -> Block<'static> {
        let language = state.editor.language();
        let catalog = state.editor.catalog();
        let title = state.editor.active_palette().map_or_else(
            || Message::PaletteTitle.localize(language),
            |palette| {
                let position = catalog.index_of(&palette.id).map_or(0, |i| i + 1);
                format!(
                    " {}: ◀ {} ▶ ({position}/{}) ",
                    Message::PaletteTitle.localize(language).trim(),
                    palette.display_name(language),
                    catalog.len()
                )
            },
        );

        let border = if state.focus == Focus::Palette && state.help_overlay.is_none() {
            state.theme.accent
        } else {
            state.theme.inactive
        };

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(state.theme.background))
    }

    /// Index of the emoji slot under a screen position, for a bar drawn at `area`.
    #[must_use]
    pub fn slot_at(area: Rect, x: u16, y: u16, emoji_count: usize) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if y != inner.y || x < inner.x || inner.height == 0 {
            return None;
        }
        let index = usize::from((x - inner.x) / SLOT_WIDTH);
        (index < emoji_count).then_some(index)
    }

    /// Render the palette bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = Self::block(state);

        let Some(palette) = state.editor.active_palette() else {
            f.render_widget(block, area);
            return;
        };

        let selected = state.editor.selected_emoji();
        let focused = state.focus == Focus::Palette;

        let strip: Vec<Span<'static>> = palette
            .emojis
            .iter()
            .enumerate()
            .map(|(i, emoji)| {
                let mut style = Style::default().fg(theme.text);
                if selected == Some(emoji.as_str()) {
                    style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
                }
                if i == state.palette_cursor {
                    style = if focused {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style.add_modifier(Modifier::UNDERLINED)
                    };
                }
                let pad = usize::from(SLOT_WIDTH).saturating_sub(Span::raw(emoji.as_str()).width());
                let left = pad / 2;
                Span::styled(
                    format!("{}{emoji}{}", " ".repeat(left), " ".repeat(pad - left)),
                    style,
                )
            })
            .collect();

        let mut lines = vec![Line::from(strip)];
        if let Some(description) = &palette.description {
            lines.push(Line::from(Span::styled(
                description.get(state.editor.language()).to_string(),
                Style::default().fg(theme.text_muted),
            )));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
