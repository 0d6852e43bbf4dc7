//! Status bar widget for announcements and contextual help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::app::Politeness;
use crate::i18n::Message;
use crate::shortcuts::contexts;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the latest announcement and contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let announcement_line = state.announcements.latest().map_or_else(
            || Self::get_hints_line(state, theme),
            |announcement| {
                let style = match announcement.politeness {
                    Politeness::Assertive => Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                    Politeness::Polite => Style::default().fg(theme.text),
                };
                Line::from(Span::styled(announcement.message.clone(), style))
            },
        );

        let status_text = vec![
            announcement_line,
            Self::get_selection_line(state, theme),
            Self::get_contextual_help_line(state, theme),
        ];

        let title = Message::StatusTitle.localize(state.editor.language());
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Selected emoji plus undo/redo depth
    fn get_selection_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let language = state.editor.language();
        let history = state.editor.history();
        let selected = state.editor.selected_emoji().unwrap_or("-").to_string();
        let depths = Message::HistoryDepths {
            undo: history.undo_depth(),
            redo: history.redo_depth(),
        };

        Line::from(vec![
            Span::styled(
                Message::SelectedLabel.localize(language),
                Style::default().fg(theme.primary),
            ),
            Span::styled(selected, Style::default().fg(theme.accent)),
            Span::styled(
                depths.localize(language),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }

    /// Top hints for the focused context, shown until something is announced
    fn get_hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = state
            .help
            .format_status_bar_hints(&[state.shortcut_context()], 5);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }

    /// Bottom help line: focused context, then global bindings
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = state.shortcut_context();
        let names: &[&str] = if context_name == contexts::HELP {
            &[contexts::HELP]
        } else {
            &[context_name, contexts::GLOBAL]
        };
        let hints = state.help.format_status_bar_hints(names, 6);
        let help = Message::HelpLabel.localize(state.editor.language());

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled(
            format!("{help}: "),
            Style::default().fg(theme.primary),
        ));

        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        if context_name != contexts::HELP {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(format!(": {help}")));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Intent;
    use crate::config::Config;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_selection_line_follows_language() {
        let mut state = AppState::new(Config::default()).unwrap();
        let theme = Theme::dark();
        state.post(Intent::SelectEmoji("💜".into()));
        state.process_intents();

        let english = line_text(&StatusBar::get_selection_line(&state, &theme));
        assert_eq!(english, "Selected: 💜  Undo: 1  Redo: 0");

        state.post(Intent::ToggleLanguage);
        state.process_intents();
        let french = line_text(&StatusBar::get_selection_line(&state, &theme));
        assert_eq!(french, "Sélection : 💜  Annuler : 1  Rétablir : 0");

        let help = line_text(&StatusBar::get_contextual_help_line(&state, &theme));
        assert!(help.starts_with("Aide: "));
        assert!(help.ends_with("?: Aide"));
    }
}
