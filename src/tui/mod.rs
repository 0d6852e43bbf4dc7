//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod canvas;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod palette_bar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::app::{AnnouncementLog, Editor, Intent, IntentQueue, Outcome};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::i18n::theme_label;
use crate::models::PatternGrid;
use crate::shortcuts::{contexts, ShortcutRegistry};

// Re-export TUI components
pub use canvas::{CanvasLayout, CanvasWidget};
pub use help_overlay::HelpOverlayState;
pub use help_registry::HelpRegistry;
pub use palette_bar::PaletteBar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Frames the newest ring stays highlighted after a change.
pub const FLASH_FRAMES: u8 = 5;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The pattern grid
    Canvas,
    /// The emoji strip
    #[default]
    Palette,
}

impl Focus {
    /// The other panel.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Canvas => Self::Palette,
            Self::Palette => Self::Canvas,
        }
    }
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar
    pub title: Rect,
    /// Pattern canvas
    pub canvas: Rect,
    /// Palette carousel
    pub palette: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits the terminal area.
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title bar
                Constraint::Min(10),    // Canvas
                Constraint::Length(4),  // Palette strip + description
                Constraint::Length(5),  // Announcement, selection, help
            ])
            .split(area);
        Self {
            title: chunks[0],
            canvas: chunks[1],
            palette: chunks[2],
            status: chunks[3],
        }
    }
}

/// Application state
pub struct AppState {
    /// Pattern, selection, palettes and session preferences
    pub editor: Editor,
    /// Everything announced so far
    pub announcements: AnnouncementLog,
    /// Intents waiting for the next tick
    pub queue: IntentQueue,
    /// Configuration as loaded
    pub config: Config,
    /// Active colors
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Help text for the status bar and overlay
    pub help: HelpRegistry,
    /// Focused panel
    pub focus: Focus,
    /// Canvas cursor as (row, col)
    pub canvas_cursor: (usize, usize),
    /// Palette cursor index
    pub palette_cursor: usize,
    /// Remaining frames of the change highlight
    pub flash_frames: u8,
    /// Open help overlay, if any
    pub help_overlay: Option<HelpOverlayState>,
    /// Last known terminal area, for mouse hit testing
    pub frame_area: Rect,
    /// Set once the user quits
    pub should_quit: bool,
    /// Laid-out grid, rebuilt when the pattern changes
    grid: PatternGrid,
}

impl AppState {
    /// Builds the initial state from a loaded config.
    pub fn new(config: Config) -> Result<Self> {
        let editor = Editor::from_config(&config)?;
        let theme = Theme::from_mode(editor.context().theme_mode());
        let help = HelpRegistry::load().context("Failed to load embedded help")?;
        let grid = editor.grid(config.canvas.fill);

        Ok(Self {
            editor,
            announcements: AnnouncementLog::default(),
            queue: IntentQueue::new(),
            config,
            theme,
            shortcuts: ShortcutRegistry::new(),
            help,
            focus: Focus::default(),
            canvas_cursor: (0, 0),
            palette_cursor: 0,
            flash_frames: 0,
            help_overlay: None,
            frame_area: Rect::default(),
            should_quit: false,
            grid,
        })
    }

    /// Grid for the current pattern, laid out with the configured fill.
    #[must_use]
    pub const fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    /// Side of the current grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.editor.current().pattern_size()
    }

    /// Shortcut context for the focused panel or overlay.
    #[must_use]
    pub const fn shortcut_context(&self) -> &'static str {
        if self.help_overlay.is_some() {
            return contexts::HELP;
        }
        match self.focus {
            Focus::Canvas => contexts::CANVAS,
            Focus::Palette => contexts::PALETTE,
        }
    }

    /// Queues an intent for the next dispatch.
    pub fn post(&self, intent: Intent) {
        self.queue.post(intent);
    }

    /// Runs every queued intent and updates view state to match.
    pub fn process_intents(&mut self) {
        let palette_before = self.editor.active_palette().map(|p| p.id.clone());
        let outcomes = self
            .queue
            .dispatch_pending(&mut self.editor, &mut self.announcements);

        if outcomes.iter().any(|o| o.pattern_changed()) {
            if self.config.canvas.animation_enabled {
                self.flash_frames = FLASH_FRAMES;
            }
            self.grid = self.editor.grid(self.config.canvas.fill);
            let center = self.grid_size() / 2;
            self.canvas_cursor = (center, center);
        }

        if outcomes.contains(&Outcome::SettingsChanged) {
            self.theme = Theme::from_mode(self.editor.context().theme_mode());
            let palette_after = self.editor.active_palette().map(|p| p.id.clone());
            if palette_after != palette_before {
                self.palette_cursor = 0;
            }
        }
    }

    /// Counts the change highlight down by one frame.
    pub fn tick(&mut self) {
        self.flash_frames = self.flash_frames.saturating_sub(1);
    }

    /// Writes the session's theme, language and palette back to disk when
    /// they differ from what was loaded.
    pub fn persist_preferences(&mut self) -> Result<()> {
        let mut config = self.config.clone();
        self.editor.context().apply_to(&mut config);
        if let Some(palette) = self.editor.active_palette() {
            config.ui.default_palette.clone_from(&palette.id);
        }

        if config != self.config {
            config.save()?;
            self.config = config;
        }
        Ok(())
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        state.frame_area = Rect::new(0, 0, size.width, size.height);

        terminal.draw(|f| render(f, state))?;
        state.tick();

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key_event(state, key)?
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                // Resize and everything else just re-renders
                _ => false,
            };
            if quit {
                break;
            }
        }

        state.process_intents();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs the editor until the user quits, then saves changed preferences.
pub fn run(config: Config) -> Result<()> {
    let mut state = AppState::new(config)?;
    tracing::info!(
        palettes = state.editor.catalog().len(),
        "starting editor"
    );

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result?;

    state.persist_preferences()
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = ScreenAreas::split(f.area());

    render_title_bar(f, areas.title, state);
    CanvasWidget::render(f, areas.canvas, state);
    PaletteBar::render(f, areas.palette, state);
    StatusBar::render(f, areas.status, state, &state.theme);

    if let Some(overlay) = &state.help_overlay {
        overlay.render(f, f.area(), &state.help, &state.theme);
    }
}

/// Render title bar with language, theme and the pattern's alt text
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let language = state.editor.language();
    let info = state.editor.describe();

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} {} ", language.flag(), language.code().to_uppercase()),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(
            format!(
                "│ {} ",
                theme_label(state.editor.context().theme_mode(), language)
            ),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(format!("│ {}", info.alt_text), Style::default().fg(theme.text)),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::i18n::Language;
    use crate::models::PatternMode;

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_new_state_starts_empty() {
        let state = test_state();
        assert!(state.editor.current().is_empty());
        assert_eq!(state.focus, Focus::Palette);
        assert_eq!(state.shortcut_context(), contexts::PALETTE);
        assert_eq!(state.theme, Theme::dark());
        assert!(state.announcements.is_empty());
    }

    #[test]
    fn test_process_intents_flashes_and_centres_cursor() {
        let mut state = test_state();
        state.post(Intent::SelectEmoji("😀".into()));
        state.post(Intent::SelectEmoji("😎".into()));
        state.process_intents();

        assert_eq!(state.editor.current().len(), 2);
        assert_eq!(state.flash_frames, FLASH_FRAMES);
        assert_eq!(state.canvas_cursor, (1, 1));

        for _ in 0..FLASH_FRAMES {
            state.tick();
        }
        assert_eq!(state.flash_frames, 0);
    }

    #[test]
    fn test_cached_grid_tracks_pattern() {
        let mut state = test_state();
        assert!(state.grid().is_empty());
        assert_eq!(state.grid_size(), 0);

        for emoji in ["🔴", "🟢", "🔵"] {
            state.post(Intent::SelectEmoji(emoji.into()));
        }
        state.process_intents();
        assert_eq!(state.grid_size(), 5);
        assert_eq!(state.grid().size(), state.grid_size());
        assert_eq!(state.grid().get(2, 2).map(|c| c.emoji.as_str()), Some("🔵"));

        state.post(Intent::Undo);
        state.process_intents();
        assert_eq!(state.grid_size(), 3);
        assert_eq!(state.grid().size(), 3);
        assert_eq!(state.grid().get(1, 1).map(|c| c.emoji.as_str()), Some("🟢"));
    }

    #[test]
    fn test_no_flash_when_animation_disabled() {
        let mut state = test_state();
        state.config.canvas.animation_enabled = false;
        state.post(Intent::SelectEmoji("😀".into()));
        state.process_intents();
        assert_eq!(state.flash_frames, 0);
    }

    #[test]
    fn test_theme_follows_cycle() {
        let mut state = test_state();
        // Dark -> System
        state.post(Intent::CycleTheme);
        state.process_intents();
        assert_eq!(state.editor.context().theme_mode(), ThemeMode::System);
        // System -> Light
        state.post(Intent::CycleTheme);
        state.process_intents();
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn test_palette_switch_resets_cursor() {
        let mut state = test_state();
        state.palette_cursor = 4;
        state.post(Intent::NextPalette);
        state.process_intents();
        assert_eq!(state.palette_cursor, 0);
    }

    #[test]
    fn test_help_overlay_context() {
        let mut state = test_state();
        state.help_overlay = Some(HelpOverlayState::new(&state.help));
        assert_eq!(state.shortcut_context(), contexts::HELP);
        state.focus = Focus::Canvas;
        state.help_overlay = None;
        assert_eq!(state.shortcut_context(), contexts::CANVAS);
    }

    #[test]
    fn test_screen_areas_stack() {
        let areas = ScreenAreas::split(Rect::new(0, 0, 80, 30));
        assert_eq!(areas.title.height, 3);
        assert_eq!(areas.palette.height, 4);
        assert_eq!(areas.status.height, 5);
        assert_eq!(areas.canvas.height, 30 - 3 - 4 - 5);
        assert_eq!(areas.palette.y, areas.canvas.y + areas.canvas.height);
    }

    #[test]
    fn test_mode_and_language_reach_editor() {
        let mut state = test_state();
        state.post(Intent::TogglePatternMode);
        state.post(Intent::ToggleLanguage);
        state.process_intents();
        assert_eq!(state.editor.current().pattern_mode(), PatternMode::Sequential);
        assert_eq!(state.editor.language(), Language::Fr);
    }
}
