use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    store::{FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, SCROLL_SPEED_MAX, Settings},
    ui::{
        context::AppContext,
        state::AppState,
        theme::Theme,
        traits::{Action, View},
    },
};

const PREVIEW: &str = "Amazing grace! How sweet the sound...";
const VERSE: &str = "\"Let the message of Christ dwell among you richly as you teach and \
admonish one another with all wisdom through psalms, hymns, and songs from the Spirit.\"";
const VERSE_REF: &str = "Colossians 3:16";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    DarkMode,
    FontSize,
    ScrollSpeed,
}

const ROWS: [Row; 3] = [Row::DarkMode, Row::FontSize, Row::ScrollSpeed];

#[derive(Default)]
pub struct SettingsView {
    selected: usize,
}

impl SettingsView {
    fn row(&self) -> Row {
        ROWS[self.selected.min(ROWS.len() - 1)]
    }

    fn adjust(&self, settings: Settings, delta: i32) -> Settings {
        match self.row() {
            Row::DarkMode => settings.toggle_dark_mode(),
            Row::FontSize => settings.step_font_size(delta),
            Row::ScrollSpeed => settings.step_scroll_speed(delta),
        }
    }

    fn slider(value: i32, min: i32, max: i32, step: i32, theme: &Theme) -> Vec<Span<'static>> {
        let notches = (max - min) / step;
        let filled = (value - min) / step;
        (0..=notches)
            .map(|i| {
                if i <= filled {
                    Span::styled("■", theme.accent())
                } else {
                    Span::styled("□", theme.muted())
                }
            })
            .collect()
    }

    fn row_line<'a>(
        &self,
        row: Row,
        label: &'a str,
        value: Vec<Span<'a>>,
        theme: &Theme,
    ) -> Line<'a> {
        let marker = if self.row() == row { "> " } else { "  " };
        let label_style = if self.row() == row {
            theme.highlight()
        } else {
            theme.heading()
        };

        let mut spans = vec![
            Span::styled(marker, theme.accent()),
            Span::styled(format!("{label:<20}"), label_style),
        ];
        spans.extend(value);
        Line::from(spans)
    }
}

impl View for SettingsView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let settings = state.settings;

        let [appearance_area, about_area] =
            Layout::vertical([Constraint::Length(12), Constraint::Min(0)]).areas(area);

        let appearance = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(theme.muted())
            .title(Span::styled(" APPEARANCE ", theme.muted()));

        let switch = if settings.dark_mode {
            vec![Span::styled("( ●)", theme.accent()), Span::raw("  on")]
        } else {
            vec![Span::styled("(○ )", theme.muted()), Span::raw("  off")]
        };

        let mut font = Self::slider(
            settings.font_size,
            FONT_SIZE_MIN,
            FONT_SIZE_MAX,
            FONT_SIZE_STEP,
            &theme,
        );
        font.push(Span::styled(format!("  {}px", settings.font_size), theme.accent()));

        let mut speed = Self::slider(settings.auto_scroll_speed, 0, SCROLL_SPEED_MAX, 1, &theme);
        speed.push(Span::styled(
            format!("  {}x", settings.auto_scroll_speed),
            theme.accent(),
        ));

        let lines = vec![
            Line::default(),
            self.row_line(Row::DarkMode, "Night Mode", switch, &theme),
            Line::default(),
            self.row_line(Row::FontSize, "Font Size", font, &theme),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(PREVIEW, theme.base().add_modifier(Modifier::ITALIC)),
            ]),
            Line::default(),
            self.row_line(Row::ScrollSpeed, "Auto Scroll Speed", speed, &theme),
            Line::default(),
            Line::styled(
                "  ↑/↓ select   ←/→ adjust   Enter toggle night mode",
                theme.muted(),
            ),
        ];
        f.render_widget(Paragraph::new(lines).block(appearance), appearance_area);

        let about = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(theme.muted())
            .title(Span::styled(" ABOUT ", theme.muted()));
        let about_lines = vec![
            Line::styled("✝ GraceLyrics", theme.heading()),
            Line::styled(
                concat!("Terminal Edition v", env!("CARGO_PKG_VERSION")),
                theme.muted(),
            ),
            Line::default(),
            Line::styled(VERSE, theme.base().add_modifier(Modifier::ITALIC)),
            Line::styled(VERSE_REF, theme.muted()),
        ];
        f.render_widget(
            Paragraph::new(about_lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(about),
            about_area,
        );
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let current = state.settings;
        let next = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                return Some(Action::None);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ROWS.len() - 1);
                return Some(Action::None);
            }
            KeyCode::Left | KeyCode::Char('h') => self.adjust(current, -1),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(current, 1),
            KeyCode::Enter | KeyCode::Char(' ') => current.toggle_dark_mode(),
            _ => return None,
        };

        if next == current {
            Some(Action::None)
        } else {
            Some(Action::UpdateSettings(next))
        }
    }
}
