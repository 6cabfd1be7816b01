use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    share::SharePayload,
    ui::{
        context::AppContext,
        state::AppState,
        theme::Theme,
        traits::{Action, View},
    },
};

/// Fallback when no share target exists: the payload in a modal, ready to copy.
pub struct ShareSheet {
    payload: SharePayload,
    scroll: u16,
}

impl ShareSheet {
    pub fn new(payload: SharePayload) -> Self {
        Self { payload, scroll: 0 }
    }

    pub fn payload(&self) -> &SharePayload {
        &self.payload
    }
}

fn popup_area(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    area
}

impl View for ShareSheet {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let popup = popup_area(area);

        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(theme.accent())
            .style(theme.base().bg(theme.surface))
            .title(Span::styled(
                format!(" Share: {} ", self.payload.title),
                theme.heading(),
            ))
            .title_bottom(Line::styled(
                " No share target found. Copy the text, then press any key ",
                theme.muted(),
            ));

        let lines: Vec<Line> = self.payload.text.lines().map(Line::raw).collect();
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            popup,
        );
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => return Some(Action::DismissOverlay),
        }
        Some(Action::None)
    }
}
