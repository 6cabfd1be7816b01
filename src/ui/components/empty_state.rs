use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::theme::Theme;

pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            hint: None,
            theme,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl<'a> Widget for EmptyState<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![Line::styled(self.message, self.theme.muted())];
        if let Some(hint) = self.hint {
            lines.push(Line::default());
            lines.push(Line::styled(hint, self.theme.muted()));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(middle, buf);
    }
}
