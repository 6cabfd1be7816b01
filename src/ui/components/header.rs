use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::{state::HeaderSpec, theme::Theme};

pub struct Header<'a> {
    spec: HeaderSpec,
    right: Option<Line<'a>>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(spec: HeaderSpec, theme: &'a Theme) -> Self {
        Self {
            spec,
            right: None,
            theme,
        }
    }

    pub fn right(mut self, right: Line<'a>) -> Self {
        self.right = Some(right);
        self
    }
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base().bg(self.theme.surface));

        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.muted());
        let inner = block.inner(area);
        block.render(area, buf);

        let icon = if self.spec.has_back { " ← " } else { " ✝ " };
        let title = Line::from(vec![
            Span::styled(icon, self.theme.accent()),
            Span::styled(
                self.spec.title,
                self.theme.heading().add_modifier(Modifier::ITALIC),
            ),
        ]);
        Paragraph::new(title).render(inner, buf);

        if let Some(right) = self.right {
            Paragraph::new(right)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
