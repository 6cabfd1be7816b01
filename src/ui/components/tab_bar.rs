use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::{state::Screen, theme::Theme};

/// Bottom navigation. Hidden by the layout while reading lyrics.
pub struct TabBar<'a> {
    active: Screen,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Screen, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base().bg(self.theme.surface));

        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(self.theme.muted());
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal(Screen::TABS.map(|_| Constraint::Fill(1))).split(inner);

        for (i, (tab, column)) in Screen::TABS.iter().zip(columns.iter()).enumerate() {
            let is_active = *tab == self.active;
            let label = tab.tab_label().unwrap_or_default();

            let style = if is_active {
                self.theme.accent().add_modifier(Modifier::BOLD)
            } else {
                self.theme.muted()
            };

            let mut lines = vec![Line::styled(format!("{} {}", i + 1, label.to_uppercase()), style)];
            if is_active {
                lines.push(Line::styled("•", self.theme.accent()));
            }

            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }
}
