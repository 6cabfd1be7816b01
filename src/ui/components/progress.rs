use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Simulated player strip: state label, whole-percent readout and a bar.
pub struct PlaybackBar<'a> {
    playing: bool,
    progress: f64,
    theme: &'a Theme,
}

impl<'a> PlaybackBar<'a> {
    pub fn new(playing: bool, progress: f64, theme: &'a Theme) -> Self {
        Self {
            playing,
            progress,
            theme,
        }
    }
}

impl<'a> Widget for PlaybackBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(self.theme.muted());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, label) = if self.playing {
            ("❚❚ ", "PLAYING")
        } else {
            ("▶ ", "PREVIEW")
        };
        let status = Line::from(vec![
            Span::styled(icon, self.theme.accent()),
            Span::styled(label, self.theme.muted().add_modifier(Modifier::BOLD)),
        ]);
        let percent = format!("{}%", self.progress.floor() as u32);

        let status_row = Rect { height: 1, ..inner };
        Paragraph::new(status).render(status_row, buf);
        Paragraph::new(Line::styled(percent, self.theme.muted()))
            .alignment(Alignment::Right)
            .render(status_row, buf);

        if inner.height < 2 {
            return;
        }

        let bar_y = inner.y + 1;
        let filled = ((self.progress / 100.0).clamp(0.0, 1.0) * f64::from(inner.width)).round() as u16;
        for i in 0..inner.width {
            let (ch, style) = if i < filled {
                ("━", self.theme.accent())
            } else {
                ("─", self.theme.muted())
            };
            buf.set_stringn(inner.x + i, bar_y, ch, 1, style);
        }
    }
}
