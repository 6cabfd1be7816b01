use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::store::FONT_SIZE_MIN;

const MIN_COLUMN: u16 = 16;

/// Width of the lyrics column. Bigger fonts get fewer characters per line.
pub fn column_width(area_width: u16, font_size: i32) -> u16 {
    let font_size = font_size.max(1) as u32;
    let scaled = (u32::from(area_width) * FONT_SIZE_MIN as u32 / font_size) as u16;
    scaled.max(MIN_COLUMN).min(area_width)
}

/// Word-wraps `text` to `width` display cells. Blank lines are kept as stanza breaks.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_w = 0;
        for word in line.split_whitespace() {
            let word_w = word.width();
            let sep = usize::from(!current.is_empty());

            if current_w + sep + word_w <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_w += sep + word_w;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_w = 0;
            }

            if word_w <= width {
                current.push_str(word);
                current_w = word_w;
            } else {
                for ch in word.chars() {
                    let ch_w = ch.width().unwrap_or(0);
                    if current_w + ch_w > width && !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                        current_w = 0;
                    }
                    current.push(ch);
                    current_w += ch_w;
                }
            }
        }

        if !current.is_empty() {
            rows.push(current);
        }
    }

    rows
}

/// Draws pre-wrapped rows starting at `first_row`, centred as a column.
pub struct LyricsWidget<'a> {
    rows: &'a [String],
    first_row: usize,
    column: u16,
    style: Style,
}

impl<'a> LyricsWidget<'a> {
    pub fn new(rows: &'a [String], first_row: usize, column: u16) -> Self {
        Self {
            rows,
            first_row,
            column,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for LyricsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = self.column.min(area.width);
        let x = area.x + (area.width - column) / 2;

        for (i, row) in self
            .rows
            .iter()
            .skip(self.first_row)
            .take(usize::from(area.height))
            .enumerate()
        {
            buf.set_stringn(x, area.y + i as u16, row, usize::from(column), self.style);
        }
    }
}
