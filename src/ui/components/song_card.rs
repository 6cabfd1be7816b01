use ratatui::{
    text::{Line, Span, Text},
    widgets::ListItem,
};

use crate::{catalog::Song, ui::theme::Theme};

/// Two-line list entry: title, then artist and category.
pub fn song_item<'a>(song: &'a Song, is_favorite: bool, theme: &Theme) -> ListItem<'a> {
    let mut title = vec![
        Span::styled("♪ ", theme.accent()),
        Span::styled(song.title.as_str(), theme.heading()),
    ];
    if is_favorite {
        title.push(Span::styled(" ♥", theme.accent()));
    }

    let meta = Line::from(vec![
        Span::raw("  "),
        Span::styled(song.artist.as_str(), theme.muted()),
        Span::styled(" · ", theme.muted()),
        Span::styled(song.category.label().to_uppercase(), theme.accent()),
    ]);

    ListItem::new(Text::from(vec![Line::from(title), meta, Line::default()]))
}
