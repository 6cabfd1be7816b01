use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    catalog::{Catalog, Category, Song},
    ui::{
        components::{empty_state::EmptyState, song_card::song_item},
        context::AppContext,
        state::AppState,
        theme::Theme,
        traits::{Action, View},
        util::{ListKey, clamp_selection, handle_list_key},
    },
};

const PLACEHOLDER: &str = "Search hymn, lyrics, artist...";

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEntry {
    Category(Category),
    Song(Arc<Song>),
}

/// Search box over a list of collections and trending songs.
#[derive(Default)]
pub struct Home {
    query: String,
    editing: bool,
    list_state: ListState,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Selectable rows in display order.
    pub fn entries(&self, catalog: &Catalog) -> Vec<HomeEntry> {
        let songs = catalog.search(&self.query).into_iter().map(HomeEntry::Song);

        if self.query.is_empty() {
            catalog
                .categories()
                .iter()
                .copied()
                .map(HomeEntry::Category)
                .chain(songs)
                .collect()
        } else {
            songs.collect()
        }
    }

    fn set_query(&mut self, query: String) {
        self.query = query;
        self.list_state.select(Some(0));
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let mut query = std::mem::take(&mut self.query);
                query.push(c);
                self.set_query(query);
            }
            KeyCode::Backspace => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.editing = false,
            _ => {}
        }
    }

    fn render_search(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.editing {
            theme.accent()
        } else {
            theme.muted()
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(" / Search ");

        let line = if self.query.is_empty() && !self.editing {
            Line::styled(format!(" {PLACEHOLDER}"), theme.muted())
        } else {
            let mut spans = vec![Span::raw(" "), Span::styled(self.query.as_str(), theme.heading())];
            if self.editing {
                spans.push(Span::styled("▏", theme.accent()));
            }
            Line::from(spans)
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        self.render_search(f, search_area, &theme);

        let entries = self.entries(&ctx.catalog);
        if entries.is_empty() {
            let message = format!("No songs found matching \"{}\".", self.query);
            f.render_widget(EmptyState::new(&message, &theme), list_area);
            return;
        }
        clamp_selection(&mut self.list_state, entries.len());

        let section = |title: &'static str| {
            ListItem::new(Line::styled(
                title,
                theme.heading().add_modifier(Modifier::UNDERLINED),
            ))
        };

        let mut items = Vec::with_capacity(entries.len() + 2);
        let mut visual_selected = None;
        let selected = self.list_state.selected();

        if self.query.is_empty() {
            items.push(section("Collections"));
        } else {
            items.push(section("Search Results"));
        }

        let mut songs_started = false;
        for (i, entry) in entries.iter().enumerate() {
            match entry {
                HomeEntry::Category(category) => {
                    items.push(ListItem::new(Line::from(vec![
                        Span::styled("  ♫ ", theme.accent()),
                        Span::styled(category.label(), theme.heading()),
                    ])));
                }
                HomeEntry::Song(song) => {
                    if self.query.is_empty() && !songs_started {
                        items.push(ListItem::new(Line::default()));
                        items.push(section("New & Trending"));
                        songs_started = true;
                    }
                    items.push(song_item(song, state.favorites.contains(&song.id), &theme));
                }
            }
            if selected == Some(i) {
                visual_selected = Some(items.len() - 1);
            }
        }

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        let mut visual_state = ListState::default().with_selected(visual_selected);
        f.render_stateful_widget(list, list_area, &mut visual_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.editing {
            self.handle_edit_key(key);
            return Some(Action::None);
        }

        if key.code == KeyCode::Char('/') {
            self.editing = true;
            return Some(Action::None);
        }

        if key.code == KeyCode::Esc && !self.query.is_empty() {
            self.set_query(String::new());
            return Some(Action::None);
        }

        let entries = self.entries(&ctx.catalog);
        clamp_selection(&mut self.list_state, entries.len());
        match handle_list_key(&mut self.list_state, key, entries.len()) {
            ListKey::Activate(i) => match entries.into_iter().nth(i) {
                Some(HomeEntry::Category(category)) => Some(Action::SelectCategory(category)),
                Some(HomeEntry::Song(song)) => Some(Action::SelectSong(song)),
                None => None,
            },
            ListKey::Moved => Some(Action::None),
            ListKey::Ignored => None,
        }
    }
}
