use std::sync::Arc;

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{List, ListItem, ListState},
};

use crate::{
    catalog::Song,
    ui::{
        components::{empty_state::EmptyState, song_card::song_item},
        context::AppContext,
        state::AppState,
        theme::Theme,
        traits::{Action, View},
        util::{ListKey, clamp_selection, handle_list_key},
    },
};

/// Songs of the selected category. Without a category it shows the empty state.
#[derive(Default)]
pub struct SongList {
    list_state: ListState,
}

impl SongList {
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }

    fn songs(state: &AppState, ctx: &AppContext) -> Vec<Arc<Song>> {
        state
            .nav
            .selected_category()
            .map(|category| ctx.catalog.in_category(category))
            .unwrap_or_default()
    }
}

impl View for SongList {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let songs = Self::songs(state, ctx);

        if songs.is_empty() {
            f.render_widget(
                EmptyState::new("No songs in this collection yet.", &theme),
                area,
            );
            return;
        }
        clamp_selection(&mut self.list_state, songs.len());

        let items: Vec<ListItem> = songs
            .iter()
            .map(|song| song_item(song, state.favorites.contains(&song.id), &theme))
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let songs = Self::songs(state, ctx);
        clamp_selection(&mut self.list_state, songs.len());
        match handle_list_key(&mut self.list_state, key, songs.len()) {
            ListKey::Activate(i) => songs.into_iter().nth(i).map(Action::SelectSong),
            ListKey::Moved => Some(Action::None),
            ListKey::Ignored => None,
        }
    }
}
