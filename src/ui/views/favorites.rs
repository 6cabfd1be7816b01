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

#[derive(Default)]
pub struct SavedSongs {
    list_state: ListState,
}

impl SavedSongs {
    fn songs(state: &AppState, ctx: &AppContext) -> Vec<Arc<Song>> {
        ctx.catalog
            .filter_favorites(|id| state.favorites.contains(id))
    }
}

impl View for SavedSongs {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let songs = Self::songs(state, ctx);

        if songs.is_empty() {
            f.render_widget(
                EmptyState::new("No saved songs yet", &theme)
                    .hint("Press f while reading a song to save it here."),
                area,
            );
            return;
        }
        clamp_selection(&mut self.list_state, songs.len());

        let items: Vec<ListItem> = songs
            .iter()
            .map(|song| song_item(song, true, &theme))
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
