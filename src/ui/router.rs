use std::sync::Arc;

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    catalog::Song,
    event::events::Event,
    ui::{
        components::empty_state::EmptyState,
        context::AppContext,
        state::{AppState, Screen},
        theme::Theme,
        traits::{Action, View},
        views::{CategoryList, Home, LyricsView, SavedSongs, SettingsView, SongList},
    },
};

/// Maps the active screen to its view. Tab views live for the whole session;
/// the lyrics view exists only while a song is open.
pub struct Router {
    home: Home,
    categories: CategoryList,
    songs: SongList,
    saved: SavedSongs,
    settings: SettingsView,
    lyrics: Option<LyricsView>,
    overlay: Option<Box<dyn View>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            home: Home::new(),
            categories: CategoryList::default(),
            songs: SongList::default(),
            saved: SavedSongs::default(),
            settings: SettingsView::default(),
            lyrics: None,
            overlay: None,
        }
    }

    fn view_for(&mut self, screen: Screen) -> Option<&mut dyn View> {
        match screen {
            Screen::Home => Some(&mut self.home),
            Screen::CategoryList => Some(&mut self.categories),
            Screen::SongList => Some(&mut self.songs),
            Screen::Favorites => Some(&mut self.saved),
            Screen::Settings => Some(&mut self.settings),
            Screen::Lyrics => self.lyrics.as_mut().map(|v| v as &mut dyn View),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        match self.view_for(state.nav.active()) {
            Some(view) => view.render(f, area, state, ctx),
            None => {
                let theme = Theme::for_settings(&state.settings);
                f.render_widget(EmptyState::new("Nothing to show here.", &theme), area);
            }
        }

        if let Some(overlay) = &mut self.overlay {
            overlay.render(f, area, state, ctx);
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(overlay) = &mut self.overlay {
            return overlay.handle_input(key, state, ctx);
        }
        self.view_for(state.nav.active())?
            .handle_input(key, state, ctx)
    }

    pub fn on_event(&mut self, event: &Event, state: &AppState, ctx: &AppContext) -> Option<Action> {
        self.lyrics.as_mut()?.on_event(event, state, ctx)
    }

    /// Replaces any open lyrics session. The old one's loops die with it.
    pub fn open_lyrics(&mut self, song: Arc<Song>, session: u64) {
        self.lyrics = Some(LyricsView::new(song, session));
    }

    pub fn close_lyrics(&mut self) {
        self.lyrics = None;
    }

    pub fn lyrics(&self) -> Option<&LyricsView> {
        self.lyrics.as_ref()
    }

    pub fn lyrics_mut(&mut self) -> Option<&mut LyricsView> {
        self.lyrics.as_mut()
    }

    pub fn reset_song_list(&mut self) {
        self.songs.reset();
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
