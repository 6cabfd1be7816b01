use std::sync::Arc;

use tracing::debug;

use crate::{
    catalog::{Category, Song},
    store::{Favorites, Settings},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    CategoryList,
    SongList,
    Favorites,
    Settings,
    Lyrics,
}

impl Screen {
    /// Screens reachable from the tab bar, in display order.
    pub const TABS: [Screen; 4] = [
        Screen::Home,
        Screen::CategoryList,
        Screen::Favorites,
        Screen::Settings,
    ];

    pub fn tab_index(self) -> Option<usize> {
        Self::TABS.iter().position(|s| *s == self)
    }

    pub fn tab_label(self) -> Option<&'static str> {
        match self {
            Screen::Home => Some("Home"),
            Screen::CategoryList => Some("Topics"),
            Screen::Favorites => Some("Saved"),
            Screen::Settings => Some("Config"),
            Screen::SongList | Screen::Lyrics => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpec {
    pub title: &'static str,
    pub has_back: bool,
}

/// Which screen is showing plus the drill-down selection needed to draw it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Screen,
    selected_category: Option<Category>,
    selected_song: Option<Arc<Song>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn selected_song(&self) -> Option<&Arc<Song>> {
        self.selected_song.as_ref()
    }

    /// Tab switch. Going home drops the drill-down context.
    pub fn select_nav(&mut self, screen: Screen) {
        self.go(screen);
        if screen == Screen::Home {
            self.selected_category = None;
            self.selected_song = None;
        }
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected_category = Some(category);
        self.go(Screen::SongList);
    }

    pub fn select_song(&mut self, song: Arc<Song>) {
        self.selected_song = Some(song);
        self.go(Screen::Lyrics);
    }

    /// Returns false when the active screen has no back target.
    pub fn back(&mut self) -> bool {
        match self.active {
            Screen::SongList => self.go(Screen::CategoryList),
            Screen::Lyrics if self.selected_category.is_some() => self.go(Screen::SongList),
            Screen::Lyrics => self.select_nav(Screen::Home),
            _ => return false,
        }
        true
    }

    pub fn shows_tab_bar(&self) -> bool {
        self.active != Screen::Lyrics
    }

    pub fn header(&self) -> HeaderSpec {
        let (title, has_back) = match self.active {
            Screen::Home => ("GraceLyrics", false),
            Screen::CategoryList => ("Song Categories", false),
            Screen::Favorites => ("My Saved Songs", false),
            Screen::Settings => ("Settings", false),
            Screen::SongList => (
                self.selected_category.map_or("Songs", Category::label),
                true,
            ),
            Screen::Lyrics => ("Now Reading", true),
        };
        HeaderSpec { title, has_back }
    }

    /// Tab after the current one. Off-tab screens restart from the first tab.
    pub fn next_tab(&self) -> Screen {
        let next = self
            .active
            .tab_index()
            .map_or(0, |i| (i + 1) % Screen::TABS.len());
        Screen::TABS[next]
    }

    pub fn previous_tab(&self) -> Screen {
        let len = Screen::TABS.len();
        let prev = self
            .active
            .tab_index()
            .map_or(len - 1, |i| (i + len - 1) % len);
        Screen::TABS[prev]
    }

    fn go(&mut self, screen: Screen) {
        if self.active != screen {
            debug!(from = ?self.active, to = ?screen, "Navigating");
        }
        self.active = screen;
    }
}

/// Session state handed to every view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: Navigator,
    pub settings: Settings,
    pub favorites: Favorites,
}
