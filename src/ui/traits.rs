use std::sync::Arc;

use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    catalog::{Category, Song},
    event::events::Event,
    store::Settings,
    ui::{context::AppContext, state::AppState, state::Screen},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Screen),
    NextTab,
    PreviousTab,
    SelectCategory(Category),
    SelectSong(Arc<Song>),
    Back,
    ToggleFavorite(String),
    Share(Arc<Song>),
    UpdateSettings(Settings),
    DismissOverlay,
    /// Key consumed by the view with nothing further to do.
    None,
}

pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    /// First pick at a key. `None` lets the global bindings have it.
    fn handle_input(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext)
    -> Option<Action>;

    fn on_event(&mut self, _event: &Event, _state: &AppState, _ctx: &AppContext) -> Option<Action> {
        None
    }
}
