use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{state::Screen, traits::Action};

/// Global bindings, consulted only after the active view passes on a key.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, active: Screen) -> Option<Action> {
        let tabs_enabled = active != Screen::Lyrics;

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Esc, _) | (KeyCode::Backspace, _) => Some(Action::Back),
            (KeyCode::Tab, _) if tabs_enabled => Some(Action::NextTab),
            (KeyCode::BackTab, _) if tabs_enabled => Some(Action::PreviousTab),
            (KeyCode::Char(c @ '1'..='4'), _) if tabs_enabled => {
                let index = c as usize - '1' as usize;
                Screen::TABS.get(index).copied().map(Action::Navigate)
            }
            _ => None,
        }
    }
}
