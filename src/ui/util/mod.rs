pub mod handler;

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    widgets::ListState,
};

/// Outcome of feeding a key to a vertical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Moved,
    Activate(usize),
    Ignored,
}

/// Shared j/k/arrow/Enter handling for list screens.
pub fn handle_list_key(list_state: &mut ListState, key: KeyEvent, len: usize) -> ListKey {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                let i = list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
                list_state.select(Some(i));
            }
            ListKey::Moved
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if len > 0 {
                let i = list_state.selected().unwrap_or(0).saturating_sub(1);
                list_state.select(Some(i));
            }
            ListKey::Moved
        }
        KeyCode::Enter => match list_state.selected() {
            Some(i) if i < len => ListKey::Activate(i),
            _ if len > 0 => ListKey::Activate(0),
            _ => ListKey::Ignored,
        },
        _ => ListKey::Ignored,
    }
}

/// Keeps the selection inside `0..len`, selecting the first row when unset.
pub fn clamp_selection(list_state: &mut ListState, len: usize) {
    match (len, list_state.selected()) {
        (0, _) => list_state.select(None),
        (_, None) => list_state.select(Some(0)),
        (len, Some(i)) if i >= len => list_state.select(Some(len - 1)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn movement_stays_in_bounds() {
        let mut state = ListState::default();
        clamp_selection(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        handle_list_key(&mut state, key(KeyCode::Up), 3);
        assert_eq!(state.selected(), Some(0));

        for _ in 0..5 {
            handle_list_key(&mut state, key(KeyCode::Char('j')), 3);
        }
        assert_eq!(state.selected(), Some(2));
        assert_eq!(
            handle_list_key(&mut state, key(KeyCode::Enter), 3),
            ListKey::Activate(2)
        );
    }

    #[test]
    fn empty_list_never_activates() {
        let mut state = ListState::default();
        assert_eq!(handle_list_key(&mut state, key(KeyCode::Enter), 0), ListKey::Ignored);
        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
