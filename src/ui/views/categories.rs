use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState},
};

use crate::ui::{
    context::AppContext,
    state::AppState,
    theme::Theme,
    traits::{Action, View},
    util::{ListKey, clamp_selection, handle_list_key},
};

#[derive(Default)]
pub struct CategoryList {
    list_state: ListState,
}

impl View for CategoryList {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let categories = ctx.catalog.categories();
        clamp_selection(&mut self.list_state, categories.len());

        let items: Vec<ListItem> = categories
            .iter()
            .map(|category| {
                ListItem::new(Text::from(vec![
                    Line::from(vec![
                        Span::styled("┃ ", theme.accent()),
                        Span::styled(category.label(), theme.heading()),
                    ]),
                    Line::from(vec![
                        Span::styled("┃ ", theme.accent()),
                        Span::styled("BROWSABLE COLLECTION", theme.muted()),
                    ]),
                    Line::default(),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let categories = ctx.catalog.categories();
        clamp_selection(&mut self.list_state, categories.len());
        match handle_list_key(&mut self.list_state, key, categories.len()) {
            ListKey::Activate(i) => Some(Action::SelectCategory(categories[i])),
            ListKey::Moved => Some(Action::None),
            ListKey::Ignored => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{catalog::Category, ui::views::test_support::context};

    #[test]
    fn enter_selects_highlighted_category() {
        let (ctx, _rx) = context();
        let state = AppState::default();
        let mut view = CategoryList::default();

        for _ in 0..2 {
            view.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &state, &ctx);
        }
        let action =
            view.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &state, &ctx);
        assert_eq!(action, Some(Action::SelectCategory(Category::Youth)));
    }
}
