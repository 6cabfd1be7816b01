use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
};

use crate::ui::{
    app::App,
    components::{header::Header, tab_bar::TabBar},
    state::Screen,
    theme::Theme,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let state = &self.app.state;
        let theme = Theme::for_settings(&state.settings);
        f.buffer_mut().set_style(area, theme.base());

        let tab_height = if state.nav.shows_tab_bar() { 3 } else { 0 };
        let [header_area, content_area, tab_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(tab_height),
        ])
        .areas(area);

        let mut header = Header::new(state.nav.header(), &theme);
        if state.nav.active() == Screen::Lyrics
            && let Some(song) = state.nav.selected_song()
            && state.favorites.contains(&song.id)
        {
            header = header.right(Line::styled("♥ Saved ", theme.accent()));
        }
        f.render_widget(header, header_area);

        let content_area = content_area.inner(ratatui::layout::Margin::new(1, 0));
        self.app
            .router
            .render(f, content_area, &self.app.state, &self.app.ctx);

        if self.app.state.nav.shows_tab_bar() {
            f.render_widget(TabBar::new(self.app.state.nav.active(), &theme), tab_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        catalog::Catalog,
        reader::ReaderConfig,
        store::{MemoryStore, Storage},
        ui::traits::Action,
    };

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                AppLayout::new(app).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn tab_bar_hidden_while_reading() {
        let mut app = App::with_parts(
            Catalog::builtin(),
            Storage::new(MemoryStore::new()),
            ReaderConfig::default(),
        );
        let home = draw(&mut app);
        assert!(home.contains("GraceLyrics"));
        assert!(home.contains("TOPICS"));

        let song = app.ctx.catalog.get("1").cloned().unwrap();
        app.update(Action::SelectSong(song));
        app.update(Action::ToggleFavorite("1".into()));
        let reading = draw(&mut app);
        assert!(reading.contains("Now Reading"));
        assert!(reading.contains("♥ Saved"));
        assert!(!reading.contains("TOPICS"));
    }
}
