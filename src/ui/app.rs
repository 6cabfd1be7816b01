use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use flume::Receiver;
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, Song},
    config::AppConfig,
    event::events::Event,
    reader::ReaderConfig,
    share::{Share, SharePayload},
    store::{FileStore, Settings, Storage},
    ui::{
        context::AppContext,
        layout::AppLayout,
        router::Router,
        state::{AppState, Navigator, Screen},
        traits::Action,
        tui::Tui,
        util::handler::EventHandler,
        views::ShareSheet,
    },
};

pub struct App {
    pub state: AppState,
    pub ctx: AppContext,
    pub router: Router,
    pub storage: Storage,
    pub event_rx: Receiver<Event>,
    pub has_focus: bool,
    pub should_quit: bool,
    next_session: u64,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)
                .wrap_err_with(|| format!("failed to load catalog {}", path.display()))?,
            None => Catalog::builtin(),
        };
        info!(
            songs = catalog.songs().len(),
            data_dir = %config.data_dir.display(),
            "Starting GraceLyrics"
        );

        let storage = Storage::new(FileStore::new(&config.data_dir));
        Ok(Self::with_parts(catalog, storage, config.reader))
    }

    /// Assembles the app without touching the terminal or the environment.
    pub fn with_parts(catalog: Catalog, storage: Storage, reader: ReaderConfig) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let state = AppState {
            nav: Navigator::new(),
            settings: storage.load_settings(),
            favorites: storage.load_favorites(),
        };

        Self {
            state,
            ctx: AppContext {
                catalog: Arc::new(catalog),
                event_tx,
                reader,
            },
            router: Router::new(),
            storage,
            event_rx,
            has_focus: true,
            should_quit: false,
            next_session: 0,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(self.ctx.reader.ui_tick)?;
        tui.enter()?;

        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| self.ui(f))?;
            }
            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.router.close_lyrics();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        AppLayout::new(self).render(frame, area);
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(screen) => self.state.nav.select_nav(screen),
            Action::NextTab => {
                let next = self.state.nav.next_tab();
                self.state.nav.select_nav(next);
            }
            Action::PreviousTab => {
                let previous = self.state.nav.previous_tab();
                self.state.nav.select_nav(previous);
            }
            Action::SelectCategory(category) => {
                self.router.reset_song_list();
                self.state.nav.select_category(category);
            }
            Action::SelectSong(song) => {
                self.next_session += 1;
                self.router.open_lyrics(song.clone(), self.next_session);
                self.state.nav.select_song(song);
            }
            Action::Back => {
                if !self.state.nav.back() {
                    debug!(screen = ?self.state.nav.active(), "Nothing to go back to");
                }
            }
            Action::ToggleFavorite(id) => {
                self.state.favorites = self.storage.toggle_favorite(&id);
            }
            Action::Share(song) => self.share_with(&song, Share::detect()),
            Action::UpdateSettings(settings) => self.apply_settings(settings),
            Action::DismissOverlay => self.router.clear_overlay(),
            Action::None => {}
        }

        self.after_navigation();
    }

    /// Replaces the whole settings record, persists it, and lets an open reader react.
    pub fn apply_settings(&mut self, settings: Settings) {
        let old = self.state.settings;
        if old == settings {
            return;
        }

        self.state.settings = settings;
        self.storage.save_settings(&settings);
        info!(?settings, "Settings updated");

        if let Some(lyrics) = self.router.lyrics_mut() {
            lyrics.on_settings_changed(&old, &settings, &self.ctx);
        }
    }

    pub fn share_with(&mut self, song: &Song, share: Share) {
        let payload = SharePayload::for_song(song);

        match share {
            Share::Available(target) => {
                info!(target = target.name(), song = %song.id, "Sharing song");
                let tx = self.ctx.event_tx.clone();
                tokio::task::spawn_blocking(move || {
                    let result = target.share(&payload);
                    let _ = tx.send(Event::ShareFinished {
                        title: payload.title,
                        result,
                    });
                });
            }
            Share::Unavailable => {
                info!(song = %song.id, "No share target available, showing share sheet");
                self.router.set_overlay(Box::new(ShareSheet::new(payload)));
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Some(action) = self.router.on_event(&event, &self.state, &self.ctx) {
            self.update(action);
        }
    }

    fn after_navigation(&mut self) {
        if self.state.nav.active() != Screen::Lyrics && self.router.lyrics().is_some() {
            self.router.close_lyrics();
        }
    }
}
