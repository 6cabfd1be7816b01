use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;

use crate::{
    catalog::Song,
    event::events::Event,
    reader::{AutoScroll, FrameOutcome, PlaybackSim, TickOutcome, Viewport},
    store::Settings,
    ui::{
        components::{
            lyrics::{LyricsWidget, column_width, wrap_lines},
            progress::PlaybackBar,
        },
        context::AppContext,
        state::AppState,
        theme::Theme,
        traits::{Action, View},
    },
    util::task::{TaskKey, TaskManager, spawn_ticker},
};

/// Reading screen for one song. Owns both timing loops; dropping the view
/// aborts them and any ticks still queued are rejected by session id.
pub struct LyricsView {
    song: Arc<Song>,
    session: u64,
    scroll: AutoScroll,
    playback: PlaybackSim,
    viewport: Viewport,
    tasks: TaskManager,
    rows: Vec<String>,
    wrapped_for: Option<(u16, i32)>,
    row_height: f64,
}

impl LyricsView {
    pub fn new(song: Arc<Song>, session: u64) -> Self {
        debug!(song = %song.id, session, "Opening lyrics");
        Self {
            song,
            session,
            scroll: AutoScroll::new(),
            playback: PlaybackSim::new(),
            viewport: Viewport::default(),
            tasks: TaskManager::new(),
            rows: Vec::new(),
            wrapped_for: None,
            row_height: 1.0,
        }
    }

    pub fn song(&self) -> &Arc<Song> {
        &self.song
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.scroll.is_running()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn progress(&self) -> f64 {
        self.playback.progress()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.tasks.is_active(key)
    }

    /// Re-wraps the lyrics for a text area and re-measures the viewport.
    pub fn measure(&mut self, width: u16, height: u16, font_size: i32, ctx: &AppContext) {
        let column = column_width(width, font_size);
        if self.wrapped_for != Some((column, font_size)) {
            self.rows = wrap_lines(&self.song.lyrics, column);
            self.wrapped_for = Some((column, font_size));
        }

        self.row_height = f64::from(font_size.max(1)) * ctx.reader.line_height;
        self.viewport.measure(
            self.rows.len() as f64 * self.row_height,
            f64::from(height) * self.row_height,
        );
    }

    fn first_row(&self) -> usize {
        (self.viewport.offset() / self.row_height).floor() as usize
    }

    pub fn toggle_auto_scroll(&mut self, speed: i32, ctx: &AppContext) {
        if self.scroll.is_running() {
            self.scroll.stop();
            self.tasks.abort(TaskKey::AutoScroll);
        } else {
            self.scroll.start();
            self.schedule_frames(speed, ctx);
        }
    }

    pub fn toggle_playback(&mut self, ctx: &AppContext) {
        if !self.playback.toggle() {
            self.tasks.abort(TaskKey::Playback);
            return;
        }

        let session = self.session;
        let generation = self.playback.generation();
        self.tasks.spawn(
            TaskKey::Playback,
            spawn_ticker(ctx.reader.playback_interval, ctx.event_tx.clone(), move |_| {
                Event::PlaybackTick {
                    session,
                    generation,
                }
            }),
        );
    }

    /// Speed is read on every frame, so a live ticker just keeps going. Zero parks
    /// a running auto-scroll without a ticker; leaving zero brings one back.
    pub fn on_settings_changed(&mut self, old: &Settings, new: &Settings, ctx: &AppContext) {
        if old.auto_scroll_speed == new.auto_scroll_speed || !self.scroll.is_running() {
            return;
        }
        if new.auto_scroll_speed <= 0 || !self.tasks.is_active(TaskKey::AutoScroll) {
            self.schedule_frames(new.auto_scroll_speed, ctx);
        }
    }

    fn schedule_frames(&mut self, speed: i32, ctx: &AppContext) {
        if speed <= 0 {
            self.tasks.abort(TaskKey::AutoScroll);
            return;
        }

        let session = self.session;
        let generation = self.scroll.generation();
        self.tasks.spawn(
            TaskKey::AutoScroll,
            spawn_ticker(ctx.reader.frame_interval, ctx.event_tx.clone(), move |at| {
                Event::ScrollFrame {
                    session,
                    generation,
                    at,
                }
            }),
        );
    }

    fn scroll_rows(&mut self, rows: f64) {
        self.viewport.scroll_by(rows * self.row_height);
    }

    fn render_meta(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let song = &self.song;
        let lines = vec![
            Line::styled(song.category.label().to_uppercase(), theme.accent()),
            Line::styled(song.title.as_str(), theme.heading()),
            Line::styled(
                song.artist.as_str(),
                theme.muted().add_modifier(Modifier::ITALIC),
            ),
        ];
        f.render_widget(Paragraph::new(lines).centered(), area);
    }

    fn render_hints(&self, f: &mut Frame, area: Rect, is_favorite: bool, theme: &Theme) {
        let key = |k: &'static str| Span::styled(k, theme.accent());
        let label = |l: &'static str| Span::styled(l, theme.muted());

        let line = Line::from(vec![
            key("[a] "),
            label(if self.scroll.is_running() {
                "Auto-scroll on  "
            } else {
                "Auto-scroll  "
            }),
            key("[space] "),
            label(if self.playback.is_playing() {
                "Pause  "
            } else {
                "Play  "
            }),
            key("[f] "),
            label(if is_favorite { "Saved ♥  " } else { "Save  " }),
            key("[s] "),
            label("Share  "),
            key("[+/-] "),
            label("Speed"),
        ]);
        f.render_widget(Paragraph::new(line).centered(), area);
    }
}

impl View for LyricsView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let theme = Theme::for_settings(&state.settings);
        let [meta_area, player_area, text_area, hint_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_meta(f, meta_area, &theme);
        f.render_widget(
            PlaybackBar::new(
                self.playback.is_playing(),
                self.playback.progress(),
                &theme,
            ),
            player_area,
        );

        self.measure(
            text_area.width,
            text_area.height,
            state.settings.font_size,
            ctx,
        );
        let column = column_width(text_area.width, state.settings.font_size);
        f.render_widget(
            LyricsWidget::new(&self.rows, self.first_row(), column).style(theme.base()),
            text_area,
        );

        let is_favorite = state.favorites.contains(&self.song.id);
        self.render_hints(f, hint_area, is_favorite, &theme);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let page = (self.viewport.visible_height() / self.row_height).max(1.0);
        match key.code {
            KeyCode::Char('a') => self.toggle_auto_scroll(state.settings.auto_scroll_speed, ctx),
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_playback(ctx),
            KeyCode::Char('f') => return Some(Action::ToggleFavorite(self.song.id.clone())),
            KeyCode::Char('s') => return Some(Action::Share(self.song.clone())),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                return Some(Action::UpdateSettings(state.settings.step_scroll_speed(1)));
            }
            KeyCode::Char('-') => {
                return Some(Action::UpdateSettings(state.settings.step_scroll_speed(-1)));
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_rows(1.0),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_rows(-1.0),
            KeyCode::PageDown => self.scroll_rows(page),
            KeyCode::PageUp => self.scroll_rows(-page),
            KeyCode::Home => self.viewport.scroll_to(0.0),
            KeyCode::End => self.viewport.scroll_to(self.viewport.max_offset()),
            _ => return None,
        }
        Some(Action::None)
    }

    fn on_event(&mut self, event: &Event, state: &AppState, ctx: &AppContext) -> Option<Action> {
        match *event {
            Event::ScrollFrame {
                session,
                generation,
                at,
            } if session == self.session => {
                let outcome = self.scroll.on_frame(
                    generation,
                    at,
                    state.settings.auto_scroll_speed,
                    &mut self.viewport,
                    &ctx.reader,
                );
                if outcome == FrameOutcome::ReachedBottom {
                    self.tasks.abort(TaskKey::AutoScroll);
                }
            }
            Event::PlaybackTick {
                session,
                generation,
            } if session == self.session => {
                if self.playback.on_tick(generation, ctx.reader.playback_step)
                    == TickOutcome::Finished
                {
                    self.tasks.abort(TaskKey::Playback);
                }
            }
            _ => {}
        }
        None
    }
}

impl Drop for LyricsView {
    fn drop(&mut self) {
        self.scroll.stop();
        self.playback.pause();
        self.tasks.abort_all();
        debug!(song = %self.song.id, session = self.session, "Closed lyrics");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use flume::Receiver;
    use ratatui::crossterm::event::KeyModifiers;
    use tokio::time;

    use super::*;
    use crate::{catalog::Catalog, ui::views::test_support::context};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open(id: &str, ctx: &AppContext) -> LyricsView {
        let song = Catalog::builtin().get(id).cloned().unwrap();
        let mut view = LyricsView::new(song, 7);
        view.measure(40, 10, 18, ctx);
        view
    }

    fn pump(view: &mut LyricsView, rx: &Receiver<Event>, state: &AppState, ctx: &AppContext) {
        for event in rx.drain() {
            view.on_event(&event, state, ctx);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn auto_scroll_advances_from_scheduled_frames() {
        let (ctx, rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);
        assert!(view.viewport().max_offset() > 0.0);

        view.handle_input(key(KeyCode::Char('a')), &state, &ctx);
        assert!(view.is_auto_scrolling());
        assert!(view.is_scheduled(TaskKey::AutoScroll));

        time::sleep(Duration::from_millis(200)).await;
        pump(&mut view, &rx, &state, &ctx);
        assert!(view.viewport().offset() > 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn toggling_off_stops_movement_immediately() {
        let (ctx, rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);

        view.handle_input(key(KeyCode::Char('a')), &state, &ctx);
        time::sleep(Duration::from_millis(100)).await;
        view.handle_input(key(KeyCode::Char('a')), &state, &ctx);
        assert!(!view.is_scheduled(TaskKey::AutoScroll));

        // Frames queued before the toggle are discarded.
        let frozen = view.viewport().offset();
        pump(&mut view, &rx, &state, &ctx);
        time::sleep(Duration::from_secs(1)).await;
        pump(&mut view, &rx, &state, &ctx);
        assert_eq!(view.viewport().offset(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn short_song_stops_itself_at_bottom() {
        let (ctx, rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);
        view.measure(40, 200, 18, &ctx);
        assert_eq!(view.viewport().max_offset(), 0.0);

        view.toggle_auto_scroll(3, &ctx);
        time::sleep(Duration::from_millis(100)).await;
        pump(&mut view, &rx, &state, &ctx);

        assert!(!view.is_auto_scrolling());
        assert!(!view.is_scheduled(TaskKey::AutoScroll));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_speed_stays_on_without_a_ticker() {
        let (ctx, _rx) = context();
        let mut view = open("1", &ctx);

        view.toggle_auto_scroll(0, &ctx);
        assert!(view.is_auto_scrolling());
        assert!(!view.is_scheduled(TaskKey::AutoScroll));

        let old = Settings {
            auto_scroll_speed: 0,
            ..Settings::default()
        };
        view.on_settings_changed(&old, &Settings::default(), &ctx);
        assert!(view.is_scheduled(TaskKey::AutoScroll));

        view.on_settings_changed(&Settings::default(), &old, &ctx);
        assert!(view.is_auto_scrolling());
        assert!(!view.is_scheduled(TaskKey::AutoScroll));
    }

    #[tokio::test(start_paused = true)]
    async fn playback_runs_to_the_end_and_resets() {
        let (ctx, rx) = context();
        let state = AppState::default();
        let mut view = open("2", &ctx);

        view.handle_input(key(KeyCode::Char(' ')), &state, &ctx);
        assert!(view.is_playing());

        time::sleep(Duration::from_millis(1050)).await;
        pump(&mut view, &rx, &state, &ctx);
        assert_eq!(view.progress(), 5.0);

        time::sleep(Duration::from_secs(20)).await;
        pump(&mut view, &rx, &state, &ctx);
        assert!(!view.is_playing());
        assert_eq!(view.progress(), 0.0);
        assert!(!view.is_scheduled(TaskKey::Playback));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_from_another_session_are_ignored() {
        let (ctx, _rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);
        view.toggle_auto_scroll(5, &ctx);
        view.toggle_playback(&ctx);

        let t0 = Instant::now();
        for i in 0..20u32 {
            view.on_event(
                &Event::ScrollFrame {
                    session: 99,
                    generation: 1,
                    at: t0 + Duration::from_millis(16) * i,
                },
                &state,
                &ctx,
            );
            view.on_event(
                &Event::PlaybackTick {
                    session: 99,
                    generation: 1,
                },
                &state,
                &ctx,
            );
        }
        assert_eq!(view.viewport().offset(), 0.0);
        assert_eq!(view.progress(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_view_silences_both_loops() {
        let (ctx, rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);
        view.handle_input(key(KeyCode::Char('a')), &state, &ctx);
        view.handle_input(key(KeyCode::Char('p')), &state, &ctx);

        time::sleep(Duration::from_millis(250)).await;
        drop(view);
        rx.drain().for_each(drop);

        time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn action_keys_map_to_app_actions() {
        let (ctx, _rx) = context();
        let state = AppState::default();
        let mut view = open("4", &ctx);

        assert_eq!(
            view.handle_input(key(KeyCode::Char('f')), &state, &ctx),
            Some(Action::ToggleFavorite("4".into()))
        );
        assert!(matches!(
            view.handle_input(key(KeyCode::Char('s')), &state, &ctx),
            Some(Action::Share(s)) if s.id == "4"
        ));
        assert!(matches!(
            view.handle_input(key(KeyCode::Char('+')), &state, &ctx),
            Some(Action::UpdateSettings(s)) if s.auto_scroll_speed == 3
        ));
        assert_eq!(view.handle_input(key(KeyCode::Esc), &state, &ctx), None);
    }

    #[tokio::test]
    async fn manual_scroll_is_clamped() {
        let (ctx, _rx) = context();
        let state = AppState::default();
        let mut view = open("1", &ctx);

        view.handle_input(key(KeyCode::Up), &state, &ctx);
        assert_eq!(view.viewport().offset(), 0.0);

        view.handle_input(key(KeyCode::End), &state, &ctx);
        assert_eq!(view.viewport().offset(), view.viewport().max_offset());
        view.handle_input(key(KeyCode::PageDown), &state, &ctx);
        assert_eq!(view.viewport().offset(), view.viewport().max_offset());

        view.handle_input(key(KeyCode::Home), &state, &ctx);
        assert_eq!(view.viewport().offset(), 0.0);
    }
}
