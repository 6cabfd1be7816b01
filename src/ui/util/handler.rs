use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    share::ShareOutcome,
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

enum Incoming {
    Terminal(TerminalEvent),
    App(Event),
}

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal or background event, then drains whatever
    /// else is already queued so a burst of ticks costs one redraw.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        let incoming = tokio::select! {
            Some(evt) = tui.next() => Incoming::Terminal(evt),
            Ok(evt) = app.event_rx.recv_async() => Incoming::App(evt),
            else => {
                app.should_quit = true;
                return Ok(());
            }
        };

        match incoming {
            Incoming::Terminal(evt) => Self::handle_event(app, evt, tui)?,
            Incoming::App(evt) => Self::handle_action(app, evt),
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Closed => {
                warn!("Terminal input closed");
                app.should_quit = true;
            }
            TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
        }
        Ok(())
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::ShareFinished { title, result } => match result {
                Ok(ShareOutcome::Shared) => info!(%title, "Song shared"),
                Ok(ShareOutcome::Cancelled) => debug!(%title, "Share cancelled"),
                Err(e) => warn!(%title, "Failed to share song: {}", e),
            },
            evt => app.handle_event(evt),
        }
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers.contains(KeyModifiers::CONTROL) {
            app.update(Action::Quit);
            return;
        }

        if let Some(action) = app.router.handle_input(evt, &app.state, &app.ctx) {
            app.update(action);
            return;
        }

        if let Some(action) = InputHandler::handle_key(evt, app.state.nav.active()) {
            app.update(action);
        }
    }
}
