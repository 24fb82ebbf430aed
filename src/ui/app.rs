//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{FRAME_POLL, SPLASH_DURATION};
use crate::dashboard::{Action, DashboardClient};
use crate::events::{Event as DashboardEvent, LogEntry};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::input::{KeyOutcome, handle_key};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Accounts, URLs, forms and the activity log.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Sends user actions to the backend.
    client: DashboardClient,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state; filled in while the splash screen is still showing.
    state: Box<DashboardState>,

    /// Receives snapshots and log entries from dashboard tasks.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Broadcasts shutdown signal to the status poller.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        client: DashboardClient,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        let state = DashboardState::new(client.base_url(), ui_config);
        Self {
            client,
            current_screen: Screen::Splash,
            state: Box::new(state),
            event_receiver,
            shutdown_sender,
        }
    }

    fn quit(&self) {
        let _ = self.shutdown_sender.send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }

        app.state.update();
        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= SPLASH_DURATION {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            app.quit();
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.current_screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => match handle_key(&mut app.state, key) {
                        KeyOutcome::None => {}
                        KeyOutcome::Dispatch(action) => {
                            log::debug!("dispatching {:?}", action);
                            if action == Action::Reload {
                                app.state.add_to_activity_log(LogEntry::info(
                                    "Reloading status, accounts and URLs",
                                ));
                            }
                            app.client.dispatch(action);
                        }
                        KeyOutcome::Quit => {
                            app.quit();
                            return Ok(());
                        }
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
