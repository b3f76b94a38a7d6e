// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Songdeck.
//!
//! A terminal song catalog for a streamer's performances.
//!
//! Songs can be filtered by tag and searched by title or streamer, browsed a
//! page at a time, tagged with the user's own custom tags, and played back in
//! a simulated player that follows along with the lyrics.
//!
//! ## Architecture
//!
//! * The **Main Thread** manages the terminal lifecycle, applies events to
//!   the application state and renders the UI.
//! * An **Input Thread** forwards terminal events.
//! * A **Tick Thread** drives playback progress and the search debounce.
//!
//! Custom tags, song attachments and the theme are kept in a small SQLite
//! key-value store so they survive restarts.

mod browser;
mod commander;
mod components;
mod config;
mod error;
mod events;
mod model;
mod player;
mod render;
mod session;
mod store;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, File},
    io,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Instant,
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    browser::SongBrowser,
    commander::Commander,
    components::{SearchBox, TagDialog, TagPanel},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::catalog::sample_catalog,
    player::{PlayerView, SimulatedPlayer},
    session::Session,
    store::SqliteStore,
    theme::{Theme, ThemeSettings},
};

/// A one-line message shown in place of the key hints.
struct StatusLine {
    text: String,
    is_error: bool,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme_settings: ThemeSettings,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub session: Session<SqliteStore>,
    pub browser: SongBrowser,
    pub player: SimulatedPlayer,
    pub player_view: PlayerView,

    pub search_box: SearchBox,
    pub tag_panel: TagPanel,
    pub tag_dialog: Option<TagDialog>,
    pub commander: Commander,

    pub status: Option<StatusLine>,
    pub last_tick: Instant,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Result<Self> {
        let database_path = config.database_path();
        if let Some(parent) = database_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let store = SqliteStore::open(&database_path.to_string_lossy())
            .with_context(|| format!("Failed to open {}", database_path.display()))?;

        Ok(Self::with_store(config, store))
    }

    /// Builds application state over an already opened store.
    fn with_store(config: AppConfig, store: SqliteStore) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let session = Session::open(store);
        let theme_settings = ThemeSettings::load(session.store());

        let mut browser = SongBrowser::new(sample_catalog(), config.page_size);
        browser.refresh(&session);

        let search_box = SearchBox::new(config.search_debounce());

        Self {
            theme: theme_settings.theme(),
            theme_settings,
            event_tx,
            event_rx,
            session,
            browser,
            player: SimulatedPlayer::new(),
            player_view: PlayerView::default(),
            search_box,
            tag_panel: TagPanel::new(),
            tag_dialog: None,
            commander: Commander::new(),
            status: None,
            last_tick: Instant::now(),
            config,
        }
    }

    /// Application state over a private in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let store = SqliteStore::open_in_memory().expect("in-memory store");
        Self::with_store(AppConfig::default(), store)
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting songdeck");

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = app.session.flush() {
        error!(error = %e, "Failed to save tags on shutdown");
    }

    info!("Stopped songdeck");

    res.context("Application error occurred")
}

/// Sends log output to the configured log file.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout. The
/// filter defaults to `songdeck=info` and can be overridden with `RUST_LOG`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songdeck=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the current theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            warn!(error = %e, "Failed to set terminal background");
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// Best-effort, failures are ignored.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let read = event::read();
            let failed = read.is_err();

            for event in input_events(read) {
                if tx_keys.send(event).is_err() {
                    return;
                }
            }

            if failed {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick_rate = app.config.tick_rate();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    app.last_tick = Instant::now();

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

/// Maps the outcome of a terminal read to application events.
///
/// Once reading fails no further key can arrive, so the error is followed by
/// a request to exit.
fn input_events(read: io::Result<Event>) -> Vec<AppEvent> {
    match read {
        Ok(Event::Key(key)) => vec![AppEvent::Key(key)],
        Ok(_) => vec![AppEvent::Redraw],
        Err(e) => vec![
            AppEvent::Error(format!("Input error: {}", e)),
            AppEvent::ExitApplication,
        ],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn key_read_becomes_key_event() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let events = input_events(Ok(Event::Key(key)));

        assert!(matches!(events.as_slice(), [AppEvent::Key(k)] if *k == key));
    }

    #[test]
    fn other_reads_redraw() {
        let events = input_events(Ok(Event::Resize(80, 24)));
        assert!(matches!(events.as_slice(), [AppEvent::Redraw]));
    }

    #[test]
    fn failed_read_reports_and_exits() {
        let events = input_events(Err(io::Error::other("tty closed")));

        assert!(matches!(
            events.as_slice(),
            [AppEvent::Error(message), AppEvent::ExitApplication] if message.contains("tty closed")
        ));
    }
}
