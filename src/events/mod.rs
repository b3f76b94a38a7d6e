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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes key presses to the focused component, the
//!   command-line, or the global key bindings.
//! * [`handlers`]: Applies the resulting actions to the session, the song
//!   browser, the player and the theme.

mod handlers;
mod key_handlers;

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{error, info};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// Periodic clock for playback progress and debounced search.
    Tick,

    /// Redraw without changing state, e.g. after a terminal resize.
    Redraw,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => {
                info!("Exit requested");
                break;
            }
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Tick => handlers::handle_tick(app),
            AppEvent::Redraw => {}
            AppEvent::Error(message) => {
                error!(%message, "Background error");
                app.set_error(message);
            }
        }

        handlers::poll_search(app, Instant::now());

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
