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

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    commander::CommanderAction,
    components::{SearchAction, TagPanelAction},
    events::{AppEvent, handlers::*},
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const SEEK_DELTA: i64 = 5;

/// Maps keyboard input to application actions and playback commands.
///
/// Input is offered, in order, to:
///
/// * **Tag dialog**: modal while open, it consumes every key.
/// * **Command-line**: active after `:`, unless text is being typed elsewhere.
/// * **Search box** and **tag panel**: whichever has focus.
/// * **Global bindings**: playback, paging, row movement, theme.
///
/// # Errors
///
/// Returns an error if an application event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if let Some(dialog) = app.tag_dialog.as_mut() {
        let attached = app.session.song_tags().tags_for(dialog.song_id());
        let action = dialog.handle_event(&event, app.session.tags().custom_tags(), attached);
        handle_tag_dialog_action(app, action);
        return Ok(());
    }

    let typing = app.search_box.is_active || app.tag_panel.editing.is_some();
    if app.commander.active() || !typing {
        match app.commander.handle_event(&event) {
            CommanderAction::Ignored => {}
            CommanderAction::Handled => return Ok(()),
            CommanderAction::Run(command) => return run_command(app, command),
        }
    }

    if app.search_box.is_active {
        let action = app.search_box.handle_event(&event, Instant::now());
        if action != SearchAction::Ignored {
            handle_search_action(app, action);
            return Ok(());
        }
    }

    if app.tag_panel.is_active {
        let action = app.tag_panel.handle_event(&event, app.session.tags().custom_tags());
        if action != TagPanelAction::Ignored {
            handle_tag_panel_action(app, action);
            return Ok(());
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Esc, _) => app.clear_status(),

        // Focus
        (KeyCode::Char('/'), _) => {
            app.tag_panel.is_active = false;
            app.search_box.is_active = true;
        }
        (KeyCode::Char('t'), _) => {
            app.search_box.is_active = false;
            app.tag_panel.is_active = true;
        }
        (KeyCode::Char('a'), _) => open_tag_dialog(app),

        // Navigation
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.browser.next_row(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.browser.previous_row(),
        (KeyCode::Char('n'), _) | (KeyCode::Right, _) => app.browser.next_page(),
        (KeyCode::Char('p'), _) | (KeyCode::Left, _) => app.browser.previous_page(),

        // Tags
        (KeyCode::Char('c'), _) => clear_tags(app),

        // Playback
        (KeyCode::Enter, _) => play_selected(app),
        (KeyCode::Char(' '), _) => app.player.toggle_pause(),
        (KeyCode::Char('s'), _) => app.player.stop(),
        (KeyCode::Char(','), _) => app.player.seek(-SEEK_DELTA),
        (KeyCode::Char('.'), _) => app.player.seek(SEEK_DELTA),
        (KeyCode::Char('<'), _) => play_adjacent(app, false),
        (KeyCode::Char('>'), _) => play_adjacent(app, true),
        (KeyCode::Char('r'), _) => play_random(app),
        (KeyCode::Char('-'), _) => app.player.adjust_volume(-VOLUME_DELTA),
        (KeyCode::Char('='), _) => app.player.adjust_volume(VOLUME_DELTA),
        (KeyCode::Char('_'), _) => app.player.adjust_volume(-FINE_VOLUME_DELTA),
        (KeyCode::Char('+'), _) => app.player.adjust_volume(FINE_VOLUME_DELTA),
        (KeyCode::Char('m'), _) => app.player.toggle_mute(),

        // Player panel
        (KeyCode::Char('y'), _) => app.player_view.toggle_lyrics(),
        (KeyCode::Char('z'), _) => toggle_minimize(app),
        (KeyCode::Char('L'), _) => toggle_lock(app),

        // Theme
        (KeyCode::Char('T'), _) => update_theme(app, |s| s.toggle_mode()),
        (KeyCode::Char('P'), _) => update_theme(app, |s| s.cycle_palette()),

        _ => {}
    }

    Ok(())
}
