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
use tracing::{debug, warn};

use crate::{
    App,
    commander::{Command, CommandError},
    components::{SearchAction, TagDialog, TagDialogAction, TagPanelAction},
    error::StoreError,
    events::AppEvent,
    theme::{Theme, ThemeSettings},
    util,
};

pub(super) fn handle_tick(app: &mut App) {
    let now = Instant::now();
    let elapsed = now.saturating_duration_since(app.last_tick);
    app.last_tick = now;

    if app.player.advance(elapsed) {
        let title = app.player.now_playing().map(|p| p.title.clone());
        if let Some(title) = title {
            app.set_status(format!("Finished \"{}\"", title));
        }
    }
}

/// Applies a debounced search term once it is due.
pub(super) fn poll_search(app: &mut App, now: Instant) {
    if let Some(term) = app.search_box.poll(now) {
        apply_search(app, &term);
    }
}

fn apply_search(app: &mut App, term: &str) {
    debug!(term, "Search applied");
    app.browser.apply_search(term, &app.session);
}

/// Reports the outcome of a persisted mutation.
///
/// Returns `true` if the in-memory state changed, which is also the case when
/// only the write failed.
fn report(app: &mut App, result: Result<bool, StoreError>, message: impl FnOnce() -> String) -> bool {
    match result {
        Ok(true) => {
            app.set_status(message());
            true
        }
        Ok(false) => false,
        Err(e) => {
            app.set_error(format!("Could not save tags: {}", e));
            true
        }
    }
}

pub(super) fn add_custom_tag(app: &mut App, name: &str) {
    let result = app.session.add_custom_tag(name);
    if report(app, result, || format!("Added tag #{}", name.trim().to_lowercase())) {
        app.browser.filters_changed(&app.session);
    }
}

pub(super) fn remove_custom_tag(app: &mut App, name: &str) {
    let result = app.session.remove_custom_tag(name);
    if report(app, result, || format!("Removed tag #{}", name.trim().to_lowercase())) {
        app.browser.filters_changed(&app.session);
    } else {
        app.set_error(format!("No custom tag '{}'", name));
    }
}

pub(super) fn toggle_tag(app: &mut App, tag: &str) {
    app.session.toggle_tag(tag);
    app.browser.filters_changed(&app.session);
}

pub(super) fn clear_tags(app: &mut App) {
    if app.session.clear_tags() {
        app.browser.filters_changed(&app.session);
        app.set_status("Showing all songs");
    }
}

pub(super) fn attach_tag(app: &mut App, song_id: u32, name: &str) {
    let result = app.session.add_custom_tag_to_song(song_id, name);
    if report(app, result, || format!("Tagged #{}", name.trim().to_lowercase())) {
        app.browser.filters_changed(&app.session);
    }
}

pub(super) fn detach_tag(app: &mut App, song_id: u32, name: &str) {
    let result = app.session.remove_custom_tag_from_song(song_id, name);
    if report(app, result, || format!("Untagged #{}", name.trim().to_lowercase())) {
        app.browser.filters_changed(&app.session);
    }
}

pub(super) fn open_tag_dialog(app: &mut App) {
    match app.browser.selected_song().map(|s| s.id) {
        Some(id) => app.tag_dialog = Some(TagDialog::new(id)),
        None => app.set_error("No song selected"),
    }
}

pub(super) fn play_selected(app: &mut App) {
    if let Some(song) = app.browser.selected_song() {
        app.player.play(song);
    }
}

pub(super) fn play_adjacent(app: &mut App, forward: bool) {
    let current = app.player.current_song_id();
    if let Some(song) = app.browser.adjacent_song(current, forward) {
        app.player.play(song);
    }
}

pub(super) fn play_random(app: &mut App) {
    let current = app.player.current_song_id();
    if let Some(song) = app.browser.random_song(current) {
        app.player.play(song);
    }
}

pub(super) fn toggle_minimize(app: &mut App) {
    if !app.player_view.toggle_minimize() {
        app.set_status("Player is locked, press L to unlock");
    }
}

pub(super) fn toggle_lock(app: &mut App) {
    app.player_view.toggle_lock();
    app.set_status(if app.player_view.is_locked() { "Player locked" } else { "Player unlocked" });
}

pub(super) fn update_theme(app: &mut App, change: impl FnOnce(&mut ThemeSettings)) {
    change(&mut app.theme_settings);
    app.theme = app.theme_settings.theme();

    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            warn!(error = %e, "Failed to set terminal background");
        }
    }

    match app.theme_settings.save(app.session.store_mut()) {
        Ok(()) => app.set_status(format!(
            "Theme {} ({})",
            app.theme_settings.palette.name(),
            app.theme_settings.mode.name()
        )),
        Err(e) => app.set_error(format!("Could not save theme: {}", e)),
    }
}

pub(super) fn handle_search_action(app: &mut App, action: SearchAction) {
    match action {
        SearchAction::Apply(term) => apply_search(app, &term),
        SearchAction::Leave | SearchAction::Handled | SearchAction::Ignored => {}
    }
}

pub(super) fn handle_tag_panel_action(app: &mut App, action: TagPanelAction) {
    match action {
        TagPanelAction::Toggle(tag) => toggle_tag(app, &tag),
        TagPanelAction::Create(name) => add_custom_tag(app, &name),
        TagPanelAction::Remove(name) => remove_custom_tag(app, &name),
        TagPanelAction::Leave | TagPanelAction::Handled | TagPanelAction::Ignored => {}
    }
}

pub(super) fn handle_tag_dialog_action(app: &mut App, action: TagDialogAction) {
    let Some(song_id) = app.tag_dialog.as_ref().map(TagDialog::song_id) else {
        return;
    };

    match action {
        TagDialogAction::Attach(name) => attach_tag(app, song_id, &name),
        TagDialogAction::Detach(name) => detach_tag(app, song_id, &name),
        TagDialogAction::Close => app.tag_dialog = None,
        TagDialogAction::Handled => {}
    }
}

pub(super) fn run_command(app: &mut App, command: Result<Command, CommandError>) -> Result<()> {
    let command = match command {
        Ok(command) => command,
        Err(e) => {
            app.set_error(e.to_string());
            return Ok(());
        }
    };

    debug!(?command, "Running command");

    match command {
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,

        Command::AddTag(name) => add_custom_tag(app, &name),
        Command::RemoveTag(name) => remove_custom_tag(app, &name),

        Command::Attach(name) => match app.browser.selected_song().map(|s| s.id) {
            Some(id) => attach_tag(app, id, &name),
            None => app.set_error("No song selected"),
        },
        Command::Detach(name) => match app.browser.selected_song().map(|s| s.id) {
            Some(id) => detach_tag(app, id, &name),
            None => app.set_error("No song selected"),
        },

        Command::ClearTags => clear_tags(app),

        Command::Page(page) => {
            app.browser.goto_page(page);
            if app.browser.page() != page {
                let total = app.browser.summary().total_pages.max(1);
                app.set_error(format!("Page {} of {}", app.browser.page(), total));
            }
        }

        Command::Search(term) => {
            app.search_box.set_value(&term);
            apply_search(app, &term);
        }

        Command::Theme(palette) => update_theme(app, |s| s.palette = palette),
        Command::Mode(mode) => update_theme(app, |s| s.mode = mode),
    }

    Ok(())
}
