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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod header;
pub(crate) mod icons;
mod player;
mod songs;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{
        commander::draw_commander,
        header::draw_header,
        player::{draw_player, player_height},
        songs::{draw_songs, draw_summary},
    },
};

/// Renders the user interface to the terminal frame.
///
/// From top to bottom: header, search box, tag panel, the current page of
/// songs with its pagination summary, the player (its height follows the
/// player view), and the command-line. The tag dialog is drawn over
/// everything while open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(player_height(&app.player_view)),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.search_box.draw(f, outer[1], &app.theme);
    app.tag_panel.draw(f, outer[2], app.session.tags(), &app.theme);

    draw_songs(f, outer[3], app);
    draw_summary(f, outer[4], app);

    draw_player(f, outer[5], app);

    draw_commander(f, outer[6], app);

    if let Some(dialog) = &app.tag_dialog {
        let song_id = dialog.song_id();
        let title = app.browser.song(song_id).map_or("", |s| s.title.as_str());
        dialog.draw(
            f,
            area,
            title,
            app.session.tags().custom_tags(),
            app.session.song_tags().tags_for(song_id),
            &app.theme,
        );
    }
}
