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

//! Render the command-line interface.
//!
//! While the command-line is active this shows the typed text and the cursor.
//! Otherwise the same line carries the latest status message, or a short key
//! reference.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str =
    "/ search  t tags  a tag song  Enter play  space pause  < > prev/next  r shuffle  y lyrics  n p page  : command  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    if commander.active() {
        let line = Line::from(vec![
            Span::raw(":"),
            Span::raw(commander.input.value()),
        ]);
        f.render_widget(
            Paragraph::new(line).style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.gauge_track_colour),
            ),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let line = match &app.status {
        Some(status) if status.is_error => {
            Line::from(Span::styled(status.text.as_str(), Style::default().fg(app.theme.error_colour)))
        }
        Some(status) => {
            Line::from(Span::styled(status.text.as_str(), Style::default().fg(app.theme.accent_colour)))
        }
        None => Line::from(Span::styled(KEY_HINT, Style::default().fg(app.theme.muted_colour))),
    };

    f.render_widget(Paragraph::new(line), container[0]);
}
