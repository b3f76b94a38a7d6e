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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, render::icons::ICON_MUSIC};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            format!("{} SongDeck", ICON_MUSIC),
            Style::default().fg(app.theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  streamer song catalog", Style::default().fg(app.theme.muted_colour)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let settings = &app.theme_settings;
    let theme = Line::from(vec![
        Span::styled("\u{25CF} ", Style::default().fg(app.theme.accent_colour)),
        Span::styled(
            format!("{} / {}  (P, T)", settings.palette.name(), settings.mode.name()),
            Style::default().fg(app.theme.muted_colour),
        ),
    ]);
    f.render_widget(Paragraph::new(theme).alignment(Alignment::Right), chunks[1]);
}
