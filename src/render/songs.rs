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

//! UI rendering logic for the song table.
//!
//! This module handles the visual representation of the current page of
//! songs, including column layout, selection highlighting, and the
//! pagination summary beneath the table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    App,
    render::icons::{ICON_LIKES, ICON_PLAY, ICON_VIEWS},
    util::format::{format_tags, format_time},
};

pub(crate) fn draw_songs(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let playing = app.player.current_song_id();
    let song_tags = app.session.song_tags();

    if app.browser.visible().is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Songs ");
        let message = Paragraph::new("No songs match the current filters")
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(message, area);
        return;
    }

    // Rows own their text so the table state can be borrowed mutably below.
    let rows: Vec<Row> = app.browser.visible().iter().map(|song| {
        let indicator = if playing == Some(song.id) {
            Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
        } else {
            Line::from("")
        };

        let custom = song_tags.tags_for(song.id);
        let mut tags = vec![Span::styled(
            format_tags(song.tags.iter().map(String::as_str)),
            Style::default().fg(theme.table_tag_fg),
        )];
        if !custom.is_empty() {
            tags.push(Span::raw(" "));
            tags.push(Span::styled(
                format_tags(custom.iter().map(String::as_str)),
                Style::default().fg(theme.table_custom_tag_fg),
            ));
        }

        Row::new(vec![
            Cell::from(indicator),
            Cell::from(Line::from(song.title.clone()).style(Style::default().fg(theme.table_title_fg))),
            Cell::from(Line::from(song.streamer.clone()).style(Style::default().fg(theme.table_streamer_fg))),
            Cell::from(
                Line::from(format_time(song.duration))
                    .style(Style::default().fg(theme.table_time_fg))
                    .alignment(Alignment::Right),
            ),
            Cell::from(
                Line::from(format!("{} {}", ICON_VIEWS, song.views))
                    .style(Style::default().fg(theme.table_stats_fg))
                    .alignment(Alignment::Right),
            ),
            Cell::from(
                Line::from(format!("{} {}", ICON_LIKES, song.likes))
                    .style(Style::default().fg(theme.table_stats_fg))
                    .alignment(Alignment::Right),
            ),
            Cell::from(""),
            Cell::from(Line::from(tags)),
        ])
    })
    .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(25),
            Constraint::Percentage(18),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(""),
            Cell::from("Title"),
            Cell::from("Streamer"),
            Cell::from(Line::from("Time").alignment(Alignment::Right)),
            Cell::from(Line::from("Views").alignment(Alignment::Right)),
            Cell::from(Line::from("Likes").alignment(Alignment::Right)),
            Cell::from(""),
            Cell::from("Tags"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(theme.highlight_bg).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Songs "),
    );

    f.render_stateful_widget(table, area, &mut app.browser.table_state);
}

pub(crate) fn draw_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.browser.summary();

    let mut spans = vec![Span::styled(summary.describe(), Style::default().fg(app.theme.muted_colour))];

    if summary.total_pages > 1 {
        spans.push(Span::styled(
            format!("   Page {} of {}  (p/n)", summary.page, summary.total_pages),
            Style::default().fg(app.theme.text_colour),
        ));
    }

    if !app.browser.search_term().is_empty() {
        spans.push(Span::styled(
            format!("   search \"{}\"", app.browser.search_term()),
            Style::default().fg(app.theme.accent_colour),
        ));
    }

    if app.search_box.is_pending() {
        spans.push(Span::styled("  ...", Style::default().fg(app.theme.muted_colour)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area.inner(ratatui::layout::Margin::new(1, 0)));
}
