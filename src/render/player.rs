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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current song, the
//! current lyric line (or the lyrics panel), the volume and the progress bar.
//! A minimized player keeps only the song line and the progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{MAX_VOLUME, PlayerState, PlayerView, SAMPLE_LYRICS, lyric_window},
    render::icons::{
        ICON_LOCK, ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_STOP, ICON_VOLUME_HIGH, ICON_VOLUME_LOW,
    },
    util,
};

const LYRIC_PANEL_ROWS: u16 = 6;

/// Rows needed by the player panel, borders included.
pub(crate) fn player_height(view: &PlayerView) -> u16 {
    if view.is_minimized() {
        4
    } else if view.shows_lyrics() {
        6 + LYRIC_PANEL_ROWS
    } else {
        7
    }
}

/// Renders the main player widget including song info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let view = &app.player_view;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if view.is_minimized() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner_area);

        draw_song_line(f, chunks[0], app);
        draw_position(f, chunks[1], app);
        return;
    }

    let lyric_rows = if view.shows_lyrics() { LYRIC_PANEL_ROWS } else { 1 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(lyric_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    draw_song_line(f, chunks[0], app);

    if view.shows_lyrics() {
        draw_lyrics_panel(f, chunks[1], app);
    } else {
        let lyric = app
            .player
            .current_lyric()
            .map(|i| SAMPLE_LYRICS[i].text)
            .unwrap_or("");
        f.render_widget(
            Paragraph::new(Span::styled(lyric, Style::default().add_modifier(Modifier::ITALIC)))
                .fg(theme.muted_colour)
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    draw_controls(f, chunks[2], app);
    draw_position(f, chunks[4], app);
}

fn draw_song_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let player = &app.player;

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    match player.now_playing() {
        Some(now_playing) => {
            let icon = match player.state() {
                PlayerState::Playing => ICON_PLAY,
                PlayerState::Paused => ICON_PAUSE,
                PlayerState::Stopped => ICON_STOP,
            };

            let song_line = Line::from(vec![
                Span::styled(format!(" {} ", icon), bold).fg(theme.text_colour),
                Span::styled(now_playing.title.as_str(), bold).fg(theme.accent_colour),
                Span::raw(" by ").fg(theme.text_colour),
                Span::styled(now_playing.streamer.as_str(), bold).fg(theme.accent_colour),
            ]);
            f.render_widget(Paragraph::new(song_line), info_chunks[0]);

            let duration = now_playing.duration.as_secs();
            let time = player.position().as_secs();
            let remaining = duration.saturating_sub(time);

            let time_line = Line::from(vec![
                Span::styled(util::format::format_time(time), bold).fg(theme.accent_colour),
                Span::styled(" / ", bold).fg(theme.text_colour),
                Span::styled(util::format::format_time(duration), bold).fg(theme.accent_colour),
                Span::styled(" (-", bold).fg(theme.text_colour),
                Span::styled(util::format::format_time(remaining), bold).fg(theme.accent_colour),
                Span::styled(")", bold).fg(theme.text_colour),
            ]);
            f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);
        }
        None => {
            f.render_widget(
                Paragraph::new(" Nothing playing, highlight a song and press Enter")
                    .fg(theme.muted_colour),
                info_chunks[0],
            );
        }
    }
}

/// Several lyric lines with the current one highlighted in the middle.
fn draw_lyrics_panel(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let current = app.player.current_lyric();

    let lines: Vec<Line> = lyric_window(SAMPLE_LYRICS.len(), current, usize::from(area.height))
        .map(|i| {
            let style = if Some(i) == current {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_colour)
            };
            Line::styled(SAMPLE_LYRICS[i].text, style)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let player = &app.player;

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(29)])
        .split(area);

    if app.player_view.is_locked() {
        f.render_widget(
            Paragraph::new(format!(" {} locked", ICON_LOCK)).fg(theme.muted_colour),
            control_chunks[0],
        );
    }

    let volume = player.volume();
    let vol_ratio = (player.effective_volume() as f64 / MAX_VOLUME as f64).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(6)])
        .split(control_chunks[1]);

    let volume_icon = if player.is_muted() || volume == 0 {
        ICON_MUTED
    } else if volume < 50 {
        ICON_VOLUME_LOW
    } else {
        ICON_VOLUME_HIGH
    };
    f.render_widget(Paragraph::new(volume_icon).fg(theme.text_colour), volume_layout[0]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let label = if player.is_muted() {
        " muted".to_string()
    } else {
        format!(" {}%", volume)
    };
    let volume_label = Paragraph::new(label)
        .alignment(Alignment::Right)
        .fg(theme.text_colour);
    f.render_widget(volume_label, volume_layout[2]);
}

fn draw_position(f: &mut Frame, area: Rect, app: &App) {
    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.theme.accent_colour).bg(app.theme.gauge_track_colour))
        .ratio(app.player.progress())
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, area);
}
