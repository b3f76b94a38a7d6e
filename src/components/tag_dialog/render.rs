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
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    components::{
        TagDialog,
        tag_dialog::{DialogPane, available_tags},
    },
    theme::Theme,
};

impl TagDialog {
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        song_title: &str,
        custom_tags: &[String],
        attached: &[String],
        theme: &Theme,
    ) {
        let area = centered(area, 60, 16);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1))
            .title(format!(" Tag \"{}\" ", song_title))
            .title_bottom(" Tab switch  Enter add  d remove  Esc close ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let input_active = self.pane() == DialogPane::NewTag;
        let input_block = pane_block(" New tag ", input_active, theme);
        let input_inner = input_block.inner(chunks[0]);
        f.render_widget(
            Paragraph::new(Span::styled(self.input.value(), Style::default().fg(theme.text_colour)))
                .block(input_block),
            chunks[0],
        );
        if input_active {
            let cursor_x = input_inner.x + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(input_inner.right().saturating_sub(1)), input_inner.y));
        }

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let available = available_tags(custom_tags, attached);
        draw_list(
            f,
            lists[0],
            " Custom tags ",
            &available,
            self.available_cursor(available.len()),
            self.pane() == DialogPane::Available,
            theme,
        );

        let attached: Vec<&str> = attached.iter().map(String::as_str).collect();
        draw_list(
            f,
            lists[1],
            " On this song ",
            &attached,
            self.attached_cursor(attached.len()),
            self.pane() == DialogPane::Attached,
            theme,
        );
    }
}

fn pane_block(title: &str, active: bool, theme: &Theme) -> Block<'static> {
    let colour = if active { theme.accent_colour } else { theme.border_colour };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .title(title.to_string())
}

fn draw_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    tags: &[&str],
    cursor: Option<usize>,
    active: bool,
    theme: &Theme,
) {
    let items: Vec<ListItem> = if tags.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "(none)",
            Style::default().fg(theme.muted_colour),
        )))]
    } else {
        tags.iter().map(|t| ListItem::new(format!("#{}", t))).collect()
    };

    let list = List::new(items)
        .block(pane_block(title, active, theme))
        .style(Style::default().fg(theme.text_colour))
        .highlight_style(Style::default().bg(theme.highlight_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if active {
        state.select(cursor);
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
