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

//! UI rendering logic for the tag panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::{components::TagPanel, model::tags::TagFilter, render::icons::ICON_TAG, theme::Theme};

impl TagPanel {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, filter: &TagFilter, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} Tags ", ICON_TAG));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let tabs = Tabs::new(TagPanel::tab_names())
            .select(self.tab())
            .style(Style::default().fg(theme.muted_colour))
            .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[0]);

        f.render_widget(
            Paragraph::new(self.tag_line(filter, theme)).wrap(Wrap { trim: true }),
            chunks[1],
        );

        f.render_widget(Paragraph::new(selected_line(filter, theme)), chunks[2]);
    }

    fn tag_line(&self, filter: &TagFilter, theme: &Theme) -> Line<'static> {
        if let Some(input) = &self.editing {
            return Line::from(vec![
                Span::styled("New tag: ", Style::default().fg(theme.muted_colour)),
                Span::styled(input.value().to_string(), Style::default().fg(theme.text_colour)),
                Span::styled("_", Style::default().fg(theme.accent_colour)),
            ]);
        }

        let tags = self.tags(filter.custom_tags());
        if tags.is_empty() {
            return Line::from(Span::styled(
                "No custom tags yet, press + to add one",
                Style::default().fg(theme.muted_colour).add_modifier(Modifier::ITALIC),
            ));
        }

        let cursor = self.cursor(tags.len());

        let spans = tags.iter().enumerate().flat_map(|(i, tag)| {
            let mut style = if filter.is_selected(tag) {
                Style::default().fg(theme.background_colour).bg(theme.accent_colour)
            } else {
                Style::default().fg(theme.text_colour)
            };
            if self.is_active && cursor == Some(i) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            [Span::styled(format!(" {} ", tag), style), Span::raw(" ")]
        });

        Line::from(spans.collect::<Vec<_>>())
    }
}

fn selected_line(filter: &TagFilter, theme: &Theme) -> Line<'static> {
    let selected = filter.selected_tags();
    if selected.is_empty() {
        return Line::from(Span::styled("All songs", Style::default().fg(theme.muted_colour)));
    }

    let mut spans = vec![Span::styled("Filtering: ", Style::default().fg(theme.muted_colour))];
    spans.extend(selected.iter().map(|tag| {
        Span::styled(format!("#{} ", tag), Style::default().fg(theme.accent_colour))
    }));
    spans.push(Span::styled("(c to clear)", Style::default().fg(theme.muted_colour)));

    Line::from(spans)
}
