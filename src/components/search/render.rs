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
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchBox, render::icons::ICON_SEARCH, theme::Theme};

impl SearchBox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} Search ", ICON_SEARCH));

        let inner = block.inner(area);

        let line = if self.input.value().is_empty() && !self.is_active {
            Line::from(Span::styled(
                "Search songs, streamers, or tags...  (/)",
                Style::default().fg(theme.muted_colour).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(self.input.value(), Style::default().fg(theme.text_colour)))
        };

        f.render_widget(Paragraph::new(line).block(block), area);

        if self.is_active {
            let cursor_x = inner.x + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}
