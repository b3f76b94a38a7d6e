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

//! Event routing for the search box.

use std::time::Instant;

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBox};

impl SearchBox {
    pub(crate) fn handle_event(&mut self, event: &Event, now: Instant) -> SearchAction {
        let Event::Key(key_event) = event else {
            return SearchAction::Ignored;
        };

        if !self.is_active {
            return SearchAction::Ignored;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.is_active = false;
                SearchAction::Leave
            }

            KeyCode::Enter => {
                self.is_active = false;
                self.debouncer.cancel();
                SearchAction::Apply(self.input.value().to_string())
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);

                let value = self.input.value();
                if value == before {
                    SearchAction::Handled
                } else if value.is_empty() {
                    self.debouncer.cancel();
                    SearchAction::Apply(String::new())
                } else {
                    self.debouncer.push(value.to_string(), now);
                    SearchAction::Handled
                }
            }
        }
    }
}
