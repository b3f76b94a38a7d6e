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

//! Event routing for the tag dialog.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{
    TagDialog, TagDialogAction,
    tag_dialog::{DialogPane, available_tags, step},
};

impl TagDialog {
    /// Handles a key while the dialog is open. The dialog is modal, so every
    /// key is consumed.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        custom_tags: &[String],
        attached: &[String],
    ) -> TagDialogAction {
        let Event::Key(key_event) = event else {
            return TagDialogAction::Handled;
        };

        match key_event.code {
            KeyCode::Esc => return TagDialogAction::Close,
            KeyCode::Tab => {
                self.next_pane();
                return TagDialogAction::Handled;
            }
            _ => {}
        }

        match self.pane() {
            DialogPane::NewTag => match key_event.code {
                KeyCode::Enter => {
                    let name = self.input.value().trim().to_string();
                    self.input.reset();
                    if name.is_empty() {
                        TagDialogAction::Close
                    } else {
                        TagDialogAction::Attach(name)
                    }
                }
                _ => {
                    self.input.handle_event(event);
                    TagDialogAction::Handled
                }
            },

            DialogPane::Available => {
                let available = available_tags(custom_tags, attached);
                match key_event.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.available_cursor = step(self.available_cursor, available.len(), true);
                        TagDialogAction::Handled
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.available_cursor = step(self.available_cursor, available.len(), false);
                        TagDialogAction::Handled
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => self
                        .available_cursor(available.len())
                        .map_or(TagDialogAction::Handled, |i| {
                            TagDialogAction::Attach(available[i].to_string())
                        }),
                    _ => TagDialogAction::Handled,
                }
            }

            DialogPane::Attached => match key_event.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.attached_cursor = step(self.attached_cursor, attached.len(), true);
                    TagDialogAction::Handled
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.attached_cursor = step(self.attached_cursor, attached.len(), false);
                    TagDialogAction::Handled
                }
                KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => self
                    .attached_cursor(attached.len())
                    .map_or(TagDialogAction::Handled, |i| {
                        TagDialogAction::Detach(attached[i].clone())
                    }),
                _ => TagDialogAction::Handled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn typed_tag_is_attached() {
        let mut dialog = TagDialog::new(4);
        for c in "Road Trip".chars() {
            dialog.handle_event(&key(KeyCode::Char(c)), &[], &[]);
        }

        assert_eq!(
            dialog.handle_event(&key(KeyCode::Enter), &[], &[]),
            TagDialogAction::Attach("Road Trip".to_string())
        );
        assert_eq!(dialog.input.value(), "");
    }

    #[test]
    fn enter_on_empty_input_closes() {
        let mut dialog = TagDialog::new(4);
        assert_eq!(dialog.handle_event(&key(KeyCode::Enter), &[], &[]), TagDialogAction::Close);
    }

    #[test]
    fn available_excludes_attached() {
        let custom = strings(&["favorite", "gym", "live"]);
        let attached = strings(&["gym"]);

        assert_eq!(available_tags(&custom, &attached), ["favorite", "live"]);

        let mut dialog = TagDialog::new(4);
        dialog.handle_event(&key(KeyCode::Tab), &custom, &attached);
        dialog.handle_event(&key(KeyCode::Down), &custom, &attached);

        assert_eq!(
            dialog.handle_event(&key(KeyCode::Enter), &custom, &attached),
            TagDialogAction::Attach("live".to_string())
        );
    }

    #[test]
    fn detaches_from_attached_pane() {
        let attached = strings(&["gym", "favorite"]);
        let mut dialog = TagDialog::new(4);
        dialog.handle_event(&key(KeyCode::Tab), &[], &attached);
        dialog.handle_event(&key(KeyCode::Tab), &[], &attached);
        dialog.handle_event(&key(KeyCode::Up), &[], &attached);

        assert_eq!(
            dialog.handle_event(&key(KeyCode::Delete), &[], &attached),
            TagDialogAction::Detach("favorite".to_string())
        );
    }

    #[test]
    fn empty_lists_do_nothing() {
        let mut dialog = TagDialog::new(4);
        dialog.handle_event(&key(KeyCode::Tab), &[], &[]);
        assert_eq!(dialog.handle_event(&key(KeyCode::Enter), &[], &[]), TagDialogAction::Handled);

        dialog.handle_event(&key(KeyCode::Tab), &[], &[]);
        assert_eq!(dialog.handle_event(&key(KeyCode::Enter), &[], &[]), TagDialogAction::Handled);
    }

    #[test]
    fn escape_closes_from_any_pane() {
        let mut dialog = TagDialog::new(4);
        dialog.handle_event(&key(KeyCode::Tab), &[], &[]);
        assert_eq!(dialog.handle_event(&key(KeyCode::Esc), &[], &[]), TagDialogAction::Close);
    }
}
