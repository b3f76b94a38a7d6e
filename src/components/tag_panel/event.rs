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

//! Event routing for the tag panel.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::components::{TagPanel, TagPanelAction};

impl TagPanel {
    pub(crate) fn handle_event(&mut self, event: &Event, custom_tags: &[String]) -> TagPanelAction {
        let Event::Key(key_event) = event else {
            return TagPanelAction::Ignored;
        };

        if !self.is_active {
            return TagPanelAction::Ignored;
        }

        if let Some(input) = self.editing.as_mut() {
            return match key_event.code {
                KeyCode::Esc => {
                    self.editing = None;
                    TagPanelAction::Handled
                }
                KeyCode::Enter => {
                    let name = input.value().trim().to_string();
                    self.editing = None;
                    if name.is_empty() {
                        TagPanelAction::Handled
                    } else {
                        TagPanelAction::Create(name)
                    }
                }
                _ => {
                    input.handle_event(event);
                    TagPanelAction::Handled
                }
            };
        }

        let tags = self.tags(custom_tags);
        let current = self.cursor(tags.len()).map(|i| tags[i].to_string());

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('t') => {
                self.is_active = false;
                TagPanelAction::Leave
            }

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.previous_tab();
                TagPanelAction::Handled
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.next_tab();
                TagPanelAction::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_tag(tags.len());
                TagPanelAction::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_tag(tags.len());
                TagPanelAction::Handled
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                current.map_or(TagPanelAction::Handled, TagPanelAction::Toggle)
            }

            KeyCode::Char('+') | KeyCode::Char('i') if self.on_custom_tab() => {
                self.editing = Some(Input::default());
                TagPanelAction::Handled
            }
            KeyCode::Delete | KeyCode::Char('d') if self.on_custom_tab() => {
                current.map_or(TagPanelAction::Handled, TagPanelAction::Remove)
            }

            _ => TagPanelAction::Ignored,
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

    fn active_panel() -> TagPanel {
        let mut panel = TagPanel::new();
        panel.is_active = true;
        panel
    }

    #[test]
    fn toggles_tag_under_cursor() {
        let mut panel = active_panel();

        panel.handle_event(&key(KeyCode::Down), &[]);
        panel.handle_event(&key(KeyCode::Down), &[]);

        assert_eq!(
            panel.handle_event(&key(KeyCode::Enter), &[]),
            TagPanelAction::Toggle("jazz".to_string())
        );
    }

    #[test]
    fn cursor_wraps() {
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::Up), &[]);

        assert_eq!(
            panel.handle_event(&key(KeyCode::Char(' ')), &[]),
            TagPanelAction::Toggle("ambient".to_string())
        );
    }

    #[test]
    fn tabs_wrap_around() {
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::Left), &[]);
        assert!(panel.on_custom_tab());

        panel.handle_event(&key(KeyCode::Right), &[]);
        assert_eq!(panel.tab(), 0);
    }

    #[test]
    fn creates_custom_tag() {
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::BackTab), &[]);

        assert_eq!(panel.handle_event(&key(KeyCode::Char('+')), &[]), TagPanelAction::Handled);
        for c in "gym ".chars() {
            panel.handle_event(&key(KeyCode::Char(c)), &[]);
        }

        assert_eq!(
            panel.handle_event(&key(KeyCode::Enter), &[]),
            TagPanelAction::Create("gym".to_string())
        );
        assert!(panel.editing.is_none());
    }

    #[test]
    fn blank_custom_tag_is_not_created() {
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::BackTab), &[]);
        panel.handle_event(&key(KeyCode::Char('i')), &[]);

        assert_eq!(panel.handle_event(&key(KeyCode::Enter), &[]), TagPanelAction::Handled);
    }

    #[test]
    fn removes_custom_tag() {
        let custom = vec!["favorite".to_string(), "live".to_string()];
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::BackTab), &custom);
        panel.handle_event(&key(KeyCode::Down), &custom);

        assert_eq!(
            panel.handle_event(&key(KeyCode::Char('d')), &custom),
            TagPanelAction::Remove("live".to_string())
        );
    }

    #[test]
    fn delete_only_applies_to_custom_tab() {
        let mut panel = active_panel();
        assert_eq!(panel.handle_event(&key(KeyCode::Char('d')), &[]), TagPanelAction::Ignored);
    }

    #[test]
    fn cursor_is_clamped_when_tags_shrink() {
        let custom = vec!["a".to_string(), "b".to_string()];
        let mut panel = active_panel();
        panel.handle_event(&key(KeyCode::BackTab), &custom);
        panel.handle_event(&key(KeyCode::Down), &custom);

        let shrunk = vec!["a".to_string()];
        assert_eq!(
            panel.handle_event(&key(KeyCode::Enter), &shrunk),
            TagPanelAction::Toggle("a".to_string())
        );
        assert_eq!(panel.handle_event(&key(KeyCode::Enter), &[]), TagPanelAction::Handled);
    }

    #[test]
    fn escape_leaves() {
        let mut panel = active_panel();
        assert_eq!(panel.handle_event(&key(KeyCode::Esc), &[]), TagPanelAction::Leave);
        assert!(!panel.is_active);
    }
}
