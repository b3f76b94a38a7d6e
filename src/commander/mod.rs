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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and parsing the buffer into a [`Command`]
//! when typing is finished and the command is submitted.
//!
//! # Commands
//!
//! | Command            | Effect                                  |
//! |--------------------|-----------------------------------------|
//! | `q`                | Quit                                    |
//! | `tag <name>`       | Create a custom tag                     |
//! | `untag <name>`     | Delete a custom tag                     |
//! | `attach <name>`    | Attach a tag to the highlighted song    |
//! | `detach <name>`    | Detach a tag from the highlighted song  |
//! | `clear`            | Deselect all tags                       |
//! | `page <n>`         | Jump to a page                          |
//! | `search <term...>` | Apply a search term, empty to clear     |
//! | `theme <palette>`  | Switch accent palette                   |
//! | `mode <dark/light>`| Switch light or dark mode               |

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::theme::{Mode, Palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    AddTag(String),
    RemoveTag(String),
    Attach(String),
    Detach(String),
    ClearTags,
    Page(usize),
    Search(String),
    Theme(Palette),
    Mode(Mode),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid page number '{0}'")]
    InvalidPage(String),

    #[error("Unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("Unknown mode '{0}'")]
    UnknownMode(String),
}

/// What the command-line did with an input event.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommanderAction {
    /// The event was not for the command-line.
    Ignored,
    /// The event was consumed, nothing to run.
    Handled,
    /// A command was submitted.
    Run(Result<Command, CommandError>),
}

/// Parses a submitted command-line buffer.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => Ok(Command::Quit),

        ["tag", name @ ..] => joined(name, "tag <name>").map(Command::AddTag),
        ["untag", name @ ..] => joined(name, "untag <name>").map(Command::RemoveTag),
        ["attach", name @ ..] => joined(name, "attach <name>").map(Command::Attach),
        ["detach", name @ ..] => joined(name, "detach <name>").map(Command::Detach),

        ["clear"] => Ok(Command::ClearTags),

        ["page", n] => match n.parse::<usize>() {
            Ok(page) if page > 0 => Ok(Command::Page(page)),
            _ => Err(CommandError::InvalidPage(n.to_string())),
        },
        ["page", ..] => Err(CommandError::Usage("page <n>")),

        ["search", term @ ..] => Ok(Command::Search(term.join(" "))),

        ["theme", name] => Palette::from_name(name)
            .map(Command::Theme)
            .ok_or_else(|| CommandError::UnknownPalette(name.to_string())),
        ["theme", ..] => Err(CommandError::Usage("theme <default|rose|green|blue|purple>")),

        ["mode", name] => Mode::from_name(name)
            .map(Command::Mode)
            .ok_or_else(|| CommandError::UnknownMode(name.to_string())),
        ["mode", ..] => Err(CommandError::Usage("mode <dark|light>")),

        [cmd, ..] => Err(CommandError::Unknown(cmd.to_string())),

        [] => Err(CommandError::Usage("<command> [args]")),
    }
}

fn joined(parts: &[&str], usage: &'static str) -> Result<String, CommandError> {
    if parts.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(parts.join(" "))
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> CommanderAction {
        let Event::Key(key_event) = event else {
            return CommanderAction::Ignored;
        };

        if !self.active {
            return match key_event.code {
                KeyCode::Char(':') => {
                    self.active = true;
                    CommanderAction::Handled
                }
                _ => CommanderAction::Ignored,
            };
        }

        match key_event.code {
            KeyCode::Esc => {
                self.close();
                CommanderAction::Handled
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                if buffer.is_empty() {
                    CommanderAction::Handled
                } else {
                    CommanderAction::Run(parse_command(&buffer))
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                CommanderAction::Handled
            }
        }
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(commander: &mut Commander, text: &str) {
        for c in text.chars() {
            commander.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("tag Road Trip"), Ok(Command::AddTag("Road Trip".into())));
        assert_eq!(parse_command("untag gym"), Ok(Command::RemoveTag("gym".into())));
        assert_eq!(parse_command("attach favorite"), Ok(Command::Attach("favorite".into())));
        assert_eq!(parse_command("detach favorite"), Ok(Command::Detach("favorite".into())));
        assert_eq!(parse_command("clear"), Ok(Command::ClearTags));
        assert_eq!(parse_command("page 2"), Ok(Command::Page(2)));
        assert_eq!(parse_command("search rainy  day"), Ok(Command::Search("rainy day".into())));
        assert_eq!(parse_command("search"), Ok(Command::Search(String::new())));
        assert_eq!(parse_command("theme rose"), Ok(Command::Theme(Palette::Rose)));
        assert_eq!(parse_command("mode light"), Ok(Command::Mode(Mode::Light)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown("dance".into())));
        assert_eq!(parse_command("tag"), Err(CommandError::Usage("tag <name>")));
        assert_eq!(parse_command("page 0"), Err(CommandError::InvalidPage("0".into())));
        assert_eq!(parse_command("page two"), Err(CommandError::InvalidPage("two".into())));
        assert_eq!(parse_command("theme teal"), Err(CommandError::UnknownPalette("teal".into())));
        assert_eq!(parse_command("mode dim"), Err(CommandError::UnknownMode("dim".into())));
    }

    #[test]
    fn inactive_ignores_keys_until_colon() {
        let mut commander = Commander::new();

        assert_eq!(commander.handle_event(&key(KeyCode::Char('q'))), CommanderAction::Ignored);
        assert_eq!(commander.handle_event(&key(KeyCode::Char(':'))), CommanderAction::Handled);
        assert!(commander.active());
    }

    #[test]
    fn enter_runs_and_closes() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')));
        type_str(&mut commander, "page 2");

        assert_eq!(
            commander.handle_event(&key(KeyCode::Enter)),
            CommanderAction::Run(Ok(Command::Page(2)))
        );
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn escape_discards_input() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')));
        type_str(&mut commander, "clear");

        assert_eq!(commander.handle_event(&key(KeyCode::Esc)), CommanderAction::Handled);
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }
}
