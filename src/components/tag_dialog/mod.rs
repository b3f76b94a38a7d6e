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

//! Dialog for attaching custom tags to a single song.
//!
//! The dialog has three panes, cycled with Tab: a text field for a new tag
//! name, the custom tags not yet attached to the song, and the tags already
//! attached.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TagDialogAction {
    Handled,
    Attach(String),
    Detach(String),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogPane {
    NewTag,
    Available,
    Attached,
}

pub(crate) struct TagDialog {
    song_id: u32,
    pub(crate) input: Input,
    pane: DialogPane,
    available_cursor: usize,
    attached_cursor: usize,
}

impl TagDialog {
    pub(crate) fn new(song_id: u32) -> Self {
        Self {
            song_id,
            input: Input::default(),
            pane: DialogPane::NewTag,
            available_cursor: 0,
            attached_cursor: 0,
        }
    }

    pub(crate) fn song_id(&self) -> u32 {
        self.song_id
    }

    pub(crate) fn pane(&self) -> DialogPane {
        self.pane
    }

    pub(crate) fn available_cursor(&self, len: usize) -> Option<usize> {
        clamp_cursor(self.available_cursor, len)
    }

    pub(crate) fn attached_cursor(&self, len: usize) -> Option<usize> {
        clamp_cursor(self.attached_cursor, len)
    }

    fn next_pane(&mut self) {
        self.pane = match self.pane {
            DialogPane::NewTag => DialogPane::Available,
            DialogPane::Available => DialogPane::Attached,
            DialogPane::Attached => DialogPane::NewTag,
        };
    }
}

/// Custom tags that can still be attached to a song.
pub(crate) fn available_tags<'a>(custom_tags: &'a [String], attached: &[String]) -> Vec<&'a str> {
    custom_tags
        .iter()
        .filter(|t| !attached.contains(t))
        .map(String::as_str)
        .collect()
}

fn clamp_cursor(cursor: usize, len: usize) -> Option<usize> {
    if len == 0 { None } else { Some(cursor.min(len - 1)) }
}

fn step(cursor: usize, len: usize, forward: bool) -> usize {
    match clamp_cursor(cursor, len) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    }
}
