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

//! Tag selection panel.
//!
//! The panel shows one tab per built-in tag category plus a tab for the
//! user's custom tags. The custom tab also accepts new tag names and deletes
//! existing ones.

mod event;
mod render;

use tui_input::Input;

use crate::model::catalog::TAG_CATEGORIES;

pub(crate) const CUSTOM_TAB: &str = "Custom";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TagPanelAction {
    Ignored,
    Handled,
    Toggle(String),
    Create(String),
    Remove(String),
    Leave,
}

pub(crate) struct TagPanel {
    pub(crate) is_active: bool,
    tab: usize,
    cursor: usize,
    /// Present while a new custom tag name is being typed.
    pub(crate) editing: Option<Input>,
}

impl TagPanel {
    pub(crate) fn new() -> Self {
        Self {
            is_active: false,
            tab: 0,
            cursor: 0,
            editing: None,
        }
    }

    pub(crate) fn tab_names() -> impl Iterator<Item = &'static str> {
        TAG_CATEGORIES.iter().map(|c| c.name).chain([CUSTOM_TAB])
    }

    fn tab_count() -> usize {
        TAG_CATEGORIES.len() + 1
    }

    pub(crate) fn tab(&self) -> usize {
        self.tab
    }

    pub(crate) fn on_custom_tab(&self) -> bool {
        self.tab == TAG_CATEGORIES.len()
    }

    /// Tags listed on the current tab.
    pub(crate) fn tags<'a>(&self, custom_tags: &'a [String]) -> Vec<&'a str> {
        match TAG_CATEGORIES.get(self.tab) {
            Some(category) => category.tags.to_vec(),
            None => custom_tags.iter().map(String::as_str).collect(),
        }
    }

    /// Cursor position, kept inside the current tab's tags.
    pub(crate) fn cursor(&self, len: usize) -> Option<usize> {
        if len == 0 { None } else { Some(self.cursor.min(len - 1)) }
    }

    fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % Self::tab_count();
        self.cursor = 0;
    }

    fn previous_tab(&mut self) {
        self.tab = (self.tab + Self::tab_count() - 1) % Self::tab_count();
        self.cursor = 0;
    }

    fn next_tag(&mut self, len: usize) {
        if let Some(i) = self.cursor(len) {
            self.cursor = if i >= len - 1 { 0 } else { i + 1 };
        }
    }

    fn previous_tag(&mut self, len: usize) {
        if let Some(i) = self.cursor(len) {
            self.cursor = if i == 0 { len - 1 } else { i - 1 };
        }
    }
}
