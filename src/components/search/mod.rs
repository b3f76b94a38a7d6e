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

//! Search box input and debounced term delivery.
//!
//! Edits are held back by a [`SearchDebouncer`] and delivered through
//! [`SearchBox::poll`]. Submitting or emptying the box applies the term at
//! once.

mod event;
mod render;

use std::time::{Duration, Instant};

use tui_input::Input;

use crate::model::search::SearchDebouncer;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Ignored,
    Handled,
    Apply(String),
    Leave,
}

pub(crate) struct SearchBox {
    pub(crate) input: Input,
    debouncer: SearchDebouncer,
    pub(crate) is_active: bool,
}

impl SearchBox {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            input: Input::default(),
            debouncer: SearchDebouncer::new(delay),
            is_active: false,
        }
    }

    /// Returns a debounced term once its quiet period has passed.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Replaces the box contents without waiting for the debounce.
    pub(crate) fn set_value(&mut self, term: &str) {
        self.input = Input::new(term.to_string());
        self.debouncer.cancel();
    }
}
