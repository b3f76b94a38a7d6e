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

//! Interactive UI components.
//!
//! Each component owns its transient input state, translates key events into
//! a component-specific action for the application to apply, and knows how to
//! draw itself.

mod search;
mod tag_dialog;
mod tag_panel;

pub(crate) use search::{SearchAction, SearchBox};
pub(crate) use tag_dialog::{TagDialog, TagDialogAction};
pub(crate) use tag_panel::{TagPanel, TagPanelAction};
