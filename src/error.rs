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

//! Error types for persisted application state.
//!
//! Loading persisted state never fails (unreadable values are logged and
//! replaced with empty state), so these errors only surface when writing.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum StoreError {
    /// The backing database could not be opened, read or written.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A value could not be serialized before being stored.
    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
