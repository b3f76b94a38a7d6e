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

//! Durable key-value storage.
//!
//! Persisted application state is a handful of string values stored under
//! fixed key names. Structured values are encoded as JSON.
//!
//! # Keys
//!
//! * [`CUSTOM_TAGS_KEY`] - JSON array of user-created tags.
//! * [`CUSTOM_SONG_TAGS_KEY`] - JSON object mapping song ids to attached tags.
//! * [`THEME_COLOR_KEY`] - Colour palette name.
//! * [`THEME_MODE_KEY`] - `dark` or `light`.

mod sqlite;

pub(crate) use sqlite::SqliteStore;

#[cfg(test)]
use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::StoreError;

pub(crate) const CUSTOM_TAGS_KEY: &str = "customTags";
pub(crate) const CUSTOM_SONG_TAGS_KEY: &str = "customSongTags";
pub(crate) const THEME_COLOR_KEY: &str = "theme-color";
pub(crate) const THEME_MODE_KEY: &str = "theme-mode";

pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and decodes a JSON value.
///
/// A missing key, a failed read or a value that does not decode as `T` all
/// produce `T::default()`. Failures are logged and never returned to the
/// caller.
pub(crate) fn load_json<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Discarding unparsable persisted value");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted value");
            T::default()
        }
    }
}

/// Encodes a value as JSON and writes it under `key`.
pub(crate) fn save_json<T>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;

    store.set(key, &raw)
}
