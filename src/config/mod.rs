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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::model::{filter::PAGE_SIZE, search::DEFAULT_SEARCH_DEBOUNCE};

const CONFIG_NAME: &str = "songdeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Key-value database, relative paths resolve against the config
    /// directory.
    pub database_file: String,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub tick_rate_ms: u64,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: "songdeck.db".to_string(),
            page_size: PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64,
            tick_rate_ms: 100,
            log_file: "songdeck.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn database_path(&self) -> PathBuf {
        resolve(&self.database_file)
    }

    pub fn log_path(&self) -> PathBuf {
        resolve(&self.log_file)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

fn resolve(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }

    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|p| p.parent().map(|dir| dir.join(&path)))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();

        assert_eq!(config.page_size, 6);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"version": 1, "page_size": 10}"#).unwrap();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.database_file, "songdeck.db");
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = AppConfig {
            database_file: "/tmp/songs.db".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(config.database_path(), PathBuf::from("/tmp/songs.db"));
    }
}
