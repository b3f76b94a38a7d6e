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

//! SQLite backed key-value store.
//!
//! All persisted values live in a single `kv` table. Every write is a single
//! upsert, committed before [`KeyValueStore::set`] returns.

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::{error::StoreError, store::KeyValueStore};

pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at `path`.
    ///
    /// This function performs the following setup:
    /// * **WAL Mode**: Enables Write-Ahead Logging.
    /// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
    /// * **Schema**: Executes [`create_schema`] to ensure the table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the schema
    /// cannot be created.
    pub(crate) fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        debug!(path, journal_mode = %journal_mode, "Opened store");

        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

        create_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Opens a private, non-durable store.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Makes every later write fail while reads keep working.
    #[cfg(test)]
    pub(crate) fn make_read_only(&self) -> Result<(), StoreError> {
        self.conn.execute_batch("PRAGMA query_only = ON;")?;
        Ok(())
    }
}

fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt.query_row(params![key], |row| row.get(0)).optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let sql = "
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![key, value])?;

        Ok(())
    }
}
