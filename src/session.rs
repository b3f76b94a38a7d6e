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

//! Persisted tagging state.
//!
//! A [`Session`] owns the key-value store together with the custom tags and
//! the song attachments loaded from it. Every mutation is applied in memory
//! first and then written through to the store before returning.
//!
//! If the write fails the in-memory change is kept and the error is returned,
//! so the caller can report it while the user carries on.

use tracing::{debug, error};

use crate::{
    error::StoreError,
    model::{song_tags::SongTagMap, tags::TagFilter},
    store::KeyValueStore,
};

pub(crate) struct Session<S: KeyValueStore> {
    store: S,
    tags: TagFilter,
    song_tags: SongTagMap,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads persisted state from `store`.
    ///
    /// Missing or unreadable values start out empty.
    pub(crate) fn open(store: S) -> Self {
        let tags = TagFilter::load(&store);
        let song_tags = SongTagMap::load(&store);

        debug!(custom_tags = tags.custom_tags().len(), "Session opened");

        Self {
            store,
            tags,
            song_tags,
        }
    }

    pub(crate) fn tags(&self) -> &TagFilter {
        &self.tags
    }

    pub(crate) fn song_tags(&self) -> &SongTagMap {
        &self.song_tags
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn add_custom_tag(&mut self, tag: &str) -> Result<bool, StoreError> {
        if !self.tags.add_custom_tag(tag) {
            return Ok(false);
        }

        debug!(tag, "Custom tag added");
        self.persist_tags()?;
        Ok(true)
    }

    pub(crate) fn remove_custom_tag(&mut self, tag: &str) -> Result<bool, StoreError> {
        if !self.tags.remove_custom_tag(tag) {
            return Ok(false);
        }

        debug!(tag, "Custom tag removed");
        self.persist_tags()?;
        Ok(true)
    }

    /// Selection is not persisted, so this never touches the store.
    pub(crate) fn toggle_tag(&mut self, tag: &str) -> bool {
        self.tags.toggle_tag(tag)
    }

    pub(crate) fn clear_tags(&mut self) -> bool {
        self.tags.clear_tags()
    }

    pub(crate) fn add_custom_tag_to_song(&mut self, song_id: u32, tag: &str) -> Result<bool, StoreError> {
        if !self.song_tags.add_custom_tag_to_song(song_id, tag) {
            return Ok(false);
        }

        debug!(song_id, tag, "Tag attached to song");
        self.persist_song_tags()?;
        Ok(true)
    }

    pub(crate) fn remove_custom_tag_from_song(&mut self, song_id: u32, tag: &str) -> Result<bool, StoreError> {
        if !self.song_tags.remove_custom_tag_from_song(song_id, tag) {
            return Ok(false);
        }

        debug!(song_id, tag, "Tag detached from song");
        self.persist_song_tags()?;
        Ok(true)
    }

    /// Writes all persisted state. Called once on shutdown.
    pub(crate) fn flush(&mut self) -> Result<(), StoreError> {
        self.persist_tags()?;
        self.persist_song_tags()
    }

    fn persist_tags(&mut self) -> Result<(), StoreError> {
        self.tags.save(&mut self.store).inspect_err(|e| {
            error!(error = %e, "Failed to save custom tags");
        })
    }

    fn persist_song_tags(&mut self) -> Result<(), StoreError> {
        self.song_tags.save(&mut self.store).inspect_err(|e| {
            error!(error = %e, "Failed to save song tags");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CUSTOM_SONG_TAGS_KEY, CUSTOM_TAGS_KEY, MemoryStore, SqliteStore};

    /// Reads succeed, writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Database(rusqlite::Error::QueryReturnedNoRows))
        }
    }

    #[test]
    fn mutations_are_written_through() {
        let mut session = Session::open(MemoryStore::new());

        session.add_custom_tag("Favorite").unwrap();
        assert_eq!(
            session.store().get(CUSTOM_TAGS_KEY).unwrap().as_deref(),
            Some(r#"["favorite"]"#)
        );

        session.add_custom_tag_to_song(8, "favorite").unwrap();
        assert_eq!(
            session.store().get(CUSTOM_SONG_TAGS_KEY).unwrap().as_deref(),
            Some(r#"{"8":["favorite"]}"#)
        );

        session.remove_custom_tag_from_song(8, "favorite").unwrap();
        assert_eq!(
            session.store().get(CUSTOM_SONG_TAGS_KEY).unwrap().as_deref(),
            Some("{}")
        );

        session.remove_custom_tag("favorite").unwrap();
        assert_eq!(
            session.store().get(CUSTOM_TAGS_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn noop_mutations_do_not_write() {
        let mut session = Session::open(MemoryStore::new());

        assert!(!session.remove_custom_tag("missing").unwrap());
        assert!(!session.remove_custom_tag_from_song(1, "missing").unwrap());

        assert_eq!(session.store().get(CUSTOM_TAGS_KEY).unwrap(), None);
        assert_eq!(session.store().get(CUSTOM_SONG_TAGS_KEY).unwrap(), None);
    }

    #[test]
    fn selection_is_not_persisted() {
        let mut session = Session::open(MemoryStore::new());
        session.toggle_tag("jazz");

        assert!(session.tags().is_selected("jazz"));
        assert_eq!(session.store().get(CUSTOM_TAGS_KEY).unwrap(), None);
    }

    #[test]
    fn reopened_session_restores_tags() {
        let mut session = Session::open(SqliteStore::open_in_memory().unwrap());
        session.add_custom_tag("favorite").unwrap();
        session.add_custom_tag("live").unwrap();
        session.add_custom_tag_to_song(2, "favorite").unwrap();
        session.toggle_tag("jazz");

        let reopened = Session::open(session.store);

        assert_eq!(reopened.tags().custom_tags(), ["favorite", "live"]);
        assert!(reopened.tags().selected_tags().is_empty());
        assert_eq!(reopened.song_tags().tags_for(2), ["favorite"]);
    }

    #[test]
    fn removing_custom_tag_keeps_song_attachments() {
        let mut session = Session::open(MemoryStore::new());
        session.add_custom_tag("favorite").unwrap();
        session.add_custom_tag_to_song(3, "favorite").unwrap();

        session.remove_custom_tag("favorite").unwrap();

        assert!(session.tags().custom_tags().is_empty());
        assert_eq!(session.song_tags().tags_for(3), ["favorite"]);
    }

    #[test]
    fn corrupt_store_opens_empty() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_TAGS_KEY, "[oops").unwrap();
        store.set(CUSTOM_SONG_TAGS_KEY, "[]").unwrap();

        let session = Session::open(store);

        assert!(session.tags().custom_tags().is_empty());
        assert!(session.song_tags().tags_for(1).is_empty());
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut session = Session::open(ReadOnlyStore);

        assert!(session.add_custom_tag("favorite").is_err());

        assert_eq!(session.tags().custom_tags(), ["favorite"]);
        assert!(session.tags().is_selected("favorite"));
        assert!(session.flush().is_err());
    }
}
