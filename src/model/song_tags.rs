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

//! Custom tags attached to individual songs.
//!
//! Attachments are free text: a tag attached to a song does not have to exist
//! in the custom tag list, and deleting a custom tag leaves its attachments in
//! place.

use std::collections::BTreeMap;

use crate::{
    error::StoreError,
    model::normalize_tag,
    store::{CUSTOM_SONG_TAGS_KEY, KeyValueStore, load_json, save_json},
};

/// Song id to attached tags, persisted as a JSON object keyed by the decimal
/// song id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SongTagMap {
    tags: BTreeMap<u32, Vec<String>>,
}

impl SongTagMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn load(store: &impl KeyValueStore) -> Self {
        let stored: BTreeMap<u32, Vec<String>> = load_json(store, CUSTOM_SONG_TAGS_KEY);

        let mut map = Self::new();
        for (song_id, tags) in stored {
            for tag in tags {
                map.add_custom_tag_to_song(song_id, &tag);
            }
        }

        map
    }

    pub(crate) fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        save_json(store, CUSTOM_SONG_TAGS_KEY, &self.tags)
    }

    /// Attaches a tag to a song, returning `false` if it was blank or already
    /// attached.
    pub(crate) fn add_custom_tag_to_song(&mut self, song_id: u32, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        let attached = self.tags.entry(song_id).or_default();
        if attached.contains(&tag) {
            return false;
        }

        attached.push(tag);
        true
    }

    /// Detaches a tag from a song, returning `false` if it was not attached.
    pub(crate) fn remove_custom_tag_from_song(&mut self, song_id: u32, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        let Some(attached) = self.tags.get_mut(&song_id) else {
            return false;
        };

        let Some(pos) = attached.iter().position(|t| *t == tag) else {
            return false;
        };

        attached.remove(pos);
        if attached.is_empty() {
            self.tags.remove(&song_id);
        }

        true
    }

    pub(crate) fn tags_for(&self, song_id: u32) -> &[String] {
        self.tags.get(&song_id).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn unknown_song_has_no_tags() {
        let map = SongTagMap::new();
        assert!(map.tags_for(42).is_empty());
    }

    #[test]
    fn attach_appends_in_order() {
        let mut map = SongTagMap::new();
        assert!(map.add_custom_tag_to_song(3, "workout"));
        assert!(map.add_custom_tag_to_song(3, " Favorite"));

        assert_eq!(map.tags_for(3), ["workout", "favorite"]);
        assert!(map.tags_for(4).is_empty());
    }

    #[test]
    fn attach_rejects_duplicates() {
        let mut map = SongTagMap::new();
        map.add_custom_tag_to_song(3, "favorite");

        assert!(!map.add_custom_tag_to_song(3, "FAVORITE"));
        assert_eq!(map.tags_for(3), ["favorite"]);
    }

    #[test]
    fn attach_then_detach_restores_previous_tags() {
        let mut map = SongTagMap::new();
        map.add_custom_tag_to_song(5, "gym");

        for song_id in [5, 6] {
            let before = map.tags_for(song_id).to_vec();
            map.add_custom_tag_to_song(song_id, "favorite");
            map.remove_custom_tag_from_song(song_id, "favorite");
            assert_eq!(map.tags_for(song_id), before.as_slice());
        }
    }

    #[test]
    fn detach_missing_is_noop() {
        let mut map = SongTagMap::new();
        map.add_custom_tag_to_song(1, "favorite");
        let before = map.clone();

        assert!(!map.remove_custom_tag_from_song(1, "other"));
        assert!(!map.remove_custom_tag_from_song(2, "favorite"));
        assert_eq!(map, before);
    }

    #[test]
    fn persisted_shape_is_keyed_by_song_id() {
        let mut store = MemoryStore::new();
        let mut map = SongTagMap::new();
        map.add_custom_tag_to_song(2, "favorite");
        map.add_custom_tag_to_song(10, "live");
        map.add_custom_tag_to_song(10, "duet");
        map.save(&mut store).unwrap();

        assert_eq!(
            store.get(CUSTOM_SONG_TAGS_KEY).unwrap().as_deref(),
            Some(r#"{"2":["favorite"],"10":["live","duet"]}"#)
        );
        assert_eq!(SongTagMap::load(&store), map);
    }

    #[test]
    fn emptied_song_is_dropped_from_persisted_map() {
        let mut store = MemoryStore::new();
        let mut map = SongTagMap::new();
        map.add_custom_tag_to_song(2, "favorite");
        map.remove_custom_tag_from_song(2, "favorite");
        map.save(&mut store).unwrap();

        assert_eq!(store.get(CUSTOM_SONG_TAGS_KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn load_ignores_unparsable_value() {
        let mut store = MemoryStore::new();
        store
            .set(CUSTOM_SONG_TAGS_KEY, r#"{"not-a-number": ["x"]}"#)
            .unwrap();

        assert_eq!(SongTagMap::load(&store), SongTagMap::new());
    }
}
