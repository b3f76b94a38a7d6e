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

//! Custom tags and tag selection.
//!
//! This module tracks the tags the user has created and the tags currently
//! selected as filters. Selection applies equally to built-in category tags
//! and to custom tags.
//!
//! Only the custom tags are persisted; the selection lasts for the session.

use crate::{
    error::StoreError,
    model::normalize_tag,
    store::{CUSTOM_TAGS_KEY, KeyValueStore, load_json, save_json},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TagFilter {
    custom_tags: Vec<String>,
    selected_tags: Vec<String>,
}

impl TagFilter {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Restores the custom tags from the store.
    ///
    /// Stored tags are normalized and de-duplicated on the way in, so a
    /// hand-edited value cannot break the no-duplicates invariant.
    pub(crate) fn load(store: &impl KeyValueStore) -> Self {
        let stored: Vec<String> = load_json(store, CUSTOM_TAGS_KEY);

        let mut custom_tags: Vec<String> = Vec::with_capacity(stored.len());
        for tag in stored.iter().filter_map(|t| normalize_tag(t)) {
            if !custom_tags.contains(&tag) {
                custom_tags.push(tag);
            }
        }

        Self {
            custom_tags,
            selected_tags: vec![],
        }
    }

    pub(crate) fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        save_json(store, CUSTOM_TAGS_KEY, &self.custom_tags)
    }

    /// Creates a custom tag and selects it.
    ///
    /// Returns `false` without changing anything if the tag is blank or
    /// already exists.
    pub(crate) fn add_custom_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        if self.custom_tags.contains(&tag) {
            return false;
        }

        if !self.selected_tags.contains(&tag) {
            self.selected_tags.push(tag.clone());
        }
        self.custom_tags.push(tag);

        true
    }

    /// Deletes a custom tag, also deselecting it.
    ///
    /// Returns `false` if the tag was not a custom tag.
    pub(crate) fn remove_custom_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        self.selected_tags.retain(|t| *t != tag);

        let before = self.custom_tags.len();
        self.custom_tags.retain(|t| *t != tag);
        self.custom_tags.len() != before
    }

    /// Flips the selection of a tag, returning whether it is now selected.
    pub(crate) fn toggle_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        if let Some(pos) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag);
            true
        }
    }

    /// Deselects every tag, returning `false` if nothing was selected.
    pub(crate) fn clear_tags(&mut self) -> bool {
        let had_selection = !self.selected_tags.is_empty();
        self.selected_tags.clear();
        had_selection
    }

    pub(crate) fn custom_tags(&self) -> &[String] {
        &self.custom_tags
    }

    pub(crate) fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub(crate) fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn new_custom_tag_is_selected() {
        let mut tags = TagFilter::new();

        assert!(tags.add_custom_tag("favorite"));

        assert_eq!(tags.custom_tags(), ["favorite"]);
        assert_eq!(tags.selected_tags(), ["favorite"]);
    }

    #[test]
    fn add_custom_tag_normalizes() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("  Karaoke ");

        assert_eq!(tags.custom_tags(), ["karaoke"]);
        assert!(tags.is_selected("karaoke"));
    }

    #[test]
    fn add_custom_tag_is_idempotent() {
        let mut once = TagFilter::new();
        once.add_custom_tag("favorite");

        let mut twice = TagFilter::new();
        assert!(twice.add_custom_tag("favorite"));
        assert!(!twice.add_custom_tag("FAVORITE"));

        assert_eq!(once, twice);
        assert_eq!(twice.selected_tags(), ["favorite"]);
    }

    #[test]
    fn add_custom_tag_ignores_blank() {
        let mut tags = TagFilter::new();
        assert!(!tags.add_custom_tag("   "));
        assert!(tags.custom_tags().is_empty());
        assert!(tags.selected_tags().is_empty());
    }

    #[test]
    fn add_custom_tag_does_not_duplicate_existing_selection() {
        let mut tags = TagFilter::new();
        tags.toggle_tag("jazz");
        tags.add_custom_tag("jazz");

        assert_eq!(tags.selected_tags(), ["jazz"]);
    }

    #[test]
    fn custom_tags_keep_insertion_order() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("zeta");
        tags.add_custom_tag("alpha");
        tags.add_custom_tag("mid");

        assert_eq!(tags.custom_tags(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn remove_custom_tag_deselects() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("favorite");

        assert!(tags.remove_custom_tag("favorite"));

        assert!(tags.custom_tags().is_empty());
        assert!(!tags.is_selected("favorite"));
    }

    #[test]
    fn remove_custom_tag_deselects_when_not_selected() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("favorite");
        tags.toggle_tag("favorite");
        assert!(!tags.is_selected("favorite"));

        tags.remove_custom_tag("favorite");
        assert!(!tags.is_selected("favorite"));
    }

    #[test]
    fn remove_missing_custom_tag_is_noop() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("favorite");
        let before = tags.clone();

        assert!(!tags.remove_custom_tag("unknown"));
        assert_eq!(tags, before);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut tags = TagFilter::new();
        tags.toggle_tag("piano");
        tags.add_custom_tag("favorite");

        for tag in ["jazz", "piano", "favorite"] {
            let before = tags.clone();
            tags.toggle_tag(tag);
            tags.toggle_tag(tag);
            assert_eq!(tags, before, "toggling {tag} twice");
        }
    }

    #[test]
    fn clear_keeps_custom_tags() {
        let mut tags = TagFilter::new();
        tags.add_custom_tag("favorite");
        tags.toggle_tag("jazz");

        assert!(tags.clear_tags());

        assert!(tags.selected_tags().is_empty());
        assert_eq!(tags.custom_tags(), ["favorite"]);
        assert!(!tags.clear_tags());
    }

    #[test]
    fn load_restores_custom_tags_without_selection() {
        let mut store = MemoryStore::new();
        let mut tags = TagFilter::new();
        tags.add_custom_tag("favorite");
        tags.add_custom_tag("karaoke");
        tags.save(&mut store).unwrap();

        let loaded = TagFilter::load(&store);
        assert_eq!(loaded.custom_tags(), ["favorite", "karaoke"]);
        assert!(loaded.selected_tags().is_empty());
    }

    #[test]
    fn load_cleans_stored_duplicates() {
        let mut store = MemoryStore::new();
        store
            .set(CUSTOM_TAGS_KEY, r#"["Favorite", "favorite ", "", "live"]"#)
            .unwrap();

        let loaded = TagFilter::load(&store);
        assert_eq!(loaded.custom_tags(), ["favorite", "live"]);
    }

    #[test]
    fn load_ignores_unparsable_value() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_TAGS_KEY, "not json at all").unwrap();

        let loaded = TagFilter::load(&store);
        assert!(loaded.custom_tags().is_empty());
    }
}
