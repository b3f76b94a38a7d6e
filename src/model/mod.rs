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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the songs of
//! the catalog, the user's custom tags and their selection state, the tags
//! attached to individual songs, and the filtering pipeline that combines
//! them into a page of visible songs.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod search;
pub(crate) mod song_tags;
pub(crate) mod tags;

/// A song performed by a streamer.
///
/// Songs are defined once at start-up and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) streamer: String,
    /// Length in seconds.
    pub(crate) duration: u64,
    pub(crate) views: String,
    pub(crate) likes: String,
    /// Built-in lowercase categories.
    pub(crate) tags: Vec<String>,
}

impl Song {
    pub(crate) fn new(
        id: u32,
        title: &str,
        streamer: &str,
        duration: u64,
        views: &str,
        likes: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            streamer: streamer.to_string(),
            duration,
            views: views.to_string(),
            likes: likes.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Trims and lowercases a tag, returning `None` if nothing is left.
pub(crate) fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Favorite "), Some("favorite".to_string()));
        assert_eq!(normalize_tag("hip-hop"), Some("hip-hop".to_string()));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
    }
}
