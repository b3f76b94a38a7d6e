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

//! Song filtering and pagination.
//!
//! The visible songs are a pure function of the catalog, the selected tags,
//! the search term, the tags attached to each song and the requested page.
//!
//! # Matching
//!
//! * **Tags**: a song passes when no tag is selected, or when any selected tag
//!   is one of its effective tags (built-in tags followed by attached tags).
//! * **Search**: a song passes when the term is empty, or when it appears,
//!   ignoring case, in the title, the streamer name or any effective tag.
//!
//! A song is kept only if it passes both. Catalog order is preserved.

use crate::model::{Song, song_tags::SongTagMap};

pub(crate) const PAGE_SIZE: usize = 6;

/// The user's current filter criteria.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SongQuery<'a> {
    pub(crate) selected_tags: &'a [String],
    pub(crate) search: &'a str,
}

/// Pagination metadata for a page of filtered songs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageSummary {
    /// 1-based page number that was requested.
    pub(crate) page: usize,
    pub(crate) total_pages: usize,
    /// Number of songs passing the filters, across all pages.
    pub(crate) total_count: usize,
    /// 1-based index of the first song on the page, 0 if the page is empty.
    pub(crate) first_index: usize,
    /// 1-based index of the last song on the page, 0 if the page is empty.
    pub(crate) last_index: usize,
}

impl PageSummary {
    /// Formats a "Showing X-Y of Z songs" line.
    pub(crate) fn describe(&self) -> String {
        if self.first_index == 0 {
            format!("Showing {} songs", self.total_count)
        } else {
            format!(
                "Showing {}-{} of {} songs",
                self.first_index, self.last_index, self.total_count
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SongPage<'a> {
    pub(crate) songs: Vec<&'a Song>,
    pub(crate) summary: PageSummary,
}

/// Iterates a song's built-in tags followed by its attached custom tags.
pub(crate) fn effective_tags<'a>(
    song: &'a Song,
    song_tags: &'a SongTagMap,
) -> impl Iterator<Item = &'a str> {
    song.tags
        .iter()
        .chain(song_tags.tags_for(song.id))
        .map(String::as_str)
}

fn matches_tags(effective: &[&str], selected_tags: &[String]) -> bool {
    selected_tags.is_empty() || selected_tags.iter().any(|t| effective.contains(&t.as_str()))
}

fn matches_search(song: &Song, effective: &[&str], needle: &str) -> bool {
    needle.is_empty()
        || song.title.to_lowercase().contains(needle)
        || song.streamer.to_lowercase().contains(needle)
        || effective.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Returns the songs matching `query`, in catalog order.
pub(crate) fn filter_songs<'a>(
    catalog: &'a [Song],
    query: &SongQuery,
    song_tags: &SongTagMap,
) -> Vec<&'a Song> {
    let needle = query.search.to_lowercase();

    catalog
        .iter()
        .filter(|song| {
            let effective: Vec<&str> = effective_tags(song, song_tags).collect();
            matches_tags(&effective, query.selected_tags) && matches_search(song, &effective, &needle)
        })
        .collect()
}

/// Slices out 1-based page `page` of `filtered`.
///
/// A page outside `1..=total_pages` yields no songs; callers wanting a valid
/// page should clamp first.
pub(crate) fn paginate<'a>(filtered: &[&'a Song], page: usize, page_size: usize) -> SongPage<'a> {
    let page_size = page_size.max(1);
    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let songs: Vec<&Song> = if page == 0 || start >= total_count {
        vec![]
    } else {
        let end = (start + page_size).min(total_count);
        filtered[start..end].to_vec()
    };

    let (first_index, last_index) = if songs.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + songs.len())
    };

    SongPage {
        songs,
        summary: PageSummary {
            page,
            total_pages,
            total_count,
            first_index,
            last_index,
        },
    }
}
