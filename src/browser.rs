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

//! Song browser state management.
//!
//! This module provides state for the song list: the applied search term, the
//! current page, the highlighted row and the cached result of the filter
//! pipeline.
//!
//! Nothing here recomputes on its own. Callers invoke [`SongBrowser::refresh`]
//! (or [`SongBrowser::filters_changed`]) after mutating anything the filter
//! depends on.

use rand::{rng, seq::IndexedRandom};
use ratatui::widgets::TableState;

use crate::{
    model::{
        Song,
        filter::{self, PageSummary, SongQuery},
    },
    session::Session,
    store::KeyValueStore,
};

pub(crate) struct SongBrowser {
    catalog: Vec<Song>,
    search_term: String,
    page: usize,
    page_size: usize,

    /// Ids of every song passing the filters, in catalog order.
    filtered: Vec<u32>,
    visible: Vec<Song>,
    summary: PageSummary,

    pub(crate) table_state: TableState,
}

impl SongBrowser {
    pub(crate) fn new(catalog: Vec<Song>, page_size: usize) -> Self {
        Self {
            catalog,
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            filtered: vec![],
            visible: vec![],
            summary: PageSummary::default(),
            table_state: TableState::new(),
        }
    }

    /// Re-runs the filter pipeline for the current page.
    ///
    /// The page is clamped into range first, so shrinking the result set never
    /// strands the user on an empty page.
    pub(crate) fn refresh<S: KeyValueStore>(&mut self, session: &Session<S>) {
        let query = SongQuery {
            selected_tags: session.tags().selected_tags(),
            search: &self.search_term,
        };

        let filtered = filter::filter_songs(&self.catalog, &query, session.song_tags());
        self.filtered = filtered.iter().map(|s| s.id).collect();

        self.repaginate();
    }

    /// Returns to the first page and refreshes.
    pub(crate) fn filters_changed<S: KeyValueStore>(&mut self, session: &Session<S>) {
        self.page = 1;
        self.table_state.select(None);
        self.refresh(session);
    }

    /// Applies a new search term, returning to the first page if it differs.
    pub(crate) fn apply_search<S: KeyValueStore>(&mut self, term: &str, session: &Session<S>) {
        if term == self.search_term {
            return;
        }

        self.search_term = term.to_string();
        self.filters_changed(session);
    }

    pub(crate) fn next_page(&mut self) {
        if self.page < self.summary.total_pages {
            self.goto_page(self.page + 1);
        }
    }

    pub(crate) fn previous_page(&mut self) {
        if self.page > 1 {
            self.goto_page(self.page - 1);
        }
    }

    /// Moves to 1-based `page`, clamped to the available pages.
    pub(crate) fn goto_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.table_state.select(None);
        }
        self.repaginate();
    }

    pub(crate) fn next_row(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn previous_row(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        let index = self.table_state.selected()?;
        self.visible.get(index)
    }

    pub(crate) fn song(&self, id: u32) -> Option<&Song> {
        self.catalog.iter().find(|s| s.id == id)
    }

    /// Returns the filtered song after (or before) `current`, wrapping around.
    ///
    /// If `current` is not in the filtered result the first song is returned.
    pub(crate) fn adjacent_song(&self, current: Option<u32>, forward: bool) -> Option<&Song> {
        let len = self.filtered.len();
        if len == 0 {
            return None;
        }

        let position = current.and_then(|id| self.filtered.iter().position(|f| *f == id));
        let index = match position {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };

        self.song(self.filtered[index])
    }

    /// Picks a random filtered song, avoiding `current` when there is a choice.
    pub(crate) fn random_song(&self, current: Option<u32>) -> Option<&Song> {
        let others: Vec<u32> = self
            .filtered
            .iter()
            .copied()
            .filter(|id| Some(*id) != current)
            .collect();

        let candidates = if others.is_empty() { &self.filtered } else { &others };

        candidates.choose(&mut rng()).and_then(|id| self.song(*id))
    }

    pub(crate) fn search_term(&self) -> &str {
        &self.search_term
    }

    pub(crate) fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn visible(&self) -> &[Song] {
        &self.visible
    }

    pub(crate) fn summary(&self) -> &PageSummary {
        &self.summary
    }

    fn repaginate(&mut self) {
        let catalog = &self.catalog;
        let filtered: Vec<&Song> = self
            .filtered
            .iter()
            .filter_map(|id| catalog.iter().find(|s| s.id == *id))
            .collect();

        let total_pages = filtered.len().div_ceil(self.page_size);
        self.page = self.page.clamp(1, total_pages.max(1));

        let page = filter::paginate(&filtered, self.page, self.page_size);
        self.visible = page.songs.into_iter().cloned().collect();
        self.summary = page.summary;

        match self.table_state.selected() {
            _ if self.visible.is_empty() => self.table_state.select(None),
            Some(i) if i >= self.visible.len() => self.table_state.select(Some(self.visible.len() - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{catalog::sample_catalog, filter::PAGE_SIZE},
        store::MemoryStore,
    };

    fn setup() -> (SongBrowser, Session<MemoryStore>) {
        let session = Session::open(MemoryStore::new());
        let mut browser = SongBrowser::new(sample_catalog(), PAGE_SIZE);
        browser.refresh(&session);
        (browser, session)
    }

    fn visible_ids(browser: &SongBrowser) -> Vec<u32> {
        browser.visible().iter().map(|s| s.id).collect()
    }

    #[test]
    fn starts_on_first_page() {
        let (browser, _) = setup();

        assert_eq!(visible_ids(&browser), [1, 2, 3, 4, 5, 6]);
        assert_eq!(browser.summary().total_pages, 2);
        assert_eq!(browser.selected_song().map(|s| s.id), Some(1));
    }

    #[test]
    fn page_navigation_stays_in_range() {
        let (mut browser, _) = setup();

        browser.previous_page();
        assert_eq!(browser.page(), 1);

        browser.next_page();
        assert_eq!(visible_ids(&browser), [7, 8, 9, 10, 11, 12]);

        browser.next_page();
        assert_eq!(browser.page(), 2);
    }

    #[test]
    fn goto_page_clamps() {
        let (mut browser, _) = setup();

        browser.goto_page(9);
        assert_eq!(browser.page(), 2);

        browser.goto_page(0);
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn search_resets_page() {
        let (mut browser, session) = setup();
        browser.next_page();

        browser.apply_search("piano", &session);

        assert_eq!(browser.page(), 1);
        assert_eq!(visible_ids(&browser), [2, 6, 8]);
        assert_eq!(browser.summary().describe(), "Showing 1-3 of 3 songs");
    }

    #[test]
    fn tag_change_resets_page() {
        let (mut browser, mut session) = setup();
        browser.next_page();

        session.toggle_tag("relaxing");
        browser.filters_changed(&session);

        assert_eq!(browser.page(), 1);
        assert_eq!(visible_ids(&browser), [7, 8, 10]);
    }

    #[test]
    fn refresh_clamps_page_when_results_shrink() {
        let (mut browser, mut session) = setup();
        browser.next_page();

        session.toggle_tag("jazz");
        browser.refresh(&session);

        assert_eq!(browser.page(), 1);
        assert_eq!(visible_ids(&browser), [2, 8]);
    }

    #[test]
    fn rows_wrap_within_page() {
        let (mut browser, _) = setup();

        browser.previous_row();
        assert_eq!(browser.selected_song().map(|s| s.id), Some(6));

        browser.next_row();
        assert_eq!(browser.selected_song().map(|s| s.id), Some(1));
    }

    #[test]
    fn empty_result_has_no_selection() {
        let (mut browser, session) = setup();
        browser.apply_search("no such song", &session);

        assert!(browser.visible().is_empty());
        assert!(browser.selected_song().is_none());
        assert_eq!(browser.summary().describe(), "Showing 0 songs");
    }

    #[test]
    fn adjacent_song_wraps_over_filtered_songs() {
        let (mut browser, mut session) = setup();
        session.toggle_tag("jazz");
        browser.filters_changed(&session);

        assert_eq!(browser.adjacent_song(Some(2), true).map(|s| s.id), Some(8));
        assert_eq!(browser.adjacent_song(Some(8), true).map(|s| s.id), Some(2));
        assert_eq!(browser.adjacent_song(Some(2), false).map(|s| s.id), Some(8));
        assert_eq!(browser.adjacent_song(Some(5), true).map(|s| s.id), Some(2));
        assert_eq!(browser.adjacent_song(None, false).map(|s| s.id), Some(2));
    }

    #[test]
    fn random_song_avoids_current() {
        let (mut browser, mut session) = setup();
        session.toggle_tag("jazz");
        browser.filters_changed(&session);

        for _ in 0..10 {
            assert_eq!(browser.random_song(Some(2)).map(|s| s.id), Some(8));
        }

        browser.apply_search("rainy", &session);
        assert_eq!(browser.random_song(Some(8)).map(|s| s.id), Some(8));
    }

    #[test]
    fn random_song_stays_within_results() {
        let (mut browser, mut session) = setup();
        session.toggle_tag("piano");
        browser.filters_changed(&session);

        for _ in 0..20 {
            let id = browser.random_song(None).map(|s| s.id);
            assert!(matches!(id, Some(2 | 6 | 8)));
        }

        browser.apply_search("no such song", &session);
        assert!(browser.random_song(None).is_none());
    }
}
