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

//! Search term debouncing.
//!
//! Typing into the search box does not filter on every keystroke. Each edit
//! replaces the pending term and restarts the quiet period; the term is
//! released once, after no edit has arrived for the configured delay.

use std::time::{Duration, Instant};

pub(crate) const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub(crate) struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records an edit made at `now`, superseding any pending term.
    pub(crate) fn push(&mut self, term: String, now: Instant) {
        self.pending = Some((term, now));
    }

    /// Releases the pending term if the quiet period has elapsed by `now`.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);

        if due {
            self.pending.take().map(|(term, _)| term)
        } else {
            None
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_pending() {
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE);
        assert_eq!(debouncer.poll(Instant::now()), None);
    }

    #[test]
    fn releases_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE);
        debouncer.push("pia".to_string(), start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(300)),
            Some("pia".to_string())
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn releases_only_once() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE);
        debouncer.push("piano".to_string(), start);

        let later = start + Duration::from_secs(1);
        assert_eq!(debouncer.poll(later), Some("piano".to_string()));
        assert_eq!(debouncer.poll(later), None);
    }

    #[test]
    fn rapid_edits_coalesce() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE);

        let mut at = start;
        for term in ["p", "pi", "pia", "pian", "piano"] {
            debouncer.push(term.to_string(), at);
            assert_eq!(debouncer.poll(at + Duration::from_millis(100)), None);
            at += Duration::from_millis(100);
        }

        // Last edit was at start + 400ms.
        assert_eq!(debouncer.poll(start + Duration::from_millis(650)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(700)),
            Some("piano".to_string())
        );
    }

    #[test]
    fn cancel_drops_pending_term() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE);
        debouncer.push("jazz".to_string(), start);
        debouncer.cancel();

        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}
