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

//! How the player panel is laid out: lyrics panel, minimized, locked.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayerView {
    show_lyrics: bool,
    minimized: bool,
    locked: bool,
}

impl PlayerView {
    pub(crate) fn toggle_lyrics(&mut self) {
        self.show_lyrics = !self.show_lyrics;
    }

    /// Collapses or expands the panel. Returns `false` when locked, leaving
    /// the panel as it is.
    pub(crate) fn toggle_minimize(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.minimized = !self.minimized;
        true
    }

    pub(crate) fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    pub(crate) fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }

    /// The lyrics panel is only shown on an expanded player.
    pub(crate) fn shows_lyrics(&self) -> bool {
        self.show_lyrics && !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_and_unlocked() {
        let view = PlayerView::default();

        assert!(!view.is_minimized());
        assert!(!view.is_locked());
        assert!(!view.shows_lyrics());
    }

    #[test]
    fn lyrics_toggle() {
        let mut view = PlayerView::default();

        view.toggle_lyrics();
        assert!(view.shows_lyrics());

        view.toggle_lyrics();
        assert!(!view.shows_lyrics());
    }

    #[test]
    fn minimize_hides_lyrics_until_expanded() {
        let mut view = PlayerView::default();
        view.toggle_lyrics();

        assert!(view.toggle_minimize());
        assert!(view.is_minimized());
        assert!(!view.shows_lyrics());

        assert!(view.toggle_minimize());
        assert!(view.shows_lyrics());
    }

    #[test]
    fn lock_freezes_minimize() {
        let mut view = PlayerView::default();
        view.toggle_lock();

        assert!(!view.toggle_minimize());
        assert!(!view.is_minimized());

        view.toggle_lock();
        assert!(view.toggle_minimize());
        view.toggle_lock();

        assert!(!view.toggle_minimize());
        assert!(view.is_minimized());
    }

    #[test]
    fn lyrics_toggle_ignores_lock() {
        let mut view = PlayerView::default();
        view.toggle_lock();
        view.toggle_lyrics();

        assert!(view.shows_lyrics());
    }
}
