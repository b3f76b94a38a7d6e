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

//! Sample lyrics shown alongside the playback clock.

use std::ops::Range;

/// A lyric line and the second at which it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LyricLine {
    pub(crate) time: u64,
    pub(crate) text: &'static str,
}

const fn line(time: u64, text: &'static str) -> LyricLine {
    LyricLine { time, text }
}

/// Placeholder lines, in time order.
pub(crate) const SAMPLE_LYRICS: &[LyricLine] = &[
    line(0, "(instrumental intro)"),
    line(8, "Streetlights hum a tune I almost know"),
    line(14, "Every window keeps a little glow"),
    line(20, "I hum along, I hum along"),
    line(27, "Until the morning finds the song"),
    line(34, "(chorus)"),
    line(36, "Turn it up, let the static fade"),
    line(42, "Keep the echo of the notes we made"),
    line(48, "Turn it up, turn it up"),
    line(55, "(bridge)"),
    line(60, "Quiet rooms and a borrowed beat"),
    line(66, "Footsteps keeping time along the street"),
    line(72, "I hum along, I hum along"),
    line(80, "(outro)"),
];

/// Returns the index of the line playing at `time` seconds: the last line
/// whose start has passed.
pub(crate) fn current_line(lyrics: &[LyricLine], time: u64) -> Option<usize> {
    lyrics.iter().rposition(|l| time >= l.time)
}

/// The `size` lines of a `len` line lyric list to show around `current`.
///
/// The current line is centred where possible; near either end the window
/// stops at the edge of the list instead.
pub(crate) fn lyric_window(len: usize, current: Option<usize>, size: usize) -> Range<usize> {
    let size = size.min(len);
    let centre = current.unwrap_or(0).min(len.saturating_sub(1));
    let start = centre.saturating_sub(size / 2).min(len - size);

    start..start + size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_lyrics_are_in_time_order() {
        assert!(SAMPLE_LYRICS.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn current_line_is_last_started() {
        assert_eq!(current_line(SAMPLE_LYRICS, 0), Some(0));
        assert_eq!(current_line(SAMPLE_LYRICS, 13), Some(1));
        assert_eq!(current_line(SAMPLE_LYRICS, 14), Some(2));
        assert_eq!(current_line(SAMPLE_LYRICS, 500), Some(SAMPLE_LYRICS.len() - 1));
    }

    #[test]
    fn nothing_before_first_line() {
        let lyrics = [line(5, "late start")];
        assert_eq!(current_line(&lyrics, 4), None);
        assert_eq!(current_line(&[], 4), None);
    }

    #[test]
    fn window_centres_current_line() {
        assert_eq!(lyric_window(14, Some(7), 6), 4..10);
        assert_eq!(lyric_window(14, Some(6), 5), 4..9);
    }

    #[test]
    fn window_stops_at_list_edges() {
        assert_eq!(lyric_window(14, None, 6), 0..6);
        assert_eq!(lyric_window(14, Some(1), 6), 0..6);
        assert_eq!(lyric_window(14, Some(13), 6), 8..14);
        assert_eq!(lyric_window(14, Some(40), 6), 8..14);
    }

    #[test]
    fn window_shrinks_to_short_lists() {
        assert_eq!(lyric_window(3, Some(2), 6), 0..3);
        assert_eq!(lyric_window(0, None, 6), 0..0);
    }
}
