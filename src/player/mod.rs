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

//! Playback control and state management.
//!
//! This module provides the [`SimulatedPlayer`] used by the UI. No audio is
//! produced: the player keeps a playback clock for the current song which the
//! application advances on every tick, along with volume and mute state.

mod lyrics;
mod view;

use std::time::Duration;

use tracing::debug;

use crate::model::Song;

pub(crate) use lyrics::{SAMPLE_LYRICS, lyric_window};
pub(crate) use view::PlayerView;

pub(crate) const DEFAULT_VOLUME: u32 = 80;
pub(crate) const MAX_VOLUME: u32 = 100;

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NowPlaying {
    pub(crate) song_id: u32,
    pub(crate) title: String,
    pub(crate) streamer: String,
    pub(crate) duration: Duration,
}

#[derive(Debug)]
pub(crate) struct SimulatedPlayer {
    state: PlayerState,
    now_playing: Option<NowPlaying>,
    position: Duration,
    volume: u32,
    muted: bool,
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedPlayer {
    pub(crate) fn new() -> Self {
        Self {
            state: PlayerState::Stopped,
            now_playing: None,
            position: Duration::ZERO,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }

    /// Loads `song` and starts playing it from the beginning.
    pub(crate) fn play(&mut self, song: &Song) {
        debug!(song_id = song.id, title = %song.title, "Play");

        self.now_playing = Some(NowPlaying {
            song_id: song.id,
            title: song.title.clone(),
            streamer: song.streamer.clone(),
            duration: Duration::from_secs(song.duration),
        });
        self.position = Duration::ZERO;
        self.state = PlayerState::Playing;
    }

    /// Toggles the playback state between paused and playing.
    ///
    /// A stopped player resumes the loaded song from its current position.
    pub(crate) fn toggle_pause(&mut self) {
        if self.now_playing.is_none() {
            return;
        }

        self.state = match self.state {
            PlayerState::Playing => PlayerState::Paused,
            PlayerState::Paused | PlayerState::Stopped => PlayerState::Playing,
        };
    }

    /// Stop playback, rewinding to the start of the song.
    pub(crate) fn stop(&mut self) {
        self.state = PlayerState::Stopped;
        self.position = Duration::ZERO;
    }

    /// Moves the playback position by `delta` seconds, clamped to the song.
    pub(crate) fn seek(&mut self, delta: i64) {
        let Some(duration) = self.duration() else {
            return;
        };

        let step = Duration::from_secs(delta.unsigned_abs());
        self.position = if delta < 0 {
            self.position.saturating_sub(step)
        } else {
            (self.position + step).min(duration)
        };
    }

    /// Advances the clock by `elapsed` while playing.
    ///
    /// Returns `true` if the song reached its end, in which case the player
    /// stops and rewinds.
    pub(crate) fn advance(&mut self, elapsed: Duration) -> bool {
        if self.state != PlayerState::Playing {
            return false;
        }
        let Some(duration) = self.duration() else {
            return false;
        };

        self.position += elapsed;
        if self.position >= duration {
            debug!("Song finished");
            self.stop();
            return true;
        }

        false
    }

    /// Adjusts the volume relative to the current level.
    ///
    /// Reaching zero mutes; raising the volume unmutes.
    pub(crate) fn adjust_volume(&mut self, delta: i32) {
        let volume = (self.volume as i64 + delta as i64).clamp(0, MAX_VOLUME as i64);
        self.set_volume(volume as u32);
    }

    pub(crate) fn set_volume(&mut self, volume: u32) {
        self.volume = volume.min(MAX_VOLUME);
        self.muted = self.volume == 0;
    }

    pub(crate) fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    pub(crate) fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub(crate) fn current_song_id(&self) -> Option<u32> {
        self.now_playing.as_ref().map(|n| n.song_id)
    }

    pub(crate) fn position(&self) -> Duration {
        self.position
    }

    pub(crate) fn duration(&self) -> Option<Duration> {
        self.now_playing.as_ref().map(|n| n.duration)
    }

    pub(crate) fn volume(&self) -> u32 {
        self.volume
    }

    pub(crate) fn is_muted(&self) -> bool {
        self.muted
    }

    /// The volume actually heard, zero while muted.
    pub(crate) fn effective_volume(&self) -> u32 {
        if self.muted { 0 } else { self.volume }
    }

    /// Fraction of the song played, in `0.0..=1.0`.
    pub(crate) fn progress(&self) -> f64 {
        match self.duration() {
            Some(d) if !d.is_zero() => (self.position.as_secs_f64() / d.as_secs_f64()).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    /// Index into [`SAMPLE_LYRICS`] of the line at the current position.
    pub(crate) fn current_lyric(&self) -> Option<usize> {
        self.now_playing.as_ref()?;
        lyrics::current_line(SAMPLE_LYRICS, self.position.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(duration: u64) -> Song {
        Song::new(7, "Ocean Waves", "SeaSounds", duration, "198K", "16.2K", &["ambient"])
    }

    #[test]
    fn starts_stopped_at_default_volume() {
        let player = SimulatedPlayer::new();

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.volume(), DEFAULT_VOLUME);
        assert!(!player.is_muted());
        assert_eq!(player.progress(), 0.0);
        assert_eq!(player.current_lyric(), None);
    }

    #[test]
    fn play_starts_from_zero() {
        let mut player = SimulatedPlayer::new();
        player.play(&song(100));
        player.advance(Duration::from_secs(30));

        player.play(&song(100));

        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.position(), Duration::ZERO);
        assert_eq!(player.current_song_id(), Some(7));
    }

    #[test]
    fn toggle_pause_without_song_does_nothing() {
        let mut player = SimulatedPlayer::new();
        player.toggle_pause();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn clock_only_runs_while_playing() {
        let mut player = SimulatedPlayer::new();
        player.play(&song(100));
        player.advance(Duration::from_millis(1500));
        assert_eq!(player.position(), Duration::from_millis(1500));

        player.toggle_pause();
        assert_eq!(player.state(), PlayerState::Paused);
        player.advance(Duration::from_secs(10));
        assert_eq!(player.position(), Duration::from_millis(1500));

        player.toggle_pause();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn song_end_stops_and_rewinds() {
        let mut player = SimulatedPlayer::new();
        player.play(&song(10));

        assert!(!player.advance(Duration::from_secs(9)));
        assert!(player.advance(Duration::from_secs(1)));

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.position(), Duration::ZERO);
        assert_eq!(player.current_song_id(), Some(7));
    }

    #[test]
    fn seek_is_clamped() {
        let mut player = SimulatedPlayer::new();
        player.play(&song(60));

        player.seek(-5);
        assert_eq!(player.position(), Duration::ZERO);

        player.seek(20);
        assert_eq!(player.position(), Duration::from_secs(20));
        assert!((player.progress() - 1.0 / 3.0).abs() < 1e-9);

        player.seek(500);
        assert_eq!(player.position(), Duration::from_secs(60));
        assert_eq!(player.progress(), 1.0);
    }

    #[test]
    fn volume_is_clamped_and_zero_mutes() {
        let mut player = SimulatedPlayer::new();

        player.adjust_volume(50);
        assert_eq!(player.volume(), MAX_VOLUME);

        player.adjust_volume(-200);
        assert_eq!(player.volume(), 0);
        assert!(player.is_muted());

        player.adjust_volume(5);
        assert_eq!(player.volume(), 5);
        assert!(!player.is_muted());
    }

    #[test]
    fn mute_keeps_volume() {
        let mut player = SimulatedPlayer::new();
        player.toggle_mute();

        assert!(player.is_muted());
        assert_eq!(player.volume(), DEFAULT_VOLUME);
        assert_eq!(player.effective_volume(), 0);

        player.toggle_mute();
        assert_eq!(player.effective_volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn lyric_follows_position() {
        let mut player = SimulatedPlayer::new();
        player.play(&song(200));
        assert_eq!(player.current_lyric(), Some(0));

        player.seek(15);
        let line = player.current_lyric().map(|i| SAMPLE_LYRICS[i]);
        assert_eq!(line.map(|l| l.time), Some(14));
    }
}
