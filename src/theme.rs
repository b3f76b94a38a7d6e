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

//! Visual styling and color configuration for the TUI.
//!
//! The user picks an accent palette and a light or dark mode. Both choices are
//! persisted as plain strings so they survive restarts, and together they
//! produce the [`Theme`] used for rendering.
//!
//! This module also provides utilities for converting colors between Ratatui's
//! internal representation and the hexadecimal strings used for terminal
//! emulator styling.

use ratatui::style::Color;
use tracing::warn;

use crate::{
    error::StoreError,
    store::{KeyValueStore, THEME_COLOR_KEY, THEME_MODE_KEY},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Palette {
    #[default]
    Default,
    Rose,
    Green,
    Blue,
    Purple,
}

impl Palette {
    const ALL: [Palette; 5] = [
        Palette::Default,
        Palette::Rose,
        Palette::Green,
        Palette::Blue,
        Palette::Purple,
    ];

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Palette::Default => "default",
            Palette::Rose => "rose",
            Palette::Green => "green",
            Palette::Blue => "blue",
            Palette::Purple => "purple",
        }
    }

    fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    fn accent(self) -> Color {
        match self {
            Palette::Default => Color::Rgb(250, 189, 47),
            Palette::Rose => Color::Rgb(244, 63, 94),
            Palette::Green => Color::Rgb(34, 197, 94),
            Palette::Blue => Color::Rgb(59, 130, 246),
            Palette::Purple => Color::Rgb(147, 51, 234),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Mode::Dark),
            "light" => Some(Mode::Light),
            _ => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

/// The user's persisted appearance choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ThemeSettings {
    pub(crate) palette: Palette,
    pub(crate) mode: Mode,
}

impl ThemeSettings {
    /// Reads the stored palette and mode, falling back to the defaults for
    /// anything missing or unrecognised.
    pub(crate) fn load(store: &impl KeyValueStore) -> Self {
        let palette = read(store, THEME_COLOR_KEY)
            .and_then(|name| Palette::from_name(&name))
            .unwrap_or_default();

        let mode = read(store, THEME_MODE_KEY)
            .and_then(|name| Mode::from_name(&name))
            .unwrap_or_default();

        Self { palette, mode }
    }

    pub(crate) fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_COLOR_KEY, self.palette.name())?;
        store.set(THEME_MODE_KEY, self.mode.name())
    }

    pub(crate) fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        };
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::new(self.palette, self.mode)
    }
}

fn read(store: &impl KeyValueStore, key: &str) -> Option<String> {
    store
        .get(key)
        .inspect_err(|e| warn!(key, error = %e, "Failed to read theme setting"))
        .ok()
        .flatten()
}

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) table_time_fg: Color,
    pub(crate) table_streamer_fg: Color,
    pub(crate) table_stats_fg: Color,
    pub(crate) table_tag_fg: Color,
    pub(crate) table_custom_tag_fg: Color,
    pub(crate) table_title_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), Mode::default())
    }
}

impl Theme {
    pub(crate) fn new(palette: Palette, mode: Mode) -> Self {
        let accent = palette.accent();

        match mode {
            Mode::Dark => Self {
                background_colour: Color::Rgb(40, 20, 50),
                accent_colour: accent,
                border_colour: Color::Rgb(102, 102, 102),
                gauge_track_colour: Color::Rgb(50, 30, 60),
                text_colour: Color::Rgb(255, 255, 255),
                muted_colour: Color::Rgb(162, 161, 166),
                highlight_bg: Color::Rgb(70, 50, 90),
                commander_colour: Color::Rgb(255, 255, 255),
                error_colour: Color::Rgb(248, 113, 113),

                table_time_fg: Color::Rgb(162, 161, 166),
                table_streamer_fg: Color::Rgb(179, 157, 219),
                table_stats_fg: Color::Rgb(162, 161, 166),
                table_tag_fg: Color::Rgb(162, 161, 166),
                table_custom_tag_fg: accent,
                table_title_fg: Color::Rgb(255, 255, 255),
            },
            Mode::Light => Self {
                background_colour: Color::Rgb(250, 248, 245),
                accent_colour: accent,
                border_colour: Color::Rgb(190, 190, 190),
                gauge_track_colour: Color::Rgb(225, 222, 230),
                text_colour: Color::Rgb(30, 30, 30),
                muted_colour: Color::Rgb(110, 110, 115),
                highlight_bg: Color::Rgb(230, 224, 240),
                commander_colour: Color::Rgb(30, 30, 30),
                error_colour: Color::Rgb(185, 28, 28),

                table_time_fg: Color::Rgb(110, 110, 115),
                table_streamer_fg: Color::Rgb(91, 33, 182),
                table_stats_fg: Color::Rgb(110, 110, 115),
                table_tag_fg: Color::Rgb(110, 110, 115),
                table_custom_tag_fg: accent,
                table_title_fg: Color::Rgb(30, 30, 30),
            },
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no hex form and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
