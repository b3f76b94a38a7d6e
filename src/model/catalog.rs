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

//! The song catalog and the built-in tag palette.

use crate::model::Song;

/// A named group of built-in tags offered by the tag panel.
pub(crate) struct TagCategory {
    pub(crate) name: &'static str,
    pub(crate) tags: &'static [&'static str],
}

pub(crate) const TAG_CATEGORIES: &[TagCategory] = &[
    TagCategory {
        name: "Genre",
        tags: &[
            "pop",
            "rock",
            "jazz",
            "classical",
            "electronic",
            "hip-hop",
            "folk",
            "lofi",
            "ambient",
        ],
    },
    TagCategory {
        name: "Instrument",
        tags: &["acoustic", "piano", "guitar", "vocals", "instrumental", "synth"],
    },
    TagCategory {
        name: "Mood",
        tags: &[
            "summer",
            "winter",
            "night",
            "nature",
            "urban",
            "dance",
            "beats",
            "relaxing",
            "meditation",
            "chill",
            "morning",
        ],
    },
];

/// Returns the fixed catalog, in display order.
pub(crate) fn sample_catalog() -> Vec<Song> {
    vec![
        Song::new(1, "Summer Memories", "LilyStream", 222, "245K", "18.5K", &["pop", "acoustic", "summer"]),
        Song::new(2, "Midnight Serenade", "MoonlightMelody", 255, "189K", "15.2K", &["jazz", "piano", "night"]),
        Song::new(3, "Electric Dreams", "SynthWave", 238, "320K", "24.7K", &["electronic", "synth", "dance"]),
        Song::new(4, "Mountain Echo", "NatureSounds", 321, "156K", "12.3K", &["folk", "acoustic", "nature"]),
        Song::new(5, "Urban Rhythm", "CityBeats", 215, "278K", "21.9K", &["hip-hop", "urban", "beats"]),
        Song::new(6, "Starlight Sonata", "ClassicalVibes", 372, "132K", "10.8K", &["classical", "piano", "night"]),
        Song::new(7, "Ocean Waves", "SeaSounds", 285, "198K", "16.2K", &["ambient", "nature", "relaxing"]),
        Song::new(8, "Rainy Day Jazz", "MoodMusic", 330, "210K", "19.5K", &["jazz", "piano", "relaxing"]),
        Song::new(9, "Sunset Vibes", "ChillBeats", 205, "265K", "22.1K", &["lofi", "chill", "beats"]),
        Song::new(10, "Morning Coffee", "DailyTunes", 250, "175K", "14.3K", &["acoustic", "morning", "relaxing"]),
        Song::new(11, "City Lights", "NightOwl", 230, "230K", "20.7K", &["electronic", "night", "urban"]),
        Song::new(12, "Forest Meditation", "ZenSounds", 390, "145K", "11.9K", &["ambient", "nature", "meditation"]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(|s| s.id > 0));
    }

    #[test]
    fn catalog_tags_are_lowercase() {
        for song in sample_catalog() {
            for tag in &song.tags {
                assert_eq!(tag, &tag.to_lowercase());
            }
        }
    }
}
