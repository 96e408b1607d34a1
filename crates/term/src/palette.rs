//! Colour palette for the board view.

use std::collections::BTreeMap;

use crate::fb::Rgb;
use crate::types::WINNING_TILE;

/// Colours used by [`crate::GameView`].
///
/// Tiles above the largest configured value reuse the colour of
/// [`WINNING_TILE`], or the largest configured colour if that is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub light_text: Rgb,
    pub empty_tile: Rgb,
    pub tile_colors: BTreeMap<u64, Rgb>,
    /// Text colour overrides per tile value; other tiles use `light_text`.
    pub text_colors: BTreeMap<u64, Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        let tile_colors = [
            (2, Rgb::new(238, 228, 218)),
            (4, Rgb::new(237, 224, 200)),
            (8, Rgb::new(242, 177, 121)),
            (16, Rgb::new(245, 149, 99)),
            (32, Rgb::new(246, 124, 95)),
            (64, Rgb::new(246, 94, 59)),
            (128, Rgb::new(237, 207, 114)),
            (256, Rgb::new(237, 204, 97)),
            (512, Rgb::new(237, 200, 80)),
            (1024, Rgb::new(237, 197, 63)),
            (2048, Rgb::new(237, 194, 46)),
        ]
        .into_iter()
        .collect();
        let text_colors = [(2, Rgb::new(119, 110, 101)), (4, Rgb::new(119, 110, 101))]
            .into_iter()
            .collect();

        Self {
            background: Rgb::new(250, 248, 239),
            grid: Rgb::new(187, 173, 160),
            text: Rgb::new(119, 110, 101),
            light_text: Rgb::new(249, 246, 242),
            empty_tile: Rgb::new(192, 179, 166),
            tile_colors,
            text_colors,
        }
    }
}

impl Palette {
    /// Background colour of a tile; `0` is the empty slot.
    pub fn tile(&self, value: u64) -> Rgb {
        if value == 0 {
            return self.empty_tile;
        }
        if let Some(c) = self.tile_colors.get(&value) {
            return *c;
        }
        self.tile_colors
            .get(&WINNING_TILE)
            .or_else(|| self.tile_colors.values().next_back())
            .copied()
            .unwrap_or(self.grid)
    }

    /// Foreground colour of the number drawn on a tile.
    pub fn tile_text(&self, value: u64) -> Rgb {
        self.text_colors
            .get(&value)
            .copied()
            .unwrap_or(self.light_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_have_their_own_colour() {
        let p = Palette::default();
        assert_eq!(p.tile(2), Rgb::new(238, 228, 218));
        assert_eq!(p.tile(0), p.empty_tile);
        assert_ne!(p.tile(8), p.tile(16));
    }

    #[test]
    fn large_tiles_fall_back_to_winning_colour() {
        let p = Palette::default();
        assert_eq!(p.tile(4096), p.tile(2048));
        assert_eq!(p.tile(1 << 40), p.tile(2048));
    }

    #[test]
    fn fallback_without_winning_colour_uses_largest() {
        let mut p = Palette::default();
        p.tile_colors.remove(&2048);
        assert_eq!(p.tile(4096), p.tile(1024));
        p.tile_colors.clear();
        assert_eq!(p.tile(8), p.grid);
    }

    #[test]
    fn small_tiles_use_dark_text() {
        let p = Palette::default();
        assert_eq!(p.tile_text(2), p.text);
        assert_eq!(p.tile_text(8), p.light_text);
    }
}
