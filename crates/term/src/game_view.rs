//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::animation::SpawnEffect;
use crate::core::GameSnapshot;
use crate::fb::{format_u64, CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;

/// Rows above the grid: title, subtitle, score, spacer.
const HEADER_H: u16 = 4;
/// Rows below the grid: spacer and two instruction lines.
const FOOTER_H: u16 = 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Tile geometry in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl TileLayout {
    /// Roomy boxes: 7 columns by 3 rows.
    pub const LARGE: TileLayout = TileLayout {
        tile_w: 7,
        tile_h: 3,
        gap_x: 1,
        gap_y: 1,
    };

    /// Single-row tiles for big grids or small terminals.
    pub const COMPACT: TileLayout = TileLayout {
        tile_w: 6,
        tile_h: 1,
        gap_x: 1,
        gap_y: 1,
    };

    /// Largest layout whose grid and header fit the viewport.
    pub fn fit(grid_size: u16, viewport: Viewport) -> TileLayout {
        let large = Self::LARGE;
        if large.grid_w(grid_size) <= viewport.width
            && large.grid_h(grid_size) + HEADER_H <= viewport.height
        {
            large
        } else {
            Self::COMPACT
        }
    }

    pub fn grid_w(&self, n: u16) -> u16 {
        n * self.tile_w + (n + 1) * self.gap_x
    }

    pub fn grid_h(&self, n: u16) -> u16 {
        n * self.tile_h + (n + 1) * self.gap_y
    }

    /// Top-left corner of the tile at `(row, col)` relative to the grid origin.
    pub fn tile_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.gap_x + col * (self.tile_w + self.gap_x),
            self.gap_y + row * (self.tile_h + self.gap_y),
        )
    }
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_effect(snap, None, viewport, fb);
    }

    pub fn render_into_with_effect(
        &self,
        snap: &GameSnapshot,
        effect: Option<&SpawnEffect>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let p = &self.palette;
        let page = CellStyle::new(p.text, p.background);

        fb.resize(viewport.width, viewport.height);
        fb.clear(page.into_cell(' '));

        let n = snap.size as u16;
        if n == 0 {
            return;
        }

        let layout = TileLayout::fit(n, viewport);
        let grid_w = layout.grid_w(n);
        let grid_h = layout.grid_h(n);
        let top = viewport.height.saturating_sub(HEADER_H + grid_h + FOOTER_H) / 2;
        let left = viewport.width.saturating_sub(grid_w) / 2;

        self.draw_header(fb, snap, viewport, top);

        let gy = top + HEADER_H;
        fb.fill_rect(left, gy, grid_w, grid_h, ' ', CellStyle::new(p.grid, p.grid));

        for r in 0..n {
            for c in 0..n {
                let value = snap.cell(r as u8, c as u8);
                let (ox, oy) = layout.tile_origin(r, c);
                let (x, y) = (left + ox, gy + oy);

                match effect {
                    Some(e) if e.pos == (r as u8, c as u8) && value != 0 => {
                        self.draw_tile(fb, x, y, layout.tile_w, layout.tile_h, 0);
                        let w = scaled(layout.tile_w, e.scale());
                        let h = scaled(layout.tile_h, e.scale());
                        let sx = x + (layout.tile_w - w) / 2;
                        let sy = y + (layout.tile_h - h) / 2;
                        self.draw_tile(fb, sx, sy, w, h, value);
                    }
                    _ => self.draw_tile(fb, x, y, layout.tile_w, layout.tile_h, value),
                }
            }
        }

        self.draw_footer(fb, viewport, gy + grid_h + 1);

        if snap.game_over() {
            self.draw_game_over(fb, snap, left, gy, grid_w, grid_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_effect(snap, None, viewport)
    }

    pub fn render_with_effect(
        &self,
        snap: &GameSnapshot,
        effect: Option<&SpawnEffect>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_effect(snap, effect, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, top: u16) {
        let p = &self.palette;
        let text = CellStyle::new(p.text, p.background);

        fb.put_str_centered(0, viewport.width, top, "2048", text.bold());
        fb.put_str_centered(0, viewport.width, top + 1, "Join the tiles, get to 2048!", text);

        // " SCORE 1234 " on a grid-coloured badge.
        let badge = CellStyle::new(Rgb::new(255, 255, 255), p.grid).bold();
        let mut digits = [0u8; 20];
        let score = format_u64(snap.score, &mut digits);
        let w = (" SCORE ".len() + score.len() + 1) as u16;
        let x = viewport.width.saturating_sub(w) / 2;
        fb.fill_rect(x, top + 2, w, 1, ' ', badge);
        fb.put_str(x + 1, top + 2, "SCORE", badge);
        fb.put_u64(x + 7, top + 2, snap.score, badge);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16) {
        let text = CellStyle::new(self.palette.text, self.palette.background);
        fb.put_str_centered(
            0,
            viewport.width,
            y,
            "HOW TO PLAY: arrows/WASD move, r restarts, q quits.",
            text,
        );
        fb.put_str_centered(
            0,
            viewport.width,
            y + 1,
            "When two tiles with the same number touch, they merge into one!",
            text,
        );
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, value: u64) {
        let p = &self.palette;
        let bg = p.tile(value);
        fb.fill_rect(x, y, w, h, ' ', CellStyle::new(bg, bg));
        if value == 0 {
            return;
        }

        let mut digits = [0u8; 20];
        let label = format_u64(value, &mut digits);
        if label.len() as u16 > w {
            return;
        }
        let style = CellStyle::new(p.tile_text(value), bg).bold();
        fb.put_str_centered(x, w, y + h / 2, label, style);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        left: u16,
        top: u16,
        grid_w: u16,
        grid_h: u16,
    ) {
        let p = &self.palette;
        let style = CellStyle::new(p.text, p.background).bold();
        let mid = top + grid_h / 2;

        let title = " Game Over! ";
        fb.put_str_centered(left, grid_w, mid.saturating_sub(1), title, style);

        let mut digits = [0u8; 20];
        let score = format_u64(snap.score, &mut digits);
        let w = (" Final Score: ".len() + score.len() + 1) as u16;
        let x = left + grid_w.saturating_sub(w) / 2;
        fb.fill_rect(x, mid + 1, w, 1, ' ', style);
        fb.put_str(x + 1, mid + 1, "Final Score:", style);
        fb.put_u64(x + 14, mid + 1, snap.score, style);
    }
}

fn scaled(full: u16, scale: f32) -> u16 {
    ((full as f32 * scale).round() as u16).clamp(1, full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_layout_for_default_board() {
        let layout = TileLayout::fit(4, Viewport::new(80, 24));
        assert_eq!(layout, TileLayout::LARGE);
        assert_eq!(layout.grid_w(4), 33);
        assert_eq!(layout.grid_h(4), 17);
    }

    #[test]
    fn compact_layout_for_big_board() {
        assert_eq!(TileLayout::fit(8, Viewport::new(80, 24)), TileLayout::COMPACT);
    }

    #[test]
    fn tile_origins_step_by_tile_plus_gap() {
        let l = TileLayout::LARGE;
        assert_eq!(l.tile_origin(0, 0), (1, 1));
        assert_eq!(l.tile_origin(1, 2), (17, 5));
    }

    #[test]
    fn scaled_never_collapses() {
        assert_eq!(scaled(7, 0.1), 1);
        assert_eq!(scaled(7, 1.0), 7);
        assert_eq!(scaled(3, 0.55), 2);
    }
}
