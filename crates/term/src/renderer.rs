//! TerminalRenderer: presents framebuffers on a terminal.
//!
//! The renderer remembers the last frame it presented. A new frame only
//! rewrites, per row, the span between the first and the last cell that
//! differ; identical frames write nothing. A resize or [`invalidate`] causes
//! a full repaint.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    front: FrameBuffer,
    stale: bool,
    /// Style the terminal is currently drawing with, if known.
    pen: Option<CellStyle>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal to how `enter` found it.
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer. Terminal modes are left alone.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            front: FrameBuffer::new(0, 0),
            stale: true,
            pen: None,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Repaint everything on the next `present`, e.g. after a resize event.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Bring the terminal up to date with `frame`.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        let resized =
            frame.width() != self.front.width() || frame.height() != self.front.height();
        if self.stale || resized {
            self.repaint(frame)?;
        } else {
            self.patch(frame)?;
        }
        self.front.copy_from(frame);
        self.stale = false;
        Ok(())
    }

    fn repaint(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.pen = None;
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        for y in 0..frame.height() {
            queue!(self.out, cursor::MoveTo(0, y))?;
            self.print_cells(frame.row(y))?;
        }
        self.finish()
    }

    fn patch(&mut self, frame: &FrameBuffer) -> Result<()> {
        let mut touched = false;
        for y in 0..frame.height() {
            let Some((start, end)) = dirty_span(self.front.row(y), frame.row(y)) else {
                continue;
            };
            touched = true;
            queue!(self.out, cursor::MoveTo(start as u16, y))?;
            self.print_cells(&frame.row(y)[start..end])?;
        }
        if touched {
            self.finish()?;
        }
        Ok(())
    }

    fn print_cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.set_pen(cell.style)?;
            queue!(self.out, Print(cell.ch))?;
        }
        Ok(())
    }

    /// Emit only the style attributes that differ from the current pen.
    fn set_pen(&mut self, style: CellStyle) -> io::Result<()> {
        let prev = self.pen.replace(style);
        if prev.map(|p| p.fg) != Some(style.fg) {
            queue!(self.out, SetForegroundColor(color(style.fg)))?;
        }
        if prev.map(|p| p.bg) != Some(style.bg) {
            queue!(self.out, SetBackgroundColor(color(style.bg)))?;
        }
        if prev.map(|p| p.bold) != Some(style.bold) {
            let weight = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(self.out, SetAttribute(weight))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.pen = None;
        self.out.flush()?;
        Ok(())
    }
}

/// Half-open column range covering every differing cell of a row.
fn dirty_span(old: &[Cell], new: &[Cell]) -> Option<(usize, usize)> {
    let start = old.iter().zip(new).position(|(a, b)| a != b)?;
    let end = old
        .iter()
        .zip(new)
        .rposition(|(a, b)| a != b)
        .map_or(start + 1, |last| last + 1);
    Some((start, end))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Escape sequences carry digits too, so assertions look for whole words.
    fn printed(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn dirty_span_covers_first_to_last_change() {
        let style = CellStyle::default();
        let a = vec![Cell::default(); 6];
        let mut b = a.clone();
        b[1] = style.into_cell('X');
        b[4] = style.into_cell('Y');
        assert_eq!(dirty_span(&a, &b), Some((1, 5)));
        assert_eq!(dirty_span(&a, &a), None);
    }

    #[test]
    fn first_present_paints_everything() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "2048", CellStyle::default());
        fb.put_str(0, 1, "4096", CellStyle::default());

        let mut r = TerminalRenderer::with_writer(Vec::<u8>::new());
        r.present(&fb).unwrap();
        let text = printed(r.get_ref());
        assert!(text.contains("2048"));
        assert!(text.contains("4096"));
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let fb = FrameBuffer::new(8, 3);
        let mut r = TerminalRenderer::with_writer(Vec::<u8>::new());
        r.present(&fb).unwrap();
        r.get_mut().clear();

        r.present(&fb).unwrap();
        assert!(r.get_ref().is_empty());
    }

    #[test]
    fn changed_cells_are_patched_in_place() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(10, 2);
        fb.put_str(0, 0, "SCORE 0", style);
        let mut r = TerminalRenderer::with_writer(Vec::<u8>::new());
        r.present(&fb).unwrap();
        r.get_mut().clear();

        fb.put_str(6, 0, "16", style);
        r.present(&fb).unwrap();
        let text = printed(r.get_ref());
        assert!(text.contains("16"));
        assert!(!text.contains("SCORE"));
    }

    #[test]
    fn invalidate_and_resize_force_full_repaint() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str(0, 0, "Game", style);
        let mut r = TerminalRenderer::with_writer(Vec::<u8>::new());
        r.present(&fb).unwrap();

        r.get_mut().clear();
        r.invalidate();
        r.present(&fb).unwrap();
        assert!(printed(r.get_ref()).contains("Game"));

        r.get_mut().clear();
        fb.resize(7, 1);
        r.present(&fb).unwrap();
        assert!(printed(r.get_ref()).contains("Game"));
    }
}
