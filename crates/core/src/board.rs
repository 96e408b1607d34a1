//! Board module - manages the tile grid
//!
//! The board is an N×N grid where each cell is either empty (0) or holds a
//! power of two. Storage is a fixed `MAX_GRID_SIZE`² array so boards are
//! `Copy` and every operation is allocation-free; only the top-left
//! `size × size` region is used and the rest stays zero.
//!
//! Coordinates: `(row, col)`, row 0 at the top, col 0 at the left.
//!
//! All four slides are defined through a single left slide: right is left on
//! reversed rows, up is left on the transposed board and down is right on the
//! transposed board.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{CoreError, CoreResult};
use crate::types::{Direction, Pos, MAX_GRID_SIZE, MAX_TILE, MIN_GRID_SIZE};

const CAP: usize = MAX_GRID_SIZE as usize;

/// Maximum number of cells on the largest board
pub const MAX_CELLS: usize = CAP * CAP;

/// Result of sliding a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// True iff any cell value changed.
    pub moved: bool,
    /// Sum of all tiles created by merges, saturating at `u64::MAX`.
    pub score_delta: u64,
}

/// The N×N tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: [[u64; CAP]; CAP],
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: u8) -> CoreResult<Self> {
        validate_size(size as usize)?;
        Ok(Self {
            size,
            cells: [[0; CAP]; CAP],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// The row count sets the board size; every row must have that many cells
    /// and every cell must be 0 or a power of two between 2 and `MAX_TILE`.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> CoreResult<Self> {
        let size = rows.len();
        validate_size(size)?;
        let mut board = Self {
            size: size as u8,
            cells: [[0; CAP]; CAP],
        };
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(CoreError::RaggedBoard {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(CoreError::InvalidTile {
                        row: r,
                        col: c,
                        value,
                    });
                }
                board.cells[r][c] = value;
            }
        }
        Ok(board)
    }

    /// Empty every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells = [[0; CAP]; CAP];
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline(always)]
    fn n(&self) -> usize {
        self.size as usize
    }

    /// Get cell at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<u64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Set cell at `(row, col)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: u8, col: u8, value: u64) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row as usize][col as usize] = value;
        true
    }

    /// One row of the board, `size` cells long.
    pub fn row(&self, row: usize) -> &[u64] {
        &self.cells[row][..self.n()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells[..self.n()].iter().map(move |r| &r[..self.n()])
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<Pos, MAX_CELLS> {
        let mut out = ArrayVec::new();
        for r in 0..self.size {
            for c in 0..self.size {
                if self.cells[r as usize][c as usize] == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.rows().flatten().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        self.n() * self.n() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.rows().flatten().all(|&v| v != 0)
    }

    pub fn max_tile(&self) -> u64 {
        self.rows().flatten().copied().max().unwrap_or(0)
    }

    /// Check whether two horizontally or vertically adjacent tiles are equal.
    pub fn has_mergeable_pair(&self) -> bool {
        let n = self.n();
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < n && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < n && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Terminal board: full and without any adjacent equal pair.
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_mergeable_pair()
    }

    /// Mirror the board across its main diagonal.
    pub fn transpose(&mut self) {
        let n = self.n();
        for r in 0..n {
            for c in (r + 1)..n {
                let tmp = self.cells[r][c];
                self.cells[r][c] = self.cells[c][r];
                self.cells[c][r] = tmp;
            }
        }
    }

    /// Reverse the cell order of every row.
    pub fn reverse_rows(&mut self) {
        let n = self.n();
        for row in &mut self.cells[..n] {
            row[..n].reverse();
        }
    }

    fn slide_rows_left(&mut self) -> u64 {
        let n = self.n();
        self.cells[..n]
            .iter_mut()
            .fold(0u64, |acc, row| acc.saturating_add(slide_row_left(&mut row[..n])))
    }

    /// Slide and merge all tiles in `direction`.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let before = *self;
        let score_delta = match direction {
            Direction::Left => self.slide_rows_left(),
            Direction::Right => {
                self.reverse_rows();
                let s = self.slide_rows_left();
                self.reverse_rows();
                s
            }
            Direction::Up => {
                self.transpose();
                let s = self.slide_rows_left();
                self.transpose();
                s
            }
            Direction::Down => {
                self.transpose();
                self.reverse_rows();
                let s = self.slide_rows_left();
                self.reverse_rows();
                self.transpose();
                s
            }
        };
        MoveOutcome {
            moved: *self != before,
            score_delta,
        }
    }

    /// Whether sliding in `direction` would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut trial = *self;
        trial.slide(direction).moved
    }
}

/// Slide one row to the left in place, merging equal neighbours once.
///
/// Returns the sum of the merged tiles, saturating at `u64::MAX`. A tile
/// created by a merge never merges again in the same slide, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]`. Two `MAX_TILE` tiles stay side by side.
///
/// # Examples
///
/// ```
/// use tui_2048_core::board::slide_row_left;
///
/// let mut row = [2, 2, 2, 0];
/// assert_eq!(slide_row_left(&mut row), 4);
/// assert_eq!(row, [4, 2, 0, 0]);
/// ```
pub fn slide_row_left(row: &mut [u64]) -> u64 {
    let mut score: u64 = 0;
    let mut write = 0;
    // Value at write-1 that may still absorb an equal neighbour.
    let mut open: Option<u64> = None;

    for read in 0..row.len() {
        let v = row[read];
        if v == 0 {
            continue;
        }
        row[read] = 0;
        match open {
            Some(prev) if prev == v && v < MAX_TILE => {
                row[write - 1] = prev * 2;
                score = score.saturating_add(prev * 2);
                open = None;
            }
            _ => {
                row[write] = v;
                write += 1;
                open = Some(v);
            }
        }
    }

    score
}

fn validate_size(size: usize) -> CoreResult<()> {
    if size < MIN_GRID_SIZE as usize || size > MAX_GRID_SIZE as usize {
        return Err(CoreError::InvalidConfiguration {
            grid_size: size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

fn is_tile_value(v: u64) -> bool {
    v == 0 || (v >= 2 && v <= MAX_TILE && v.is_power_of_two())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------------")?;
        for row in self.rows() {
            for &v in row {
                if v == 0 {
                    write!(f, ".\t")?;
                } else {
                    write!(f, "{}\t", v)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "---------------------")
    }
}
