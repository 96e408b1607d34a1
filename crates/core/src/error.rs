//! Engine error type.
//!
//! The engine only fails at construction time. Once a game exists every
//! action either changes the board or is silently absorbed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid grid size {grid_size}: must be between {min} and {max}")]
    InvalidConfiguration { grid_size: usize, min: u8, max: u8 },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedBoard { row: usize, len: usize, expected: usize },

    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u64 },
}

pub type CoreResult<T> = Result<T, CoreError>;
