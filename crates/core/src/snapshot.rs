//! Read-only view of a game handed to the presentation layer.

use crate::board::Board;
use crate::types::{GamePhase, Pos, MAX_GRID_SIZE};

const CAP: usize = MAX_GRID_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values; only the top-left `size × size` region is meaningful.
    pub board: [[u64; CAP]; CAP],
    pub size: u8,
    pub score: u64,
    pub phase: GamePhase,
    pub last_spawn: Option<Pos>,
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: u64,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u64; CAP]; CAP];
        self.size = 0;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.last_spawn = None;
        self.episode_id = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.seed = 0;
    }

    pub fn write_board(&mut self, board: &Board) {
        self.board = [[0u64; CAP]; CAP];
        for (r, row) in board.rows().enumerate() {
            self.board[r][..row.len()].copy_from_slice(row);
        }
        self.size = board.size();
        self.max_tile = board.max_tile();
    }

    pub fn cell(&self, row: u8, col: u8) -> u64 {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.board[row as usize][col as usize]
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn playable(&self) -> bool {
        !self.game_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u64; CAP]; CAP],
            size: 0,
            score: 0,
            phase: GamePhase::Playing,
            last_spawn: None,
            episode_id: 0,
            moves: 0,
            max_tile: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_board_copies_active_region() {
        let board = Board::from_rows(&[[2u64, 0], [0, 8]]).unwrap();
        let mut snap = GameSnapshot::default();
        snap.write_board(&board);
        assert_eq!(snap.size, 2);
        assert_eq!(snap.cell(0, 0), 2);
        assert_eq!(snap.cell(1, 1), 8);
        assert_eq!(snap.cell(2, 2), 0);
        assert_eq!(snap.max_tile, 8);
    }

    #[test]
    fn clear_resets_everything() {
        let board = Board::from_rows(&[[2u64, 4], [4, 2]]).unwrap();
        let mut snap = GameSnapshot::default();
        snap.write_board(&board);
        snap.score = 10;
        snap.phase = GamePhase::GameOver;
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(snap.playable());
    }
}
