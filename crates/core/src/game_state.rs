//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tile RNG and scoring, and runs the
//! turn protocol:
//!
//! 1. A directional action slides the board.
//! 2. If nothing changed the action is absorbed: no spawn, no score change.
//! 3. Otherwise one tile spawns and the terminal condition is checked.
//!
//! While the game is over only `Restart` has an effect.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::CoreResult;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GamePhase, Pos, INITIAL_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: TileRng,
    /// Saturates at `u64::MAX`.
    score: u64,
    phase: GamePhase,
    /// Most recently spawned tile, for the spawn effect in the view.
    last_spawn: Option<Pos>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Create a new game with an entropy-seeded RNG and two starting tiles.
    pub fn new(grid_size: u8) -> CoreResult<Self> {
        Self::with_rng(grid_size, TileRng::from_entropy())
    }

    /// Create a new game with the given RNG seed
    pub fn with_seed(grid_size: u8, seed: u64) -> CoreResult<Self> {
        Self::with_rng(grid_size, TileRng::new(seed))
    }

    pub fn with_rng(grid_size: u8, rng: TileRng) -> CoreResult<Self> {
        let mut state = Self {
            board: Board::new(grid_size)?,
            rng,
            score: 0,
            phase: GamePhase::Playing,
            last_spawn: None,
            episode_id: 0,
            moves: 0,
        };
        state.spawn_initial_tiles();
        Ok(state)
    }

    /// Resume from an arbitrary board, without spawning.
    ///
    /// A terminal board starts in `GameOver`.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let phase = if board.is_terminal() {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        };
        Self {
            board,
            rng: TileRng::new(seed),
            score: 0,
            phase,
            last_spawn: None,
            episode_id: 0,
            moves: 0,
        }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> u8 {
        self.board.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn last_spawn(&self) -> Option<Pos> {
        self.last_spawn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> u64 {
        self.board.max_tile()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Directions that would currently change the board.
    pub fn legal_directions(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.board.can_slide(d))
            .collect()
    }

    /// Slide the board and accumulate merge score.
    ///
    /// This is the raw transform: it does not spawn and does not look at the
    /// game phase. Returns true iff any cell changed.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let outcome = self.board.slide(direction);
        self.score = self.score.saturating_add(outcome.score_delta);
        outcome.moved
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board when it is full.
    pub fn spawn_random_tile(&mut self) -> Option<Pos> {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            return None;
        }
        let (row, col) = empties[self.rng.pick_index(empties.len())];
        let value = self.rng.tile_value();
        self.board.set(row, col, value);
        self.last_spawn = Some((row, col));
        trace!(row, col, value, "spawned tile");
        Some((row, col))
    }

    /// No empty cell and no adjacent equal pair.
    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Apply one action through the turn protocol.
    ///
    /// Returns whether the board changed as the result of a move. `Restart`
    /// always succeeds but reports `false`, since it is a reset rather than a
    /// move.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.play(direction),
            GameAction::Restart => {
                self.restart();
                false
            }
        }
    }

    fn play(&mut self, direction: Direction) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }

        let before = self.score;
        if !self.slide(direction) {
            return false;
        }
        self.moves = self.moves.saturating_add(1);
        debug!(
            direction = direction.as_str(),
            score_delta = self.score - before,
            score = self.score,
            "move"
        );

        self.spawn_random_tile();
        if self.is_game_over() {
            self.phase = GamePhase::GameOver;
            info!(
                score = self.score,
                max_tile = self.max_tile(),
                moves = self.moves,
                "game over"
            );
        }
        true
    }

    /// Start a fresh episode on the same grid size.
    ///
    /// The RNG keeps running, so consecutive episodes differ.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.last_spawn = None;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_initial_tiles();
        debug!(episode_id = self.episode_id, "restart");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.write_board(&self.board);
        out.score = self.score;
        out.phase = self.phase;
        out.last_spawn = self.last_spawn;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
