//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, plain console play).
//!
//! # Grid Dimensions
//!
//! The board is an N×N grid. N is chosen when a game is created and never
//! changes for the lifetime of that game:
//!
//! - **Default**: 4×4
//! - **Minimum**: 2×2 (smaller boards have no meaningful moves)
//! - **Maximum**: 8×8 (board storage is fixed-capacity)
//!
//! Coordinates are `(row, col)` with `(0, 0)` in the top-left corner.
//!
//! # Presentation Timing Constants
//!
//! Timing values are in milliseconds and are only consumed by the terminal
//! front-end. The engine itself never reads a clock.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_DEBOUNCE_MS` | 150 | Minimum gap between two accepted moves |
//! | `SPAWN_ANIMATION_MS` | 200 | Grow-in duration of a freshly spawned tile |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! assert_eq!(GameAction::Restart.direction(), None);
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Default grid size (4x4)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Smallest accepted grid size
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest accepted grid size
pub const MAX_GRID_SIZE: u8 = 8;

/// Number of tiles spawned when a game starts or restarts
pub const INITIAL_TILES: usize = 2;

/// Chance, in percent, that a spawned tile is a 4 instead of a 2
pub const FOUR_TILE_PERCENT: u32 = 10;

/// Value of the common spawned tile
pub const BASE_TILE: u64 = 2;

/// Value of the rare spawned tile
pub const RARE_TILE: u64 = 4;

/// Default frame rate of the terminal front-end
pub const DEFAULT_FPS: u32 = 60;

/// Minimum time between two accepted directional moves
pub const MOVE_DEBOUNCE_MS: u32 = 150;

/// Duration of the spawn grow-in effect
pub const SPAWN_ANIMATION_MS: u32 = 200;

/// The tile value players aim for. Reaching it does not end the game.
pub const WINNING_TILE: u64 = 2048;

/// Largest tile value. Two of these never merge, so tile values and merge
/// sums stay within `u64`.
pub const MAX_TILE: u64 = 1 << 63;

/// A cell coordinate on the board as `(row, col)`.
pub type Pos = (u8, u8);

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order (up, down, left, right).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or the classic `wasd` letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("a"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Raw key events are translated into these by the front-end; the engine
/// never sees input devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("r"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" | "r" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// The slide direction, if this is a directional action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(dir) => Some(*dir),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        GameAction::Move(value)
    }
}

/// Turn protocol states
///
/// - **Playing**: directional actions are processed
/// - **GameOver**: only `Restart` has an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
