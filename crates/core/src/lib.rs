//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the 2048 board engine: the grid, the four slide/merge
//! transforms, random tile spawning, scoring, terminal detection and the
//! restart protocol. It has **no dependencies** on terminal I/O or input
//! devices, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Drives the TUI, the plain console mode and benchmarks alike
//! - **Allocation-free**: Boards are fixed-capacity and `Copy`
//!
//! # Module Structure
//!
//! - [`board`]: N×N grid with slide/merge, transpose and terminal checks
//! - [`game_state`]: Turn protocol, score, phase and restart
//! - [`rng`]: Seedable tile placement and 2/4 value selection
//! - [`snapshot`]: Plain copyable view for renderers
//! - [`error`]: Construction-time validation errors
//!
//! # Game Rules
//!
//! - A move slides every tile as far as possible in one direction
//! - Two equal tiles that meet merge into one tile of double value, once per move
//! - Each merge adds the new tile's value to the score
//! - A move that changes nothing is ignored (no spawn)
//! - After every real move one tile spawns: 2 (90%) or 4 (10%)
//! - The game ends when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::with_seed(4, 12345).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! game.apply(GameAction::Move(Direction::Left));
//! game.apply(GameAction::Move(Direction::Up));
//!
//! game.apply(GameAction::Restart);
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.episode_id(), 1);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{slide_row_left, Board, MoveOutcome, MAX_CELLS};
pub use error::{CoreError, CoreResult};
pub use game_state::GameState;
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
