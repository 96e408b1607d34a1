//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! move debouncer so a held or bouncing key does not fire several slides.

pub mod handler;
pub mod map;

pub use tui_2048_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
