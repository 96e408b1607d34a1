//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget toolkits and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Everything time-based (the spawn grow-in) lives here rather than in the
//! engine, which stays clock-free.

pub mod animation;
pub mod config;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use animation::{SpawnAnimation, SpawnEffect};
pub use config::UiConfig;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, TileLayout, Viewport};
pub use palette::Palette;
pub use renderer::TerminalRenderer;
