//! Move debouncing for terminal environments.
//!
//! Terminals repeat held keys and some emit several press events per tap.
//! Directional actions are accepted at most once per debounce window, counted
//! from the last move that actually changed the board. Restart is never held
//! back.
//!
//! Time is passed in as milliseconds so the handler stays clock-free and
//! testable.

use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{GameAction, MOVE_DEBOUNCE_MS};

/// Tracks input state for move debouncing.
#[derive(Debug, Clone)]
pub struct InputHandler {
    debounce_ms: u32,
    last_move_ms: Option<u64>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_debounce_ms(MOVE_DEBOUNCE_MS)
    }

    pub fn with_debounce_ms(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            last_move_ms: None,
        }
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Map a key press to an action, dropping moves inside the debounce window.
    pub fn handle_key_press(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        self.filter(action, now_ms)
    }

    /// Apply the debounce rule to an already mapped action.
    pub fn filter(&self, action: GameAction, now_ms: u64) -> Option<GameAction> {
        match action {
            GameAction::Restart => Some(action),
            GameAction::Move(_) => match self.last_move_ms {
                Some(last) if now_ms.saturating_sub(last) < self.debounce_ms as u64 => None,
                _ => Some(action),
            },
        }
    }

    /// Record that a move changed the board at `now_ms`.
    pub fn record_move(&mut self, now_ms: u64) {
        self.last_move_ms = Some(now_ms);
    }

    /// Forget the debounce window (e.g. after a restart).
    pub fn reset(&mut self) {
        self.last_move_ms = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
