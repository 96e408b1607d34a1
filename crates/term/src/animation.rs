//! Spawn grow-in effect.
//!
//! The engine only reports *where* a tile spawned. How long it takes to grow
//! in is a presentation concern tied to the wall clock, so the timer lives
//! here and takes the current time in milliseconds.

use crate::types::{Pos, SPAWN_ANIMATION_MS};

/// One frame of the effect: which cell, and how far along (0.0..1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEffect {
    pub pos: Pos,
    pub progress: f32,
}

impl SpawnEffect {
    /// Relative tile size for this frame, growing from 10% to full size.
    pub fn scale(&self) -> f32 {
        0.1 + 0.9 * self.progress.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct SpawnAnimation {
    duration_ms: u32,
    started_ms: u64,
    pos: Option<Pos>,
}

impl SpawnAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            started_ms: 0,
            pos: None,
        }
    }

    pub fn start(&mut self, pos: Pos, now_ms: u64) {
        self.pos = Some(pos);
        self.started_ms = now_ms;
    }

    pub fn cancel(&mut self) {
        self.pos = None;
    }

    /// Current frame, or `None` once the effect has finished.
    pub fn effect(&self, now_ms: u64) -> Option<SpawnEffect> {
        let pos = self.pos?;
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if self.duration_ms == 0 || elapsed >= self.duration_ms as u64 {
            return None;
        }
        Some(SpawnEffect {
            pos,
            progress: elapsed as f32 / self.duration_ms as f32,
        })
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        self.effect(now_ms).is_some()
    }
}

impl Default for SpawnAnimation {
    fn default() -> Self {
        Self::new(SPAWN_ANIMATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progresses_then_finishes() {
        let mut anim = SpawnAnimation::new(200);
        assert!(anim.effect(0).is_none());

        anim.start((1, 2), 1_000);
        let e = anim.effect(1_100).unwrap();
        assert_eq!(e.pos, (1, 2));
        assert!((e.progress - 0.5).abs() < 1e-6);
        assert!((e.scale() - 0.55).abs() < 1e-6);

        assert!(anim.is_active(1_199));
        assert!(!anim.is_active(1_200));
    }

    #[test]
    fn zero_duration_never_animates() {
        let mut anim = SpawnAnimation::new(0);
        anim.start((0, 0), 5);
        assert!(anim.effect(5).is_none());
    }

    #[test]
    fn cancel_stops_effect() {
        let mut anim = SpawnAnimation::default();
        anim.start((0, 0), 0);
        anim.cancel();
        assert!(anim.effect(1).is_none());
    }
}
