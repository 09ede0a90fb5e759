//! Per-instance mutable frame state.
//!
//! Exactly one writer: the render-loop tick. Pointer and resize listeners
//! never touch this record directly; they write into small shared cells that
//! the tick copies in before advancing.

use crate::config::SceneConfig;
use crate::cursor::CursorState;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct FrameState {
    /// Seconds since the instance mounted.
    pub elapsed: f32,
    /// Viewport size in device-independent pixels.
    pub logical_size: Vec2,
    /// Canvas backing size in device pixels.
    pub physical_size: Vec2,
    /// Clamped device pixel ratio in effect.
    pub pixel_ratio: f32,
    pub cursor: CursorState,
}

impl FrameState {
    pub fn new(cfg: &SceneConfig) -> Self {
        Self {
            elapsed: 0.0,
            logical_size: Vec2::ONE,
            physical_size: Vec2::ONE,
            pixel_ratio: 1.0,
            cursor: CursorState::new(cfg),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.logical_size.x / self.logical_size.y.max(1.0)
    }

    /// Advance to `elapsed` seconds and run the cursor physics step.
    pub fn tick(&mut self, elapsed: f32, cfg: &SceneConfig) {
        self.elapsed = elapsed;
        let aspect = self.aspect();
        self.cursor.tick(cfg, aspect);
    }
}
