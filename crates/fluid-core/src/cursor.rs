//! Cursor-follow physics: pointer smoothing, world projection and the
//! anchor-proximity radius.

use crate::config::SceneConfig;
use crate::scene::anchor_world_positions;
use crate::sdf::{screen_to_world, smoothstep01};
use glam::{Vec2, Vec3};

/// Pointer-driven cursor sphere state. Written only by the frame tick;
/// pointer events feed `target` through a cell the tick polls.
#[derive(Clone, Debug)]
pub struct CursorState {
    /// Raw normalized pointer target (Y-up).
    pub target: Vec2,
    /// Exponentially smoothed pointer position.
    pub smoothed: Vec2,
    /// Smoothed position projected into world space.
    pub world: Vec3,
    /// Dynamic radius; grows near the fixed anchors.
    pub radius: f32,
}

impl CursorState {
    pub fn new(cfg: &SceneConfig) -> Self {
        Self {
            target: Vec2::splat(0.5),
            smoothed: Vec2::splat(0.5),
            world: Vec3::ZERO,
            radius: cfg.cursor_radius_min,
        }
    }

    /// Advance one frame. The fixed smoothing factor is not time-delta
    /// compensated; convergence tracks the achieved frame rate.
    pub fn tick(&mut self, cfg: &SceneConfig, aspect: f32) {
        self.smoothed += (self.target - self.smoothed) * cfg.pointer_smoothing;
        self.world = screen_to_world(self.smoothed, aspect);
        self.radius = dynamic_radius(cfg, self.world, aspect);
    }
}

/// Radius interpolated toward `cursor_radius_max` as the cursor approaches
/// the nearest fixed anchor.
pub fn dynamic_radius(cfg: &SceneConfig, cursor_world: Vec3, aspect: f32) -> f32 {
    let mut closest = f32::MAX;
    for anchor in anchor_world_positions(aspect) {
        closest = closest.min(cursor_world.distance(anchor));
    }
    let proximity = (1.0 - closest / cfg.merge_distance).max(0.0);
    let eased = smoothstep01(proximity);
    cfg.cursor_radius_min + (cfg.cursor_radius_max - cfg.cursor_radius_min) * eased
}
