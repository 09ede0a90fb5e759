//! Signed-distance primitives and the screen-to-world mapping, mirrored with
//! `shaders/scene.wgsl`.

use glam::{Vec2, Vec3};

/// Polynomial smooth minimum with quadratic falloff. `k <= 0` degenerates to
/// a hard `min`, so `smin(a, b, 0) == min(a, b)` holds exactly.
#[inline]
pub fn smin(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

#[inline]
pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Hermite smoothstep `3t^2 - 2t^3` with the input clamped to [0, 1].
#[inline]
pub fn smoothstep01(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Map a normalized screen position (Y-up) into world space using the same
/// aspect-corrected orthographic mapping the shader uses for its rays.
#[inline]
pub fn screen_to_world(pos: Vec2, aspect: f32) -> Vec3 {
    let mut uv = pos * 2.0 - Vec2::ONE;
    uv.x *= aspect;
    (uv * 2.0).extend(0.0)
}
