//! CPU mirror of the scene blend tree: orbiting spheres, fixed anchors and
//! the cursor sphere merged with smooth minimums. The fragment shader
//! evaluates the same tree per pixel; this side feeds the cursor physics and
//! keeps the field testable on the host.

use crate::config::SceneConfig;
use crate::constants::{
    ANCHOR_FIELD_SMOOTHNESS, ANCHOR_PAIR_SMOOTHNESS, ANCHOR_SCREEN_POSITIONS, CURSOR_BLEND_BASE,
    FAR_DISTANCE,
};
use crate::sdf::{screen_to_world, sd_sphere, smin, smoothstep01};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// World positions of the four fixed anchors for the current aspect ratio.
pub fn anchor_world_positions(aspect: f32) -> [Vec3; 4] {
    let mut out = [Vec3::ZERO; 4];
    for (slot, pos) in out.iter_mut().zip(ANCHOR_SCREEN_POSITIONS) {
        *slot = screen_to_world(Vec2::from(pos), aspect);
    }
    out
}

/// Eased distance of a normalized screen position from the viewport center.
pub fn distance_to_center(pos: Vec2) -> f32 {
    smoothstep01((pos - Vec2::splat(0.5)).length() * 2.0)
}

/// Scale applied to every orbit radius. Orbits tighten toward
/// `min_movement_scale` as the pointer approaches the viewport center.
pub fn movement_scale(cfg: &SceneConfig, pointer: Vec2) -> f32 {
    if !cfg.mouse_proximity_effect {
        return cfg.movement_scale;
    }
    let mix = smoothstep01(distance_to_center(pointer));
    cfg.min_movement_scale + (cfg.max_movement_scale - cfg.min_movement_scale) * mix
}

/// Orbit widening as the cursor sphere nears the scene origin.
pub fn proximity_scale(cursor_world: Vec3) -> f32 {
    1.0 + (1.0 - smoothstep01(cursor_world.length())) * 0.5
}

/// Radius of orbiting sphere `index`; cycles through three sizes.
pub fn sphere_radius(index: u32) -> f32 {
    0.12 + (index as f32 % 3.0) * 0.06
}

/// One orbiting sphere after cursor attraction, with the blend factor used
/// to merge it into the field.
#[derive(Clone, Copy, Debug)]
pub struct OrbitSphere {
    pub offset: Vec3,
    pub radius: f32,
    /// Ramps cubically from the base blend toward `smoothness` as the cursor
    /// closes within the merge distance.
    pub blend: f32,
}

/// Compute orbiting sphere `index` at animation time `t`. The first two
/// indices are a phase-opposed pair; the rest follow the generalized orbit
/// with a per-index phase offset.
pub fn orbit_sphere(
    cfg: &SceneConfig,
    index: u32,
    t: f32,
    movement: f32,
    cursor_world: Vec3,
) -> OrbitSphere {
    let fi = index as f32;
    let speed = 0.4 + fi * 0.12;
    let orbit_radius = (0.3 + (fi % 3.0) * 0.15) * movement * proximity_scale(cursor_world);
    let phase = fi * PI * 0.35;

    let mut offset = match index {
        0 => Vec3::new(
            (t * speed).sin() * orbit_radius * 0.7,
            (t * 0.5).sin() * orbit_radius,
            (t * speed * 0.7).cos() * orbit_radius * 0.5,
        ),
        1 => Vec3::new(
            (t * speed + PI).sin() * orbit_radius * 0.5,
            -(t * 0.5).sin() * orbit_radius,
            (t * speed * 0.7 + PI).cos() * orbit_radius * 0.5,
        ),
        _ => Vec3::new(
            (t * speed + phase).sin() * orbit_radius * 0.8,
            (t * speed * 0.85 + phase * 1.3).cos() * orbit_radius * 0.6,
            (t * speed * 0.5 + phase).sin() * 0.3,
        ),
    };

    // The blend factor keys off the distance before attraction is applied.
    let to_cursor = cursor_world - offset;
    let cursor_dist = to_cursor.length();
    if cursor_dist < cfg.merge_distance && cursor_dist > 0.0 {
        let attraction = (1.0 - cursor_dist / cfg.merge_distance) * 0.3;
        offset += to_cursor.normalize() * attraction;
    }

    let blend = if cursor_dist < cfg.merge_distance {
        let influence = 1.0 - cursor_dist / cfg.merge_distance;
        CURSOR_BLEND_BASE + (cfg.smoothness - CURSOR_BLEND_BASE) * influence * influence * influence
    } else {
        CURSOR_BLEND_BASE
    };

    OrbitSphere {
        offset,
        radius: sphere_radius(index),
        blend,
    }
}

/// Everything the blend tree needs for one frame, borrowed immutably.
#[derive(Clone, Copy)]
pub struct SceneSample<'a> {
    pub cfg: &'a SceneConfig,
    /// Elapsed seconds (before the animation-speed scale).
    pub time: f32,
    pub aspect: f32,
    /// Orbiting spheres after the quality cap.
    pub sphere_count: u32,
    /// Smoothed normalized pointer position.
    pub pointer: Vec2,
    pub cursor_world: Vec3,
    pub cursor_radius: f32,
}

impl SceneSample<'_> {
    /// Signed distance from `pos` to the merged scene surface.
    pub fn distance(&self, pos: Vec3) -> f32 {
        let cfg = self.cfg;
        let t = self.time * cfg.animation_speed;
        let movement = movement_scale(cfg, self.pointer);

        let mut result = FAR_DISTANCE;
        for i in 0..self.sphere_count {
            let s = orbit_sphere(cfg, i, t, movement, self.cursor_world);
            result = smin(result, sd_sphere(pos - s.offset, s.radius), s.blend);
        }

        let anchors = anchor_world_positions(self.aspect);
        let top_left_group = smin(
            sd_sphere(pos - anchors[0], cfg.anchor_radii[0]),
            sd_sphere(pos - anchors[1], cfg.anchor_radii[1]),
            ANCHOR_PAIR_SMOOTHNESS,
        );
        let bottom_right_group = smin(
            sd_sphere(pos - anchors[2], cfg.anchor_radii[2]),
            sd_sphere(pos - anchors[3], cfg.anchor_radii[3]),
            ANCHOR_PAIR_SMOOTHNESS,
        );
        result = smin(result, top_left_group, ANCHOR_FIELD_SMOOTHNESS);
        result = smin(result, bottom_right_group, ANCHOR_FIELD_SMOOTHNESS);

        smin(
            result,
            sd_sphere(pos - self.cursor_world, self.cursor_radius),
            cfg.smoothness,
        )
    }
}
