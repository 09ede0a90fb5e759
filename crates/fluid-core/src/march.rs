//! Damped sphere tracing over the scene blend tree.

use crate::constants::{HIT_EPSILON, MAX_DEPTH, NORMAL_EPSILON, STEP_DAMPING};
use crate::scene::SceneSample;
use glam::Vec3;

/// Outcome of one traced ray.
#[derive(Clone, Copy, Debug)]
pub struct MarchResult {
    /// Depth along the ray of the surface hit, if any.
    pub hit: Option<f32>,
    /// Steps actually taken; never exceeds the budget.
    pub steps: u32,
}

/// Walk the scene field from `origin` along `dir` until a hit, the miss
/// depth, or the step budget. The budget is the hard bound: the loop cannot
/// run longer regardless of field shape.
pub fn ray_march(scene: &SceneSample<'_>, origin: Vec3, dir: Vec3, max_steps: u32) -> MarchResult {
    let mut depth = 0.0_f32;
    for step in 0..max_steps {
        let d = scene.distance(origin + dir * depth);
        if d < HIT_EPSILON {
            return MarchResult {
                hit: Some(depth),
                steps: step + 1,
            };
        }
        if depth > MAX_DEPTH {
            return MarchResult {
                hit: None,
                steps: step + 1,
            };
        }
        depth += d * STEP_DAMPING;
    }
    MarchResult {
        hit: None,
        steps: max_steps,
    }
}

/// Central-difference gradient of the scene field, normalized.
pub fn surface_normal(scene: &SceneSample<'_>, p: Vec3) -> Vec3 {
    let e = NORMAL_EPSILON;
    Vec3::new(
        scene.distance(p + Vec3::X * e) - scene.distance(p - Vec3::X * e),
        scene.distance(p + Vec3::Y * e) - scene.distance(p - Vec3::Y * e),
        scene.distance(p + Vec3::Z * e) - scene.distance(p - Vec3::Z * e),
    )
    .normalize()
}
