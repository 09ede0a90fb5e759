use fluid_core::config::SceneConfig;
use fluid_core::march::{ray_march, surface_normal};
use fluid_core::scene::{anchor_world_positions, SceneSample};
use glam::{Vec2, Vec3};

fn sample(cfg: &SceneConfig, time: f32) -> SceneSample<'_> {
    SceneSample {
        cfg,
        time,
        aspect: 4.0 / 3.0,
        sphere_count: 8,
        pointer: Vec2::splat(0.5),
        cursor_world: Vec3::new(6.0, 6.0, 0.0),
        cursor_radius: cfg.cursor_radius_min,
    }
}

#[test]
fn march_terminates_within_both_step_budgets() {
    let cfg = SceneConfig::default();
    for &budget in &[24_u32, 48] {
        for time in [0.0, 1.7, 42.0] {
            let s = sample(&cfg, time);
            let mut xi = -4.0_f32;
            while xi <= 4.0 {
                let mut yi = -4.0_f32;
                while yi <= 4.0 {
                    let result = ray_march(&s, Vec3::new(xi, yi, -1.0), Vec3::Z, budget);
                    assert!(result.steps <= budget, "budget {budget} exceeded at ({xi},{yi})");
                    yi += 0.5;
                }
                xi += 0.5;
            }
        }
    }
}

#[test]
fn march_hits_the_large_bottom_right_anchor() {
    let cfg = SceneConfig::default();
    let s = sample(&cfg, 0.0);
    let anchor = anchor_world_positions(s.aspect)[2];
    let result = ray_march(&s, anchor + Vec3::new(0.0, 0.0, -1.0), Vec3::Z, 48);
    let depth = result.hit.expect("ray aimed at an anchor must hit");
    // Surface of a radius-0.9 sphere, one unit in front of its center;
    // blending can only pull the hit closer.
    assert!(depth <= 1.0 - cfg.anchor_radii[2] + 0.01, "depth {depth}");
}

#[test]
fn march_misses_far_outside_the_scene() {
    let cfg = SceneConfig::default();
    let s = sample(&cfg, 3.0);
    let result = ray_march(&s, Vec3::new(20.0, 20.0, -1.0), Vec3::Z, 24);
    assert!(result.hit.is_none());
    // Empty space means big steps: the miss depth is reached quickly.
    assert!(result.steps < 24);
}

#[test]
fn miss_depth_bounds_the_march() {
    let cfg = SceneConfig::default();
    let s = sample(&cfg, 0.0);
    // A ray that never gets close to a surface reports no hit even with a
    // generous budget.
    let result = ray_march(&s, Vec3::new(-20.0, 15.0, -1.0), Vec3::Z, 48);
    assert!(result.hit.is_none());
}

#[test]
fn normal_at_an_anchor_front_face_points_back_at_the_ray() {
    let cfg = SceneConfig::default();
    let s = sample(&cfg, 0.0);
    let anchor = anchor_world_positions(s.aspect)[2];
    let origin = anchor + Vec3::new(0.0, 0.0, -1.0);
    let result = ray_march(&s, origin, Vec3::Z, 48);
    let depth = result.hit.expect("ray aimed at an anchor must hit");
    let normal = surface_normal(&s, origin + Vec3::Z * depth);
    assert!((normal.length() - 1.0).abs() < 1e-4);
    assert!(normal.z < 0.0, "front-face normal should oppose the ray");
}
