use fluid_core::config::SceneConfig;
use fluid_core::cursor::{dynamic_radius, CursorState};
use fluid_core::scene::anchor_world_positions;
use fluid_core::sdf::screen_to_world;
use glam::{Vec2, Vec3};

const ASPECT: f32 = 4.0 / 3.0;

#[test]
fn smoothing_error_decays_geometrically() {
    let cfg = SceneConfig::default();
    let mut cursor = CursorState::new(&cfg);
    cursor.target = Vec2::new(0.9, 0.2);
    let e0 = (cursor.target - cursor.smoothed).length();

    for n in 1..=60_i32 {
        cursor.tick(&cfg, ASPECT);
        let error = (cursor.target - cursor.smoothed).length();
        let expected = e0 * 0.9_f32.powi(n);
        assert!(
            (error - expected).abs() < 1e-4,
            "tick {n}: error {error}, expected {expected}"
        );
    }
}

#[test]
fn smoothing_converges_within_one_percent_in_44_ticks() {
    let cfg = SceneConfig::default();
    let mut cursor = CursorState::new(&cfg);
    cursor.target = Vec2::new(1.0, 0.0);
    let e0 = (cursor.target - cursor.smoothed).length();
    for _ in 0..44 {
        cursor.tick(&cfg, ASPECT);
    }
    assert!((cursor.target - cursor.smoothed).length() < 0.01 * e0);
}

#[test]
fn tick_projects_the_smoothed_pointer_into_world_space() {
    let cfg = SceneConfig::default();
    let mut cursor = CursorState::new(&cfg);
    cursor.target = Vec2::new(0.8, 0.65);
    for _ in 0..10 {
        cursor.tick(&cfg, ASPECT);
    }
    let expected = screen_to_world(cursor.smoothed, ASPECT);
    assert!((cursor.world - expected).length() < 1e-6);
}

#[test]
fn radius_grows_monotonically_approaching_an_anchor() {
    let cfg = SceneConfig::default();
    let anchor = anchor_world_positions(1.0)[0];
    let mut prev = 0.0_f32;
    for step in 0..=20 {
        let d = cfg.merge_distance * 2.0 * (1.0 - step as f32 / 20.0);
        let radius = dynamic_radius(&cfg, anchor + Vec3::new(d, 0.0, 0.0), 1.0);
        assert!(radius >= prev - 1e-6, "radius shrank while approaching");
        assert!(radius >= cfg.cursor_radius_min - 1e-6);
        assert!(radius <= cfg.cursor_radius_max + 1e-6);
        prev = radius;
    }
    // Sitting on the anchor center yields the full radius.
    assert!((prev - cfg.cursor_radius_max).abs() < 1e-6);
}

#[test]
fn radius_is_minimal_far_from_every_anchor() {
    let cfg = SceneConfig::default();
    // Bottom-center of the scene sits outside the merge distance of all
    // four anchors at square aspect.
    let radius = dynamic_radius(&cfg, Vec3::new(0.0, -2.5, 0.0), 1.0);
    assert_eq!(radius, cfg.cursor_radius_min);
}

#[test]
fn initial_state_is_centered_with_minimal_radius() {
    let cfg = SceneConfig::default();
    let cursor = CursorState::new(&cfg);
    assert_eq!(cursor.target, Vec2::splat(0.5));
    assert_eq!(cursor.smoothed, Vec2::splat(0.5));
    assert_eq!(cursor.radius, cfg.cursor_radius_min);
}
