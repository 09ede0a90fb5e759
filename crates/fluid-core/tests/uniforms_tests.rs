use fluid_core::config::SceneConfig;
use fluid_core::state::FrameState;
use fluid_core::uniforms::SceneUniforms;
use glam::Vec2;

#[test]
fn uniform_block_layout_matches_the_shader() {
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 192);
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    assert_eq!(SceneUniforms::SIZE, 192);
}

#[test]
fn pack_mirrors_config_and_frame_state() {
    let cfg = SceneConfig::default();
    let mut state = FrameState::new(&cfg);
    state.logical_size = Vec2::new(800.0, 600.0);
    state.physical_size = Vec2::new(1600.0, 1200.0);
    state.cursor.target = Vec2::new(0.7, 0.3);
    state.tick(2.5, &cfg);

    let u = SceneUniforms::pack(&cfg, &state);
    assert_eq!(u.resolution, [800.0, 600.0]);
    assert_eq!(u.actual_resolution, [1600.0, 1200.0]);
    assert_eq!(u.pointer, state.cursor.smoothed.to_array());
    assert_eq!(u.time, 2.5);
    assert_eq!(u.cursor_sphere, state.cursor.world.to_array());
    assert_eq!(u.anchor_radii, cfg.anchor_radii);
    assert_eq!(u.proximity_effect, 1.0);
    assert!(u.cursor_radius >= cfg.cursor_radius_min);
    assert!(u.cursor_radius <= cfg.cursor_radius_max);
}

#[test]
fn shader_source_expects_prepended_tier_constants() {
    // The renderer prepends these consts; the source must use them without
    // defining them.
    assert!(fluid_core::SCENE_WGSL.contains("SPHERE_COUNT"));
    assert!(fluid_core::SCENE_WGSL.contains("MAX_MARCH_STEPS"));
    assert!(!fluid_core::SCENE_WGSL.contains("const SPHERE_COUNT"));
    assert!(!fluid_core::SCENE_WGSL.contains("const MAX_MARCH_STEPS"));
    assert!(fluid_core::SCENE_WGSL.contains("struct SceneUniforms"));
    assert!(fluid_core::SCENE_WGSL.contains("fn vs_fullscreen"));
    assert!(fluid_core::SCENE_WGSL.contains("fn fs_scene"));
}
