//! Scene configuration. Every tunable is fixed when an instance mounts and
//! never mutated afterwards.

use glam::Vec3;

/// Immutable tunables for one mounted background instance.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Orbiting spheres requested; the quality tier may cap this lower.
    pub sphere_count: u32,

    // Lighting
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    pub specular_intensity: f32,
    pub specular_power: f32,
    pub fresnel_power: f32,
    /// Key light direction (normalized in the shader).
    pub light_position: Vec3,

    // Palette
    pub background_color: Vec3,
    pub sphere_color: Vec3,
    pub light_color: Vec3,
    pub glow_color: Vec3,

    // Surface blending and tone
    pub smoothness: f32,
    pub contrast: f32,
    pub fog_density: f32,

    // Pointer glow
    pub glow_intensity: f32,
    pub glow_radius: f32,

    /// Radii of the four fixed anchors: large top-left, small top-left,
    /// large bottom-right, small bottom-right.
    pub anchor_radii: [f32; 4],

    // Cursor sphere
    pub cursor_radius_min: f32,
    pub cursor_radius_max: f32,
    pub pointer_smoothing: f32,
    pub merge_distance: f32,

    // Orbit animation
    pub animation_speed: f32,
    pub movement_scale: f32,
    pub mouse_proximity_effect: bool,
    pub min_movement_scale: f32,
    pub max_movement_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere_count: 8,
            ambient_intensity: 0.05,
            diffuse_intensity: 1.0,
            specular_intensity: 1.5,
            specular_power: 8.0,
            fresnel_power: 1.5,
            light_position: Vec3::new(0.5, 1.0, 0.5),
            // slate-900 page background
            background_color: srgb(0x0f, 0x17, 0x2a),
            // deep emerald sphere body
            sphere_color: srgb(0x0a, 0x2a, 0x2a),
            // emerald key light
            light_color: srgb(0x10, 0xb9, 0x81),
            // lighter emerald pointer glow
            glow_color: srgb(0x34, 0xd3, 0x99),
            smoothness: 0.4,
            contrast: 1.1,
            fog_density: 0.10,
            glow_intensity: 0.8,
            glow_radius: 1.5,
            anchor_radii: [0.8, 0.3, 0.9, 0.35],
            cursor_radius_min: 0.08,
            cursor_radius_max: 0.15,
            pointer_smoothing: 0.1,
            merge_distance: 1.5,
            animation_speed: 0.6,
            movement_scale: 1.2,
            mouse_proximity_effect: true,
            min_movement_scale: 0.3,
            max_movement_scale: 1.0,
        }
    }
}

/// 8-bit sRGB components as a 0..1 color vector.
fn srgb(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
}
