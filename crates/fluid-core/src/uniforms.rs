//! GPU uniform block, mirrored 1:1 with the WGSL `SceneUniforms` struct.

use crate::config::SceneConfig;
use crate::state::FrameState;

/// Uniform block pushed once per frame.
///
/// Field order and padding must match the WGSL declaration in
/// `shaders/scene.wgsl`; `SIZE` is asserted when the pipeline is built and
/// by the layout test. Scalars after each `vec3` fill the 16-byte slot so
/// the struct has no implicit padding on either side.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub resolution: [f32; 2],
    pub actual_resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub time: f32,
    pub merge_distance: f32,
    pub cursor_sphere: [f32; 3],
    pub cursor_radius: f32,
    pub background_color: [f32; 3],
    pub contrast: f32,
    pub sphere_color: [f32; 3],
    pub fog_density: f32,
    pub light_color: [f32; 3],
    pub ambient_intensity: f32,
    pub light_position: [f32; 3],
    pub diffuse_intensity: f32,
    pub glow_color: [f32; 3],
    pub glow_intensity: f32,
    pub glow_radius: f32,
    pub specular_intensity: f32,
    pub specular_power: f32,
    pub fresnel_power: f32,
    pub smoothness: f32,
    pub animation_speed: f32,
    pub min_movement_scale: f32,
    pub max_movement_scale: f32,
    pub anchor_radii: [f32; 4],
    pub movement_scale: f32,
    pub proximity_effect: f32,
    pub _pad: [f32; 2],
}

impl SceneUniforms {
    /// Byte size of the GPU-side block.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Pack the current frame into the uniform layout.
    pub fn pack(cfg: &SceneConfig, state: &FrameState) -> Self {
        Self {
            resolution: state.logical_size.to_array(),
            actual_resolution: state.physical_size.to_array(),
            pointer: state.cursor.smoothed.to_array(),
            time: state.elapsed,
            merge_distance: cfg.merge_distance,
            cursor_sphere: state.cursor.world.to_array(),
            cursor_radius: state.cursor.radius,
            background_color: cfg.background_color.to_array(),
            contrast: cfg.contrast,
            sphere_color: cfg.sphere_color.to_array(),
            fog_density: cfg.fog_density,
            light_color: cfg.light_color.to_array(),
            ambient_intensity: cfg.ambient_intensity,
            light_position: cfg.light_position.to_array(),
            diffuse_intensity: cfg.diffuse_intensity,
            glow_color: cfg.glow_color.to_array(),
            glow_intensity: cfg.glow_intensity,
            glow_radius: cfg.glow_radius,
            specular_intensity: cfg.specular_intensity,
            specular_power: cfg.specular_power,
            fresnel_power: cfg.fresnel_power,
            smoothness: cfg.smoothness,
            animation_speed: cfg.animation_speed,
            min_movement_scale: cfg.min_movement_scale,
            max_movement_scale: cfg.max_movement_scale,
            anchor_radii: cfg.anchor_radii,
            movement_scale: cfg.movement_scale,
            proximity_effect: if cfg.mouse_proximity_effect { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}
