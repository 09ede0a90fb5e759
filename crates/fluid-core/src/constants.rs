// Scene and marching constants shared by the CPU mirror and the shader.

/// Normalized screen positions (Y-up) of the four fixed anchor spheres:
/// large top-left, small top-left, large bottom-right, small bottom-right.
pub const ANCHOR_SCREEN_POSITIONS: [[f32; 2]; 4] =
    [[0.08, 0.92], [0.25, 0.72], [0.92, 0.08], [0.72, 0.25]];

// Sphere tracing
pub const HIT_EPSILON: f32 = 0.001;
pub const MAX_DEPTH: f32 = 5.0;
/// Step damping; blended fields under-report distance near merge seams, so a
/// full-length step could overshoot.
pub const STEP_DAMPING: f32 = 0.9;
pub const NORMAL_EPSILON: f32 = 0.002;
/// Distance reported for empty space before any primitive is blended in.
pub const FAR_DISTANCE: f32 = 100.0;

// Blend factors
/// Within a top-left or bottom-right anchor pair.
pub const ANCHOR_PAIR_SMOOTHNESS: f32 = 0.4;
/// Anchor pairs into the main field.
pub const ANCHOR_FIELD_SMOOTHNESS: f32 = 0.3;
/// Cursor/orbiter blend when the cursor is far from every orbiter.
pub const CURSOR_BLEND_BASE: f32 = 0.05;
