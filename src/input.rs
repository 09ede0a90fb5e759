// Pure input math, kept free of web_sys so the host-side tests can include
// this module directly.

/// Normalize window-space pointer coordinates to [0, 1]^2 with Y flipped to
/// the world's up axis. A degenerate window size yields the centered
/// default.
#[inline]
pub fn pointer_target(client_x: f32, client_y: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.5, 0.5];
    }
    [
        (client_x / width).clamp(0.0, 1.0),
        1.0 - (client_y / height).clamp(0.0, 1.0),
    ]
}

/// Device pixel ratio clamped to the tier budget; a missing or zero ratio
/// counts as 1.
#[inline]
pub fn clamped_pixel_ratio(ratio: f64, max_ratio: f64) -> f64 {
    let ratio = if ratio > 0.0 { ratio } else { 1.0 };
    ratio.min(max_ratio)
}

/// Canvas backing size for a CSS rect under an already-clamped pixel ratio.
/// A collapsed rect maps to a zero backing; the frame loop skips drawing
/// until it grows again.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, ratio: f64) -> (u32, u32) {
    ((css_width * ratio) as u32, (css_height * ratio) as u32)
}
