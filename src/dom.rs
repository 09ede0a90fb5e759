//! DOM helpers for mounting and sizing the background canvas.

use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels; (0, 0) when unavailable.
pub fn window_inner_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Device pixel ratio clamped to the tier budget.
pub fn clamped_ratio(max_pixel_ratio: f32) -> f64 {
    web::window().map_or(1.0, |w| {
        input::clamped_pixel_ratio(w.device_pixel_ratio(), f64::from(max_pixel_ratio))
    })
}

/// Create a full-bleed canvas inside `container`.
pub fn create_background_canvas(container: &web::Element) -> Option<web::HtmlCanvasElement> {
    let document = window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let style = canvas.style();
    for (property, value) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "0"),
    ] {
        _ = style.set_property(property, value);
    }
    container.append_child(&canvas).ok()?;
    Some(canvas)
}

/// Resize the canvas backing store to its CSS size times the clamped pixel
/// ratio and return the CSS size. No floor is applied: a collapsed container
/// yields a zero backing and the frame loop stops drawing until it grows.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    max_pixel_ratio: f32,
) -> (f32, f32) {
    let ratio = clamped_ratio(max_pixel_ratio);
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = input::backing_size(rect.width(), rect.height(), ratio);
    canvas.set_width(width);
    canvas.set_height(height);
    (rect.width() as f32, rect.height() as f32)
}

/// Capability signals consumed by the quality classifier.
pub fn capability_signals() -> (String, u32) {
    let Some(w) = web::window() else {
        return (String::new(), 1);
    };
    let navigator = w.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let cores = navigator.hardware_concurrency();
    let cores = if cores.is_finite() && cores >= 1.0 {
        cores as u32
    } else {
        1
    };
    (user_agent, cores)
}
