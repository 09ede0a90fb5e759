// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_target_normalizes_and_flips_y() {
    let [x, y] = pointer_target(200.0, 150.0, 800.0, 600.0);
    assert!((x - 0.25).abs() < 1e-6);
    assert!((y - 0.75).abs() < 1e-6);
}

#[test]
fn pointer_target_top_left_maps_to_world_up() {
    // Client (0, 0) is the top-left corner; world up means y = 1 there.
    assert_eq!(pointer_target(0.0, 0.0, 800.0, 600.0), [0.0, 1.0]);
    assert_eq!(pointer_target(800.0, 600.0, 800.0, 600.0), [1.0, 0.0]);
}

#[test]
fn pointer_target_clamps_outside_the_window() {
    let [x, y] = pointer_target(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(x, 0.0);
    assert_eq!(y, 0.0);
    let [x, y] = pointer_target(1000.0, -10.0, 800.0, 600.0);
    assert_eq!(x, 1.0);
    assert_eq!(y, 1.0);
}

#[test]
fn pointer_target_degenerate_window_centers() {
    assert_eq!(pointer_target(100.0, 100.0, 0.0, 600.0), [0.5, 0.5]);
    assert_eq!(pointer_target(100.0, 100.0, 800.0, 0.0), [0.5, 0.5]);
}

#[test]
fn pixel_ratio_clamps_to_the_tier_budget() {
    assert_eq!(clamped_pixel_ratio(3.0, 2.0), 2.0);
    assert_eq!(clamped_pixel_ratio(1.25, 2.0), 1.25);
    assert_eq!(clamped_pixel_ratio(2.0, 1.5), 1.5);
    // A missing ratio counts as 1.
    assert_eq!(clamped_pixel_ratio(0.0, 2.0), 1.0);
    assert_eq!(clamped_pixel_ratio(-1.0, 2.0), 1.0);
}

#[test]
fn backing_size_scales_the_css_rect() {
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
    assert_eq!(backing_size(1024.0, 768.0, 2.0), (2048, 1536));
}

#[test]
fn backing_size_propagates_a_collapsed_rect() {
    // A zero-area container must produce a zero backing, not a 1px floor;
    // the frame loop skips drawing until the area returns.
    assert_eq!(backing_size(0.0, 600.0, 2.0), (0, 1200));
    assert_eq!(backing_size(800.0, 0.0, 2.0), (1600, 0));
    assert_eq!(backing_size(0.0, 0.0, 1.0), (0, 0));
}
