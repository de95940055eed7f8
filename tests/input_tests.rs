// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub use tree_core::*;
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn small_moves_still_count_as_clicks() {
    assert!(is_click(Vec2::new(10.0, 10.0), Vec2::new(13.0, 14.0), 6.0));
    assert!(is_click(Vec2::ZERO, Vec2::ZERO, 0.0));
}

#[test]
fn drags_are_not_clicks() {
    assert!(!is_click(Vec2::new(10.0, 10.0), Vec2::new(30.0, 10.0), 6.0));
}

#[test]
fn release_without_press_is_not_a_click() {
    let mut ms = MouseState::default();
    assert!(!ms.release(Vec2::new(5.0, 5.0), 6.0));
    assert!(!ms.down);
}

#[test]
fn press_then_release_reports_click_once() {
    let mut ms = MouseState::default();
    ms.press(Vec2::new(100.0, 50.0));
    assert!(ms.down);
    assert!(ms.release(Vec2::new(102.0, 51.0), 6.0));
    assert!(!ms.down);
    assert_eq!((ms.x, ms.y), (102.0, 51.0));
    // second release has no matching press
    assert!(!ms.release(Vec2::new(102.0, 51.0), 6.0));
}

#[test]
fn canvas_centre_ray_looks_at_target() {
    let cam = core::Camera::default();
    let (ro, rd) = canvas_ray(&cam, Vec2::new(400.0, 300.0), 800, 600);
    assert_eq!(ro, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(rd.dot(expected) > 0.9999, "rd = {rd:?}");
}

#[test]
fn canvas_top_left_ray_points_up_and_left() {
    let cam = core::Camera::default();
    let (_, centre) = canvas_ray(&cam, Vec2::new(400.0, 300.0), 800, 600);
    let (_, corner) = canvas_ray(&cam, Vec2::new(0.0, 0.0), 800, 600);
    let right = centre.cross(cam.up).normalize();
    assert!(corner.dot(right) < 0.0);
    assert!(corner.y > centre.y);
}
