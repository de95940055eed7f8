// Easing and transition convergence.

use tree_core::ease::ease_out_cubic;
use tree_core::{Smoothing, Transition};

#[test]
fn ease_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    let mut prev = 0.0;
    for i in 1..100 {
        let x = i as f32 / 100.0;
        let y = ease_out_cubic(x);
        assert!(y > x, "ease({x}) = {y}");
        assert!(y >= prev);
        prev = y;
    }
}

#[test]
fn hundred_frames_at_k_002() {
    let mut t = Transition::new(0.02);
    for _ in 0..100 {
        t.step(1.0);
    }
    let expected = 1.0 - 0.98f32.powi(100);
    assert!((t.progress() - expected).abs() < 1e-4);
    assert!((t.progress() - 0.867).abs() < 1e-3);
}

#[test]
fn progress_never_jumps_to_target() {
    let mut t = Transition::new(0.04);
    for _ in 0..1_000 {
        t.step(1.0);
        assert!(t.progress() < 1.0 + 1e-6);
    }
    assert!(t.progress() > 0.999);
}

#[test]
fn toggling_midway_reverses_without_reset() {
    let mut t = Transition::new(0.03);
    for _ in 0..30 {
        t.step(1.0);
    }
    let peak = t.progress();
    t.step(0.0);
    assert!(t.progress() < peak);
    assert!(t.progress() > peak * 0.9);
}

#[test]
fn frame_rate_independent_matches_at_sixty_fps() {
    let mut fixed = Transition::new(0.02);
    let mut timed = Transition::with_smoothing(0.02, Smoothing::FrameRateIndependent);
    for _ in 0..120 {
        fixed.step_dt(1.0, 1.0 / 144.0);
        timed.step_dt(1.0, 1.0 / 60.0);
    }
    assert!((fixed.progress() - timed.progress()).abs() < 1e-4);
}
