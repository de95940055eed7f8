// Exclusive focus and the celebration it triggers.

use tree_core::{FocusChange, FocusController, Scene, SceneConfig, Smoothing};

fn scene() -> Scene {
    Scene::new(SceneConfig {
        foliage_count: 300,
        ornament_count: 10,
        snow_count: 10,
        star_count: 10,
        seed: Some(21),
        ..SceneConfig::default()
    })
    .unwrap()
}

#[test]
fn at_most_one_slot_focused() {
    let mut f = FocusController::new(9);
    for i in [0, 3, 3, 8, 1, 1, 1] {
        f.click_slot(i).unwrap();
        let count = (0..9).filter(|&s| f.is_focused(s)).count();
        assert!(count <= 1);
    }
}

#[test]
fn clicking_focused_slot_clears_it() {
    let mut f = FocusController::new(9);
    f.click_slot(6).unwrap();
    assert_eq!(f.click_slot(6).unwrap(), FocusChange::Cleared(6));
    assert_eq!(f.focused(), None);
    assert_eq!(f.click_background(), FocusChange::Unchanged);
}

#[test]
fn out_of_range_slot_is_rejected() {
    let mut f = FocusController::new(9);
    assert!(f.click_slot(9).is_err());
    assert_eq!(f.focused(), None);
}

#[test]
fn refocus_does_not_restack_fireworks() {
    let mut s = scene();
    s.click_slot(2, 10.0).unwrap();
    let first = s.fireworks().len();
    assert!(first >= 2);
    s.click_slot(5, 10.3).unwrap();
    assert_eq!(s.fireworks().len(), first);
}

#[test]
fn focused_slot_approaches_camera() {
    let mut s = scene();
    s.set_mode(tree_core::Mode::Assembled);
    for f in 0..120 {
        s.frame(f as f64 / 60.0, 1.0 / 60.0);
    }
    s.click_slot(4, 2.0).unwrap();
    for f in 120..300 {
        s.frame(f as f64 / 60.0, 1.0 / 60.0);
    }
    let target = s.camera().point_in_front(tree_core::constants::PHOTO_FOCUS_DISTANCE);
    let slot = &s.slots().slots()[4];
    assert!(slot.position.distance(target) < 0.01);
    assert!(slot.scale > 2.5);

    // clearing lets it glide back to the tree
    s.clear_focus();
    for f in 300..700 {
        s.frame(f as f64 / 60.0, 1.0 / 60.0);
    }
    assert!(!s.slots().slots()[4].is_returning());
}

fn run(s: &mut Scene, frames: std::ops::Range<u32>) {
    for f in frames {
        s.frame(f as f64 / 60.0, 1.0 / 60.0);
    }
}

#[test]
fn hovered_slot_grows_alone() {
    let mut s = scene();
    run(&mut s, 0..120);
    s.set_hover(Some(2));
    run(&mut s, 120..240);
    let slots = s.slots().slots();
    let hover = tree_core::constants::PHOTO_HOVER_SCALE;
    assert!((slots[2].scale - hover).abs() < 1e-3, "hovered scale {}", slots[2].scale);
    assert_eq!(slots[3].scale, 1.0);

    s.set_hover(None);
    run(&mut s, 240..400);
    assert!((s.slots().slots()[2].scale - 1.0).abs() < 1e-3);
}

#[test]
fn focused_slot_faces_camera() {
    let mut s = scene();
    s.set_mode(tree_core::Mode::Assembled);
    run(&mut s, 0..60);
    s.click_slot(1, 1.0).unwrap();
    run(&mut s, 60..90);
    let rotation = s.slots().slots()[1].rotation;
    assert!(rotation.dot(s.camera().orientation()).abs() > 0.9999);
}

#[test]
fn scattered_slots_keep_turning() {
    let mut s = scene();
    run(&mut s, 0..10);
    let before: Vec<_> = s.slots().slots().iter().map(|p| p.rotation).collect();
    run(&mut s, 10..100);
    for (slot, was) in s.slots().slots().iter().zip(before) {
        assert!(slot.rotation.dot(was).abs() < 0.9999, "slot {} frozen", slot.index);
    }
}

#[test]
fn time_based_focus_matches_across_frame_rates() {
    let scale_after_focus = |fps: u32| {
        let mut s = Scene::new(SceneConfig {
            foliage_count: 300,
            ornament_count: 10,
            snow_count: 10,
            star_count: 10,
            seed: Some(21),
            smoothing: Smoothing::FrameRateIndependent,
            ..SceneConfig::default()
        })
        .unwrap();
        let dt = 1.0 / fps as f64;
        s.click_slot(0, 0.0).unwrap();
        for f in 1..=fps / 4 {
            s.frame(f as f64 * dt, dt as f32);
        }
        s.slots().slots()[0].scale
    };
    let slow = scale_after_focus(30);
    let fast = scale_after_focus(120);
    assert!(slow > 1.5 && slow < 2.55, "slow {slow}");
    assert!((slow - fast).abs() < 0.01, "30fps {slow} vs 120fps {fast}");
}
