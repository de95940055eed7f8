// Host-side tests for front-end constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        TOGGLE_MODE_ID,
        PHOTO_INPUT_ID,
        TOGGLE_MUSIC_ID,
        HINT_ID,
        STATUS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_and_upload_limits_are_sane() {
    assert!(MUSIC_VOLUME > 0.0 && MUSIC_VOLUME <= 1.0);
    assert!(MUSIC_URL.ends_with(".mp3"));
    assert!(MAX_UPLOAD_DIMENSION >= 512);
    assert!(CLICK_SLOP_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_and_post_settings_are_sane() {
    assert!(MAX_FRAME_DT > 0.0 && MAX_FRAME_DT <= 0.25);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..0.1).contains(c)));
    assert_eq!(PLACEHOLDER_RGBA[3], 255);
    assert!(MIN_INSTANCE_CAPACITY > 0);
}

#[test]
fn mode_labels_differ() {
    assert_ne!(MODE_LABEL_SCATTERED, MODE_LABEL_ASSEMBLED);
    assert_ne!(MUSIC_LABEL_OFF, MUSIC_LABEL_ON);
}
