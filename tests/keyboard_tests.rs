// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/events/keymap.rs");
}

use keymap::*;

#[test]
fn space_toggles_mode() {
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleMode));
}

#[test]
fn letter_shortcuts_ignore_case() {
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMusic));
    assert_eq!(action_for_key("M"), Some(KeyAction::ToggleMusic));
    assert_eq!(action_for_key("h"), Some(KeyAction::ToggleHint));
    assert_eq!(action_for_key("H"), Some(KeyAction::ToggleHint));
}

#[test]
fn escape_and_enter() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::ClearFocus));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleFullscreen));
}

#[test]
fn unmapped_keys_do_nothing() {
    for key in ["a", "Tab", "ArrowUp", "Shift", "", "Spacebar", "esc"] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn only_page_level_keys_suppress_default() {
    assert!(suppresses_default(KeyAction::ToggleMode));
    assert!(suppresses_default(KeyAction::ToggleFullscreen));
    assert!(!suppresses_default(KeyAction::ToggleMusic));
    assert!(!suppresses_default(KeyAction::ClearFocus));
    assert!(!suppresses_default(KeyAction::ToggleHint));
}
