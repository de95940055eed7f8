// Host-side tests for page lifecycle handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn hiding_stops_a_running_loop() {
    assert_eq!(loop_action(PageEvent::Hide, true), LoopAction::Stop);
    assert_eq!(loop_action(PageEvent::Hide, false), LoopAction::Keep);
}

#[test]
fn restored_page_resumes_stopped_loop() {
    let show = PageEvent::Show { persisted: true };
    assert_eq!(loop_action(PageEvent::Hide, true), LoopAction::Stop);
    assert_eq!(loop_action(show, false), LoopAction::Resume);
}

#[test]
fn fresh_load_or_running_loop_is_left_alone() {
    assert_eq!(loop_action(PageEvent::Show { persisted: false }, false), LoopAction::Keep);
    assert_eq!(loop_action(PageEvent::Show { persisted: true }, true), LoopAction::Keep);
}
