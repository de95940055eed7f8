// Host-side tests for the music playing state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod playback {
    include!("../src/playback.rs");
}

use playback::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorded() -> (PlayState, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (PlayState::new(move |p| sink.borrow_mut().push(p)), seen)
}

#[test]
fn rejected_playback_reports_off() {
    let (state, seen) = recorded();
    state.set(true);
    // async rejection arrives through a clone
    let later = state.clone();
    assert!(later.set(false));
    assert!(!state.is_playing());
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn unchanged_state_is_not_reported() {
    let (state, seen) = recorded();
    assert!(!state.set(false));
    state.set(true);
    assert!(!state.set(true));
    assert_eq!(*seen.borrow(), vec![true]);
}
