// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::{key_action, KeyAction};

#[test]
fn smoothing_toggle_keys() {
    assert_eq!(key_action("m"), Some(KeyAction::ToggleSmoothing));
    assert_eq!(key_action("M"), Some(KeyAction::ToggleSmoothing));
}

#[test]
fn fullscreen_keys() {
    assert_eq!(key_action("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(key_action("Escape"), Some(KeyAction::ExitFullscreen));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["", "a", "h", "H", " ", "ArrowUp", "enter", "mm", "1"] {
        assert_eq!(key_action(key), None, "key {key:?} should be ignored");
    }
}
