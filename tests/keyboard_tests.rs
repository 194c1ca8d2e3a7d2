// Host-side tests for the pure keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::*;

#[test]
fn transport_keys() {
    assert_eq!(action_for_key(" "), Some(KeyAction::TogglePlay));
    assert_eq!(action_for_key("ArrowRight"), Some(KeyAction::Next));
    assert_eq!(action_for_key("ArrowLeft"), Some(KeyAction::Previous));
}

#[test]
fn letter_keys_ignore_case() {
    for (k, action) in [
        ("s", KeyAction::ToggleShuffle),
        ("t", KeyAction::CycleTheme),
        ("h", KeyAction::TogglePlayer),
    ] {
        assert_eq!(action_for_key(k), Some(action));
        assert_eq!(action_for_key(&k.to_uppercase()), Some(action));
    }
}

#[test]
fn fullscreen_keys() {
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::ExitFullscreen));
}

#[test]
fn unmapped_keys() {
    for k in ["a", "ArrowUp", "Tab", "1", ""] {
        assert_eq!(action_for_key(k), None, "{k:?}");
    }
}

#[test]
fn only_space_and_enter_suppress_the_browser_default() {
    assert!(KeyAction::TogglePlay.prevents_default());
    assert!(KeyAction::ToggleFullscreen.prevents_default());
    assert!(!KeyAction::Next.prevents_default());
    assert!(!KeyAction::ExitFullscreen.prevents_default());
}

#[test]
fn form_controls_swallow_shortcuts() {
    assert!(is_editable_target("INPUT"));
    assert!(is_editable_target("textarea"));
    assert!(is_editable_target("Select"));
    assert!(!is_editable_target("BUTTON"));
    assert!(!is_editable_target("BODY"));
}
