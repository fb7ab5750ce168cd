//! Page-wide keyboard handling.
//!
//! `Tab` switches the body into keyboard-navigation styling (visible focus
//! rings); any pointer press switches it back. `Escape` dismisses the current
//! notification.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use crate::consts::KEYBOARD_NAV_CLASS;
use crate::dom::{Mutation, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    EnterKeyboardMode,
    DismissNotification,
    Ignore,
}

/// Classify a `KeyboardEvent.key` value.
#[must_use]
pub fn classify_key(key: &str) -> KeyAction {
    match key {
        "Tab" => KeyAction::EnterKeyboardMode,
        "Escape" | "Esc" => KeyAction::DismissNotification,
        _ => KeyAction::Ignore,
    }
}

#[must_use]
pub fn keyboard_mode(enabled: bool) -> Vec<Mutation> {
    vec![Mutation::toggle_class(Target::Body, KEYBOARD_NAV_CLASS, enabled)]
}
