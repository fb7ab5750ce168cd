use super::*;
use crate::dom::MemoryDocument;

#[test]
fn tab_enters_keyboard_mode() {
    assert_eq!(classify_key("Tab"), KeyAction::EnterKeyboardMode);
}

#[test]
fn escape_dismisses_notification() {
    assert_eq!(classify_key("Escape"), KeyAction::DismissNotification);
    assert_eq!(classify_key("Esc"), KeyAction::DismissNotification);
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Enter", "ArrowLeft", " "] {
        assert_eq!(classify_key(key), KeyAction::Ignore, "key={key:?}");
    }
}

#[test]
fn keyboard_mode_toggles_body_class() {
    let mut doc = MemoryDocument::new();
    doc.apply(&keyboard_mode(true));
    assert!(doc.has_class(&Target::Body, "keyboard-nav"));
    doc.apply(&keyboard_mode(false));
    assert!(!doc.has_class(&Target::Body, "keyboard-nav"));
}
