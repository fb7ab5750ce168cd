use super::*;
use crate::dom::MemoryDocument;

fn notifier() -> Notifier {
    Notifier::new(&Config::default())
}

fn notifications(doc: &MemoryDocument) -> Vec<&Target> {
    doc.with_class("notification")
}

// =============================================================
// show
// =============================================================

#[test]
fn show_creates_one_notification_with_default_timings() {
    let mut n = notifier();
    let mut doc = MemoryDocument::new();
    let shown = n.show("Saved");
    doc.apply(&shown.mutations);

    assert_eq!(shown.ttl_ms, 3000);
    assert_eq!(shown.fade_ms, 300);
    assert_eq!(notifications(&doc), vec![&shown.id.target()]);
    assert_eq!(doc.text(&shown.id.target()), Some("Saved"));
    assert_eq!(doc.attribute(&shown.id.target(), "role"), Some("status"));
    assert_eq!(n.reveal(shown.id).len(), 1);
}

#[test]
fn show_for_uses_custom_ttl() {
    let mut n = notifier();
    assert_eq!(n.show_for("x", 500).ttl_ms, 500);
}

#[test]
fn second_show_replaces_first_immediately() {
    let mut n = notifier();
    let mut doc = MemoryDocument::new();
    let a = n.show("A");
    doc.apply(&a.mutations);
    let b = n.show("B");
    doc.apply(&b.mutations);

    let remaining = notifications(&doc);
    assert_eq!(remaining.len(), 1);
    assert_eq!(doc.text(remaining[0]), Some("B"));
    assert_ne!(a.id, b.id);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn full_lifecycle_reveal_fade_remove() {
    let mut n = notifier();
    let mut doc = MemoryDocument::new();
    let shown = n.show("Hi");
    doc.apply(&shown.mutations);
    let target = shown.id.target();

    assert!(!doc.has_class(&target, "show"));
    doc.apply(&n.reveal(shown.id));
    assert!(doc.has_class(&target, "show"));

    doc.apply(&n.begin_fade(shown.id));
    assert!(doc.has_class(&target, "fade-out"));

    doc.apply(&n.finish(shown.id));
    assert!(!doc.contains(&target));
    assert!(n.dismiss().is_empty());
}

#[test]
fn superseded_timers_are_no_ops() {
    let mut n = notifier();
    let mut doc = MemoryDocument::new();
    let a = n.show("A");
    doc.apply(&a.mutations);
    let b = n.show("B");
    doc.apply(&b.mutations);

    // A's timers fire after B replaced it.
    assert!(n.reveal(a.id).is_empty());
    assert!(n.begin_fade(a.id).is_empty());
    assert!(n.finish(a.id).is_empty());

    assert_eq!(n.reveal(b.id).len(), 1);
    assert!(doc.contains(&b.id.target()));
    assert!(!doc.has_class(&b.id.target(), "fade-out"));
}

#[test]
fn finish_twice_is_idempotent() {
    let mut n = notifier();
    let shown = n.show("once");
    assert_eq!(n.finish(shown.id).len(), 1);
    assert!(n.finish(shown.id).is_empty());
}

#[test]
fn dismiss_without_notification_does_nothing() {
    let mut n = notifier();
    assert!(n.dismiss().is_empty());
}

#[test]
fn dismiss_removes_current() {
    let mut n = notifier();
    let mut doc = MemoryDocument::new();
    let shown = n.show("bye");
    doc.apply(&shown.mutations);
    doc.apply(&n.dismiss());
    assert!(notifications(&doc).is_empty());
    assert!(n.begin_fade(shown.id).is_empty());
}
