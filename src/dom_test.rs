#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Target helpers
// =============================================================

#[test]
fn nav_link_targets_anchor_by_fragment() {
    assert_eq!(Target::nav_link("about"), Target::Selector("nav a[href=\"#about\"]".to_owned()));
}

#[test]
fn css_string_escapes_quotes_and_backslashes() {
    assert_eq!(css_string("plain"), r#""plain""#);
    assert_eq!(css_string(r#"a"b\c"#), r#""a\"b\\c""#);
    assert_eq!(css_string("two\nlines"), r#""two\a lines""#);
}

#[test]
fn nav_link_escapes_hostile_fragment() {
    assert_eq!(Target::nav_link(r#"x"]"#), Target::Selector(r##"nav a[href="#x\"]"]"##.to_owned()));
}

#[test]
fn toggle_class_picks_add_or_remove() {
    let on = Mutation::toggle_class(Target::Body, "x", true);
    let off = Mutation::toggle_class(Target::Body, "x", false);
    assert!(matches!(on, Mutation::AddClass { .. }));
    assert!(matches!(off, Mutation::RemoveClass { .. }));
}

// =============================================================
// MemoryDocument
// =============================================================

#[test]
fn new_document_has_root_and_body() {
    let doc = MemoryDocument::new();
    assert!(doc.contains(&Target::Root));
    assert!(doc.contains(&Target::Body));
    assert_eq!(doc.focused(), None);
    assert_eq!(doc.scroll_top(), 0.0);
}

#[test]
fn mutations_on_missing_elements_are_skipped() {
    let mut doc = MemoryDocument::new();
    let missing = Target::id("nope");
    doc.apply(&[
        Mutation::set_attribute(missing.clone(), "a", "b"),
        Mutation::add_class(missing.clone(), "c"),
        Mutation::Focus { target: missing.clone(), prevent_scroll: false },
    ]);
    assert!(!doc.contains(&missing));
    assert_eq!(doc.focused(), None);
}

#[test]
fn attribute_and_class_round_trip() {
    let mut doc = MemoryDocument::new();
    doc.apply(&[
        Mutation::set_attribute(Target::Root, "data-theme", "gold"),
        Mutation::add_class(Target::Body, "keyboard-nav"),
    ]);
    assert_eq!(doc.attribute(&Target::Root, "data-theme"), Some("gold"));
    assert!(doc.has_class(&Target::Body, "keyboard-nav"));

    doc.apply(&[
        Mutation::remove_attribute(Target::Root, "data-theme"),
        Mutation::remove_class(Target::Body, "keyboard-nav"),
    ]);
    assert_eq!(doc.attribute(&Target::Root, "data-theme"), None);
    assert!(!doc.has_class(&Target::Body, "keyboard-nav"));
}

#[test]
fn create_element_requires_parent() {
    let mut doc = MemoryDocument::new();
    let create = |parent: Target| Mutation::CreateElement {
        id: "n1".to_owned(),
        tag: "div".to_owned(),
        class: "notification show".to_owned(),
        text: "hello".to_owned(),
        attributes: vec![("role".to_owned(), "status".to_owned())],
        parent,
    };

    doc.apply(&[create(Target::id("missing"))]);
    assert!(!doc.contains(&Target::id("n1")));

    doc.apply(&[create(Target::Body)]);
    let node = Target::id("n1");
    assert_eq!(doc.text(&node), Some("hello"));
    assert!(doc.has_class(&node, "notification"));
    assert!(doc.has_class(&node, "show"));
    assert_eq!(doc.attribute(&node, "role"), Some("status"));
    assert_eq!(doc.element(&node).and_then(|el| el.tag.as_deref()), Some("div"));
}

#[test]
fn remove_element_drops_children_and_focus() {
    let mut doc = MemoryDocument::new();
    doc.apply(&[
        Mutation::CreateElement {
            id: "outer".to_owned(),
            tag: "div".to_owned(),
            class: String::new(),
            text: String::new(),
            attributes: Vec::new(),
            parent: Target::Body,
        },
        Mutation::CreateElement {
            id: "inner".to_owned(),
            tag: "button".to_owned(),
            class: String::new(),
            text: String::new(),
            attributes: Vec::new(),
            parent: Target::id("outer"),
        },
        Mutation::Focus { target: Target::id("inner"), prevent_scroll: false },
    ]);
    assert_eq!(doc.focused(), Some(&Target::id("inner")));

    doc.apply(&[Mutation::RemoveElement { target: Target::id("outer") }]);
    assert!(!doc.contains(&Target::id("outer")));
    assert!(!doc.contains(&Target::id("inner")));
    assert_eq!(doc.focused(), None);
}

#[test]
fn removing_twice_is_harmless() {
    let mut doc = MemoryDocument::new();
    doc.insert(Target::id("x"));
    let remove = Mutation::RemoveElement { target: Target::id("x") };
    doc.apply(&[remove.clone(), remove]);
    assert!(!doc.contains(&Target::id("x")));
}

#[test]
fn scroll_and_fragment_are_recorded() {
    let mut doc = MemoryDocument::new();
    doc.apply(&[
        Mutation::ScrollTo { top: 420.0, smooth: true },
        Mutation::ReplaceFragment { fragment: "about".to_owned() },
    ]);
    assert_eq!(doc.scroll_top(), 420.0);
    assert_eq!(doc.fragment(), Some("about"));
}

#[test]
fn queries_by_class_and_attribute() {
    let mut doc = MemoryDocument::new();
    doc.insert(Target::id("a")).classes.insert("active".to_owned());
    doc.insert(Target::id("b")).attributes.insert("aria-selected".to_owned(), "true".to_owned());
    doc.insert(Target::id("c"));

    assert_eq!(doc.with_class("active"), vec![&Target::id("a")]);
    assert_eq!(doc.with_attribute("aria-selected", "true"), vec![&Target::id("b")]);
    assert_eq!(doc.style(&Target::id("c"), "width"), None);
}
