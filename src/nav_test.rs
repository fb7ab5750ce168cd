#![allow(clippy::float_cmp)]

use super::*;
use crate::dom::MemoryDocument;

fn navigator() -> Navigator {
    Navigator::new(&Config::default())
}

fn target(id: &str, offset_top: f64, focusable: bool) -> NavTarget {
    NavTarget { id: id.to_owned(), offset_top, focusable }
}

// =============================================================
// anchor_fragment
// =============================================================

#[test]
fn fragment_links_are_recognized() {
    assert_eq!(anchor_fragment("#about"), Some("about"));
    assert_eq!(anchor_fragment("#top"), Some("top"));
}

#[test]
fn bare_hash_and_external_links_are_ignored() {
    assert_eq!(anchor_fragment("#"), None);
    assert_eq!(anchor_fragment(""), None);
    assert_eq!(anchor_fragment("https://example.com/#about"), None);
    assert_eq!(anchor_fragment("/resume.pdf"), None);
}

#[test]
fn focusable_tags() {
    assert!(is_natively_focusable("A"));
    assert!(is_natively_focusable("button"));
    assert!(!is_natively_focusable("SECTION"));
    assert!(!is_natively_focusable("div"));
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn top_and_profile_scroll_to_zero() {
    assert_eq!(navigator().offset_for("top", 0.0), 0.0);
    assert_eq!(navigator().offset_for("profile", 640.0), 0.0);
}

#[test]
fn experience_and_clone_use_wide_offset() {
    assert_eq!(navigator().offset_for("experience", 1600.0), 1500.0);
    assert_eq!(navigator().offset_for("clone", 3000.0), 2900.0);
}

#[test]
fn other_sections_use_default_offset() {
    assert_eq!(navigator().offset_for("about", 700.0), 620.0);
}

#[test]
fn offset_never_goes_negative() {
    assert_eq!(navigator().offset_for("about", 30.0), 0.0);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_scrolls_updates_fragment_and_focuses() {
    let mut doc = MemoryDocument::new();
    doc.insert(Target::id("about"));
    doc.apply(&navigator().navigate(&target("about", 700.0, false)).mutations);

    assert_eq!(doc.scroll_top(), 620.0);
    assert_eq!(doc.fragment(), Some("about"));
    assert_eq!(doc.attribute(&Target::id("about"), "tabindex"), Some("-1"));
    assert_eq!(doc.focused(), Some(&Target::id("about")));
}

#[test]
fn navigate_scroll_is_smooth() {
    let mutations = navigator().navigate(&target("experience", 1600.0, false)).mutations;
    assert!(mutations.contains(&Mutation::ScrollTo { top: 1500.0, smooth: true }));
}

#[test]
fn focusable_target_keeps_its_tabindex() {
    let nav = navigator().navigate(&target("contact", 900.0, true));
    assert!(!nav.mutations.iter().any(|m| matches!(m, Mutation::SetAttribute { name, .. } if name == "tabindex")));
    assert!(matches!(nav.mutations.last(), Some(Mutation::Focus { prevent_scroll: true, .. })));
    assert!(nav.on_blur.is_empty());
}

#[test]
fn temporary_tabindex_is_removed_on_blur() {
    let mut doc = MemoryDocument::new();
    doc.insert(Target::id("about"));
    let nav = navigator().navigate(&target("about", 700.0, false));

    doc.apply(&nav.mutations);
    assert_eq!(doc.attribute(&Target::id("about"), "tabindex"), Some("-1"));

    doc.apply(&nav.on_blur);
    assert_eq!(doc.attribute(&Target::id("about"), "tabindex"), None);
}

#[test]
fn existing_tabindex_survives_blur() {
    let mut doc = MemoryDocument::new();
    doc.insert(Target::id("card")).attributes.insert("tabindex".to_owned(), "0".to_owned());
    let nav = navigator().navigate(&target("card", 700.0, true));

    doc.apply(&nav.mutations);
    doc.apply(&nav.on_blur);
    assert_eq!(doc.attribute(&Target::id("card"), "tabindex"), Some("0"));
}
