//! Smooth in-page navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::Config;
use crate::consts::{CLONE_FRAGMENT, EXPERIENCE_FRAGMENT, PROFILE_SECTION, TOP_FRAGMENT};
use crate::dom::{Mutation, Target};

const TABINDEX: &str = "tabindex";

/// Fragment of an in-page link, without the `#`.
///
/// Only `href`s starting with `#` qualify, and a bare `#` does not.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

/// Whether an element with this tag takes focus without a `tabindex`.
#[must_use]
pub fn is_natively_focusable(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "a" | "button" | "input" | "select" | "textarea" | "summary"
    )
}

/// The element a link points at, as measured when clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTarget {
    pub id: String,
    pub offset_top: f64,
    /// Natively focusable or already carrying a `tabindex`.
    pub focusable: bool,
}

/// Mutations for one anchor click.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub mutations: Vec<Mutation>,
    /// Apply once the target loses focus; undoes the temporary `tabindex`.
    pub on_blur: Vec<Mutation>,
}

#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    offset_px: f64,
    wide_offset_px: f64,
}

impl Navigator {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { offset_px: config.nav_offset_px, wide_offset_px: config.nav_wide_offset_px }
    }

    /// Scroll destination for section `id` at `offset_top`.
    #[must_use]
    pub fn offset_for(&self, id: &str, offset_top: f64) -> f64 {
        let top = match id {
            TOP_FRAGMENT | PROFILE_SECTION => 0.0,
            EXPERIENCE_FRAGMENT | CLONE_FRAGMENT => offset_top - self.wide_offset_px,
            _ => offset_top - self.offset_px,
        };
        top.max(0.0)
    }

    /// Scroll to `target`, record its fragment, and move focus to it.
    ///
    /// A target that cannot take focus gets `tabindex="-1"` until it blurs.
    #[must_use]
    pub fn navigate(&self, target: &NavTarget) -> Navigation {
        let element = Target::id(target.id.clone());
        let mut mutations = vec![
            Mutation::ScrollTo { top: self.offset_for(&target.id, target.offset_top), smooth: true },
            Mutation::ReplaceFragment { fragment: target.id.clone() },
        ];
        let mut on_blur = Vec::new();
        if !target.focusable {
            mutations.push(Mutation::set_attribute(element.clone(), TABINDEX, "-1"));
            on_blur.push(Mutation::remove_attribute(element.clone(), TABINDEX));
        }
        mutations.push(Mutation::Focus { target: element, prevent_scroll: true });
        Navigation { mutations, on_blur }
    }
}
