//! Tab group selection.
//!
//! A group is an ordered list of tab names; tab `name` controls the panel with
//! id `<name>-panel`. Exactly one tab is active at any time, and every
//! activation rewrites the whole group so the exclusivity holds even if the
//! markup started inconsistent.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::consts::{ACTIVE_CLASS, PANEL_SUFFIX, TAB_ATTRIBUTE};
use crate::dom::{Mutation, Target, css_string};

/// Keyboard movement within a tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
    First,
    Last,
}

impl TabKey {
    /// Map a `KeyboardEvent.key` value; other keys are not handled.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabGroup {
    names: Vec<String>,
    active: usize,
}

impl TabGroup {
    /// Build a group from markup order. Returns `None` for an empty list.
    ///
    /// `marked_active` is whichever tab the markup flags; an absent or
    /// out-of-range index selects the first tab.
    #[must_use]
    pub fn new(names: Vec<String>, marked_active: Option<usize>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        let active = marked_active.filter(|&i| i < names.len()).unwrap_or(0);
        Some(Self { names, active })
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.names[self.active]
    }

    /// Tab button for `name`.
    #[must_use]
    pub fn tab_target(name: &str) -> Target {
        Target::selector(format!("[{TAB_ATTRIBUTE}={}]", css_string(name)))
    }

    /// Panel controlled by tab `name`.
    #[must_use]
    pub fn panel_target(name: &str) -> Target {
        Target::Id(format!("{name}{PANEL_SUFFIX}"))
    }

    /// Make tab `index` the only active tab. Out-of-range indices change nothing.
    pub fn activate(&mut self, index: usize) -> Vec<Mutation> {
        if index >= self.names.len() {
            return Vec::new();
        }
        self.active = index;
        self.names
            .iter()
            .enumerate()
            .flat_map(|(i, name)| {
                let on = i == index;
                [
                    Mutation::toggle_class(Self::tab_target(name), ACTIVE_CLASS, on),
                    Mutation::set_attribute(Self::tab_target(name), "aria-selected", on.to_string()),
                    Mutation::set_attribute(Self::tab_target(name), "tabindex", if on { "0" } else { "-1" }),
                    Mutation::toggle_class(Self::panel_target(name), ACTIVE_CLASS, on),
                ]
            })
            .collect()
    }

    /// Handle a navigation key pressed while tab `focused` has focus.
    ///
    /// Activates and focuses the destination tab, wrapping at both ends.
    pub fn handle_key(&mut self, key: TabKey, focused: usize) -> Vec<Mutation> {
        let len = self.names.len();
        if focused >= len {
            return Vec::new();
        }
        let next = match key {
            TabKey::Next => (focused + 1) % len,
            TabKey::Previous => (focused + len - 1) % len,
            TabKey::First => 0,
            TabKey::Last => len - 1,
        };
        let mut out = self.activate(next);
        out.push(Mutation::Focus { target: Self::tab_target(&self.names[next]), prevent_scroll: false });
        out
    }
}
