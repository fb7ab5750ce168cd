//! Scroll progress and active-section tracking.
//!
//! Both computations take layout measured at call time; nothing here caches
//! offsets, so a resize between scroll events is picked up on the next one.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::Config;
use crate::consts::{ACTIVE_CLASS, CLONE_FRAGMENT, PROFILE_SECTION, PROGRESS_ELEMENT_ID, TOP_FRAGMENT};
use crate::dom::{Mutation, Target};

/// Document scroll geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the document can scroll.
    #[must_use]
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

/// A section's live layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Percentage of the scrollable distance covered, clamped to `0..=100`.
///
/// A page shorter than the viewport reports 0.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable();
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Width update for the progress bar.
#[must_use]
pub fn progress_mutations(metrics: ScrollMetrics) -> Vec<Mutation> {
    vec![Mutation::set_style(
        Target::id(PROGRESS_ELEMENT_ID),
        "width",
        format!("{}%", progress_percent(metrics)),
    )]
}

// =============================================================================
// ACTIVE SECTION
// =============================================================================

/// Decides which navigation link is highlighted for a scroll position.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    section_offset_px: f64,
    bottom_threshold_px: f64,
    /// Fragments of the in-page nav links, in document order.
    links: Vec<String>,
    /// Highlight last written, once anything was written.
    current: Option<Option<String>>,
}

impl SectionTracker {
    /// `links` are the fragments (without `#`) of the page's nav links.
    #[must_use]
    pub fn new(config: &Config, links: Vec<String>) -> Self {
        Self {
            section_offset_px: config.section_offset_px,
            bottom_threshold_px: config.bottom_threshold_px,
            links,
            current: None,
        }
    }

    /// Fragment of the link that should be active, if any.
    ///
    /// Near the bottom of the page `#clone` wins regardless of bounds.
    /// Otherwise the last section whose activation band contains the scroll
    /// position wins; `profile` maps to the `#top` link when the nav has one.
    #[must_use]
    pub fn active_fragment(&self, sections: &[SectionBounds], metrics: ScrollMetrics) -> Option<String> {
        if metrics.scroll_top + metrics.viewport_height >= metrics.scroll_height - self.bottom_threshold_px {
            return Some(CLONE_FRAGMENT.to_owned());
        }
        let scroll_y = metrics.scroll_top;
        sections
            .iter()
            .rev()
            .find(|section| {
                let start = section.offset_top - self.section_offset_px;
                !section.id.is_empty() && scroll_y >= start && scroll_y <= start + section.height
            })
            .map(|section| self.link_for(&section.id))
    }

    fn link_for(&self, section_id: &str) -> String {
        if section_id == PROFILE_SECTION && self.links.iter().any(|link| link == TOP_FRAGMENT) {
            TOP_FRAGMENT.to_owned()
        } else {
            section_id.to_owned()
        }
    }

    /// Highlight mutations for the current layout, or nothing when unchanged.
    ///
    /// Every known link is written so at most one carries the active class.
    pub fn update(&mut self, sections: &[SectionBounds], metrics: ScrollMetrics) -> Vec<Mutation> {
        let active = self.active_fragment(sections, metrics);
        if self.current.as_ref() == Some(&active) {
            return Vec::new();
        }
        let mutations = self
            .links
            .iter()
            .map(|fragment| {
                let on = active.as_deref() == Some(fragment.as_str());
                Mutation::toggle_class(Target::nav_link(fragment), ACTIVE_CLASS, on)
            })
            .collect();
        self.current = Some(active);
        mutations
    }
}
