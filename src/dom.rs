//! Visual mutations and the layer that performs them.
//!
//! Every component core returns a `Vec<Mutation>` instead of touching the
//! document. The browser build applies them through `web-sys`; tests apply
//! them to a [`MemoryDocument`] and assert on the resulting element state.
//!
//! Mutations aimed at elements that do not exist are skipped, so a page
//! missing an optional element degrades to "feature inactive".

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::collections::{BTreeMap, BTreeSet};

/// Where a mutation lands.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// The element with this id.
    Id(String),
    /// Every element matching this CSS selector.
    Selector(String),
}

impl Target {
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Navigation link pointing at `#fragment`.
    #[must_use]
    pub fn nav_link(fragment: &str) -> Self {
        Self::Selector(format!("nav a[href={}]", css_string(&format!("#{fragment}"))))
    }
}

/// `value` as a double-quoted CSS string, safe inside an attribute selector.
#[must_use]
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            // Raw newlines end a CSS string; use the hex escape.
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// A single required change to the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetAttribute { target: Target, name: String, value: String },
    RemoveAttribute { target: Target, name: String },
    /// Set an inline style property (including CSS custom properties).
    SetStyle { target: Target, property: String, value: String },
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    SetText { target: Target, text: String },
    /// Append a new element to the first element matching `parent`.
    CreateElement {
        id: String,
        tag: String,
        class: String,
        text: String,
        attributes: Vec<(String, String)>,
        parent: Target,
    },
    RemoveElement { target: Target },
    /// Focus the first match; `prevent_scroll` keeps the viewport where it is.
    Focus { target: Target, prevent_scroll: bool },
    /// Scroll the window to a vertical offset.
    ScrollTo { top: f64, smooth: bool },
    /// Replace the URL fragment without navigating.
    ReplaceFragment { fragment: String },
}

impl Mutation {
    #[must_use]
    pub fn set_attribute(target: Target, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name: name.to_owned(), value: value.into() }
    }

    #[must_use]
    pub fn remove_attribute(target: Target, name: &str) -> Self {
        Self::RemoveAttribute { target, name: name.to_owned() }
    }

    #[must_use]
    pub fn set_style(target: Target, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property: property.to_owned(), value: value.into() }
    }

    #[must_use]
    pub fn add_class(target: Target, class: &str) -> Self {
        Self::AddClass { target, class: class.to_owned() }
    }

    #[must_use]
    pub fn remove_class(target: Target, class: &str) -> Self {
        Self::RemoveClass { target, class: class.to_owned() }
    }

    /// Add `class` when `on`, remove it otherwise.
    #[must_use]
    pub fn toggle_class(target: Target, class: &str, on: bool) -> Self {
        if on { Self::add_class(target, class) } else { Self::remove_class(target, class) }
    }
}

// =============================================================================
// MEMORY DOCUMENT
// =============================================================================

/// State of one element inside a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub tag: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
    pub parent: Option<Target>,
}

/// In-memory stand-in for the rendered document.
///
/// Elements are keyed by the [`Target`] components address them with; a
/// selector entry stands for exactly one matching element.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDocument {
    elements: BTreeMap<Target, ElementState>,
    focused: Option<Target>,
    scroll_top: f64,
    fragment: Option<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        let mut elements = BTreeMap::new();
        elements.insert(Target::Root, ElementState::default());
        elements.insert(Target::Body, ElementState::default());
        Self { elements, focused: None, scroll_top: 0.0, fragment: None }
    }
}

impl MemoryDocument {
    /// A document with just `<html>` and `<body>`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element so later mutations can reach it.
    pub fn insert(&mut self, target: Target) -> &mut ElementState {
        self.elements.entry(target).or_default()
    }

    pub fn apply(&mut self, mutations: &[Mutation]) {
        for mutation in mutations {
            self.apply_one(mutation);
        }
    }

    fn apply_one(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetAttribute { target, name, value } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.attributes.insert(name.clone(), value.clone());
                }
            }
            Mutation::RemoveAttribute { target, name } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.attributes.remove(name);
                }
            }
            Mutation::SetStyle { target, property, value } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.styles.insert(property.clone(), value.clone());
                }
            }
            Mutation::AddClass { target, class } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.classes.insert(class.clone());
                }
            }
            Mutation::RemoveClass { target, class } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.classes.remove(class);
                }
            }
            Mutation::SetText { target, text } => {
                if let Some(el) = self.elements.get_mut(target) {
                    el.text = Some(text.clone());
                }
            }
            Mutation::CreateElement { id, tag, class, text, attributes, parent } => {
                if !self.elements.contains_key(parent) {
                    return;
                }
                let mut el = ElementState {
                    tag: Some(tag.clone()),
                    text: Some(text.clone()),
                    parent: Some(parent.clone()),
                    ..ElementState::default()
                };
                el.classes.extend(class.split_whitespace().map(str::to_owned));
                el.attributes.extend(attributes.iter().cloned());
                self.elements.insert(Target::Id(id.clone()), el);
            }
            Mutation::RemoveElement { target } => self.remove_subtree(target),
            Mutation::Focus { target, .. } => {
                if self.elements.contains_key(target) {
                    self.focused = Some(target.clone());
                }
            }
            Mutation::ScrollTo { top, .. } => self.scroll_top = *top,
            Mutation::ReplaceFragment { fragment } => self.fragment = Some(fragment.clone()),
        }
    }

    fn remove_subtree(&mut self, target: &Target) {
        if self.elements.remove(target).is_none() {
            return;
        }
        if self.focused.as_ref() == Some(target) {
            self.focused = None;
        }
        let children = self
            .elements
            .iter()
            .filter(|(_, el)| el.parent.as_ref() == Some(target))
            .map(|(key, _)| key.clone())
            .collect::<Vec<_>>();
        for child in children {
            self.remove_subtree(&child);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn contains(&self, target: &Target) -> bool {
        self.elements.contains_key(target)
    }

    #[must_use]
    pub fn element(&self, target: &Target) -> Option<&ElementState> {
        self.elements.get(target)
    }

    #[must_use]
    pub fn attribute(&self, target: &Target, name: &str) -> Option<&str> {
        self.elements.get(target)?.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, target: &Target, property: &str) -> Option<&str> {
        self.elements.get(target)?.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, target: &Target) -> Option<&str> {
        self.elements.get(target)?.text.as_deref()
    }

    #[must_use]
    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.elements.get(target).is_some_and(|el| el.classes.contains(class))
    }

    /// Every element carrying `class`, in key order.
    #[must_use]
    pub fn with_class(&self, class: &str) -> Vec<&Target> {
        self.elements
            .iter()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(key, _)| key)
            .collect()
    }

    /// Every element whose `name` attribute equals `value`, in key order.
    #[must_use]
    pub fn with_attribute(&self, name: &str, value: &str) -> Vec<&Target> {
        self.elements
            .iter()
            .filter(|(_, el)| el.attributes.get(name).is_some_and(|v| v == value))
            .map(|(key, _)| key)
            .collect()
    }

    #[must_use]
    pub fn focused(&self) -> Option<&Target> {
        self.focused.as_ref()
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

// =============================================================================
// BROWSER APPLY
// =============================================================================

#[cfg(feature = "browser")]
pub use browser::{apply, query_all};

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, FocusOptions, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

    use super::{Mutation, Target};
    use crate::error::EnhanceError;

    /// Perform `mutations` against the live document, in order.
    ///
    /// Stops at the first DOM call that throws.
    pub fn apply(window: &Window, mutations: &[Mutation]) -> Result<(), EnhanceError> {
        let document = window
            .document()
            .ok_or_else(|| EnhanceError::MissingElement("document".to_owned()))?;
        for mutation in mutations {
            apply_one(window, &document, mutation)?;
        }
        Ok(())
    }

    fn apply_one(window: &Window, document: &Document, mutation: &Mutation) -> Result<(), EnhanceError> {
        match mutation {
            Mutation::SetAttribute { target, name, value } => {
                for el in resolve(document, target)? {
                    el.set_attribute(name, value)?;
                }
            }
            Mutation::RemoveAttribute { target, name } => {
                for el in resolve(document, target)? {
                    el.remove_attribute(name)?;
                }
            }
            Mutation::SetStyle { target, property, value } => {
                for el in resolve(document, target)? {
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        html.style().set_property(property, value)?;
                    }
                }
            }
            Mutation::AddClass { target, class } => {
                for el in resolve(document, target)? {
                    el.class_list().add_1(class)?;
                }
            }
            Mutation::RemoveClass { target, class } => {
                for el in resolve(document, target)? {
                    el.class_list().remove_1(class)?;
                }
            }
            Mutation::SetText { target, text } => {
                for el in resolve(document, target)? {
                    el.set_text_content(Some(text));
                }
            }
            Mutation::CreateElement { id, tag, class, text, attributes, parent } => {
                let Some(parent) = resolve(document, parent)?.into_iter().next() else {
                    return Ok(());
                };
                let el = document.create_element(tag)?;
                el.set_id(id);
                el.set_class_name(class);
                el.set_text_content(Some(text));
                for (name, value) in attributes {
                    el.set_attribute(name, value)?;
                }
                parent.append_child(&el)?;
            }
            Mutation::RemoveElement { target } => {
                for el in resolve(document, target)? {
                    el.remove();
                }
            }
            Mutation::Focus { target, prevent_scroll } => {
                if let Some(el) = resolve(document, target)?.into_iter().next()
                    && let Some(html) = el.dyn_ref::<HtmlElement>()
                {
                    let options = FocusOptions::new();
                    options.set_prevent_scroll(*prevent_scroll);
                    html.focus_with_options(&options)?;
                }
            }
            Mutation::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(if *smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                window.scroll_to_with_scroll_to_options(&options);
            }
            Mutation::ReplaceFragment { fragment } => {
                let url = format!("#{fragment}");
                window.history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
            }
        }
        Ok(())
    }

    fn resolve(document: &Document, target: &Target) -> Result<Vec<Element>, EnhanceError> {
        Ok(match target {
            Target::Root => document.document_element().into_iter().collect(),
            Target::Body => document.body().map(Element::from).into_iter().collect(),
            Target::Id(id) => document.get_element_by_id(id).into_iter().collect(),
            Target::Selector(selector) => query_all(document, selector)?,
        })
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
        let list = document.query_selector_all(selector)?;
        let mut out = Vec::new();
        for index in 0..list.length() {
            if let Some(el) = list.item(index).and_then(|node| node.dyn_ref::<Element>().cloned()) {
                out.push(el);
            }
        }
        Ok(out)
    }
}
