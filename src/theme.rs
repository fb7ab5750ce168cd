//! Theme/mode application and the theme switcher control.
//!
//! `apply_theme` and `apply_mode` each own exactly one slice of root state:
//! the theme attribute plus accent property, and the mode attribute. The
//! switcher persists selections through [`PreferenceStore`] and reports a
//! short notice the page shows through the notifier.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{
    ACCENT_PROPERTY, ACTIVE_CLASS, MODE_ATTRIBUTE, MODE_TOGGLE_ID, SWITCHER_ID, THEME_ATTRIBUTE,
    THEME_OPTION_ATTRIBUTE,
};
use crate::dom::{Mutation, Target};
use crate::prefs::{Mode, PreferenceStore, Theme};

/// Root mutations for `theme`: theme attribute and accent color.
#[must_use]
pub fn apply_theme(theme: Theme) -> Vec<Mutation> {
    vec![
        Mutation::set_attribute(Target::Root, THEME_ATTRIBUTE, theme.as_str()),
        Mutation::set_style(Target::Root, ACCENT_PROPERTY, theme.accent_color()),
    ]
}

/// Root mutation for `mode`. Dark is the absence of the attribute.
#[must_use]
pub fn apply_mode(mode: Mode) -> Vec<Mutation> {
    match mode {
        Mode::Light => vec![Mutation::set_attribute(Target::Root, MODE_ATTRIBUTE, Mode::Light.as_str())],
        Mode::Dark => vec![Mutation::remove_attribute(Target::Root, MODE_ATTRIBUTE)],
    }
}

/// Switcher button of `theme`.
#[must_use]
pub fn option_target(theme: Theme) -> Target {
    Target::Id(option_id(theme))
}

fn option_id(theme: Theme) -> String {
    format!("theme-option-{}", theme.as_str())
}

/// Result of a user selection: what to change and what to tell the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub mutations: Vec<Mutation>,
    pub notice: String,
}

pub struct ThemeSwitcher {
    store: PreferenceStore,
    theme: Theme,
    mode: Mode,
}

impl ThemeSwitcher {
    /// Load the saved preferences.
    #[must_use]
    pub fn new(store: PreferenceStore) -> Self {
        let theme = store.theme();
        let mode = store.mode();
        Self { store, theme, mode }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Apply the saved preferences to the document root.
    #[must_use]
    pub fn saved_mutations(&self) -> Vec<Mutation> {
        let mut out = apply_theme(self.theme);
        out.extend(apply_mode(self.mode));
        out
    }

    /// Build the switcher inside the first `nav` element.
    ///
    /// One swatch button per theme plus the light/dark toggle, with the
    /// current selection already marked.
    #[must_use]
    pub fn controls(&self) -> Vec<Mutation> {
        let mut out = vec![Mutation::CreateElement {
            id: SWITCHER_ID.to_owned(),
            tag: "div".to_owned(),
            class: "theme-switcher".to_owned(),
            text: String::new(),
            attributes: vec![
                ("role".to_owned(), "group".to_owned()),
                ("aria-label".to_owned(), "Color theme".to_owned()),
            ],
            parent: Target::selector("nav"),
        }];
        for theme in Theme::ALL {
            out.push(Mutation::CreateElement {
                id: option_id(theme),
                tag: "button".to_owned(),
                class: "theme-option".to_owned(),
                text: String::new(),
                attributes: vec![
                    ("type".to_owned(), "button".to_owned()),
                    (THEME_OPTION_ATTRIBUTE.to_owned(), theme.as_str().to_owned()),
                    ("aria-label".to_owned(), format!("{} theme", theme.label())),
                    ("title".to_owned(), format!("{} theme", theme.label())),
                ],
                parent: Target::id(SWITCHER_ID),
            });
            out.push(Mutation::set_style(option_target(theme), "background-color", theme.accent_color()));
        }
        out.push(Mutation::CreateElement {
            id: MODE_TOGGLE_ID.to_owned(),
            tag: "button".to_owned(),
            class: "mode-toggle".to_owned(),
            text: String::new(),
            attributes: vec![("type".to_owned(), "button".to_owned())],
            parent: Target::id(SWITCHER_ID),
        });
        out.extend(self.option_states());
        out.extend(self.toggle_state());
        out
    }

    /// Persist and apply `theme`.
    ///
    /// A failed write is logged; the page still switches for this visit.
    pub fn select_theme(&mut self, theme: Theme) -> Selection {
        if let Err(err) = self.store.set_theme(theme) {
            log::warn!("theme preference not saved: {err}");
        }
        self.theme = theme;
        let mut mutations = apply_theme(theme);
        mutations.extend(self.option_states());
        Selection { mutations, notice: format!("{} theme applied", theme.label()) }
    }

    /// Flip light/dark, persist, and apply.
    pub fn toggle_mode(&mut self) -> Selection {
        let mode = self.mode.toggled();
        if let Err(err) = self.store.set_mode(mode) {
            log::warn!("mode preference not saved: {err}");
        }
        self.mode = mode;
        let mut mutations = apply_mode(mode);
        mutations.extend(self.toggle_state());
        Selection { mutations, notice: format!("{} mode enabled", mode.label()) }
    }

    fn option_states(&self) -> Vec<Mutation> {
        Theme::ALL
            .into_iter()
            .flat_map(|theme| {
                let selected = theme == self.theme;
                [
                    Mutation::toggle_class(option_target(theme), ACTIVE_CLASS, selected),
                    Mutation::set_attribute(option_target(theme), "aria-pressed", selected.to_string()),
                ]
            })
            .collect()
    }

    /// The toggle advertises the mode it switches to.
    fn toggle_state(&self) -> Vec<Mutation> {
        let next = self.mode.toggled();
        let target = Target::id(MODE_TOGGLE_ID);
        vec![
            Mutation::SetText { target: target.clone(), text: format!("{} mode", next.label()) },
            Mutation::set_attribute(target, "aria-label", format!("Switch to {} mode", next.as_str())),
        ]
    }
}
