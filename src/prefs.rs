//! Theme and mode preferences and their persistence.
//!
//! TRADE-OFFS
//! ==========
//! Stored values are trusted only as far as they parse: an unrecognized value
//! falls back to the default and is left in storage untouched until the user
//! makes a new selection.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::EnhanceError;
use crate::storage::KeyValueStore;

/// A stored or supplied value that names no known theme or mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} preference: {value:?}")]
pub struct ParsePreferenceError {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================================
// THEME
// =============================================================================

/// Accent color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Gold,
    Coral,
}

impl Theme {
    /// All themes in switcher order.
    pub const ALL: [Self; 4] = [Self::Blue, Self::Green, Self::Gold, Self::Coral];

    /// Name written to storage and the root theme attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Gold => "gold",
            Self::Coral => "coral",
        }
    }

    /// Accent color for the `--accent-color` custom property.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Blue => "#0066FF",
            Self::Green => "#00D98B",
            Self::Gold => "#FFB800",
            Self::Coral => "#FF6B6B",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Gold => "Gold",
            Self::Coral => "Coral",
        }
    }
}

impl FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == raw)
            .ok_or_else(|| ParsePreferenceError { kind: "theme", value: raw.to_owned() })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Light or dark presentation. Dark is the page's native look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Mode {
    type Err = ParsePreferenceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParsePreferenceError { kind: "mode", value: raw.to_owned() }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PREFERENCE STORE
// =============================================================================

/// Reads and writes the two persisted preferences, each under its own key.
pub struct PreferenceStore {
    storage: Box<dyn KeyValueStore>,
    theme_key: String,
    mode_key: String,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>, config: &Config) -> Self {
        Self { storage, theme_key: config.theme_key.clone(), mode_key: config.mode_key.clone() }
    }

    /// Saved theme, or blue when absent or unrecognized.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.read(&self.theme_key)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), EnhanceError> {
        self.storage.set(&self.theme_key, theme.as_str())
    }

    /// Saved mode, or dark when absent or unrecognized.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.read(&self.mode_key)
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), EnhanceError> {
        self.storage.set(&self.mode_key, mode.as_str())
    }

    fn read<T>(&self, key: &str) -> T
    where
        T: FromStr<Err = ParsePreferenceError> + Default,
    {
        let Some(raw) = self.storage.get(key) else {
            return T::default();
        };
        raw.parse().unwrap_or_else(|err| {
            log::debug!("{err}; falling back to default");
            T::default()
        })
    }
}
