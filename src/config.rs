//! Runtime configuration passed into every component constructor.
//!
//! DESIGN
//! ======
//! Defaults mirror the stylesheet and markup the page ships with. A page may
//! override any subset through a `<script type="application/json"
//! id="resume-config">` block; unspecified fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BANNER_STORAGE_KEY, BOTTOM_THRESHOLD_PX, MODE_STORAGE_KEY, NAV_OFFSET_PX, NAV_WIDE_OFFSET_PX,
    NOTIFICATION_FADE_MS, NOTIFICATION_TTL_MS, PROGRESS_DEBOUNCE_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SECTION_DEBOUNCE_MS, SECTION_OFFSET_PX, THEME_STORAGE_KEY,
};
use crate::error::ConfigError;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub theme_key: String,
    pub mode_key: String,
    pub banner_key: String,
    pub progress_debounce_ms: u32,
    pub section_debounce_ms: u32,
    pub section_offset_px: f64,
    pub bottom_threshold_px: f64,
    pub nav_offset_px: f64,
    pub nav_wide_offset_px: f64,
    pub notification_ttl_ms: u32,
    pub notification_fade_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_key: THEME_STORAGE_KEY.to_owned(),
            mode_key: MODE_STORAGE_KEY.to_owned(),
            banner_key: BANNER_STORAGE_KEY.to_owned(),
            progress_debounce_ms: PROGRESS_DEBOUNCE_MS,
            section_debounce_ms: SECTION_DEBOUNCE_MS,
            section_offset_px: SECTION_OFFSET_PX,
            bottom_threshold_px: BOTTOM_THRESHOLD_PX,
            nav_offset_px: NAV_OFFSET_PX,
            nav_wide_offset_px: NAV_WIDE_OFFSET_PX,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            notification_fade_ms: NOTIFICATION_FADE_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse a JSON override block and validate the result.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would disable a feature silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, key) in [
            ("themeKey", &self.theme_key),
            ("modeKey", &self.mode_key),
            ("bannerKey", &self.banner_key),
        ] {
            if key.trim().is_empty() {
                return Err(invalid(field, "storage key must not be empty"));
            }
        }
        if self.theme_key == self.mode_key {
            return Err(invalid("modeKey", "must differ from themeKey"));
        }
        if self.progress_debounce_ms == 0 {
            return Err(invalid("progressDebounceMs", "must be positive"));
        }
        if self.section_debounce_ms == 0 {
            return Err(invalid("sectionDebounceMs", "must be positive"));
        }
        if self.notification_ttl_ms == 0 {
            return Err(invalid("notificationTtlMs", "must be positive"));
        }
        for (field, value) in [
            ("sectionOffsetPx", self.section_offset_px),
            ("bottomThresholdPx", self.bottom_threshold_px),
            ("navOffsetPx", self.nav_offset_px),
            ("navWideOffsetPx", self.nav_wide_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative pixel value"));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("revealThreshold", "must be within 0..=1"));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(invalid("logLevel", "expected error, warn, info, debug, or trace"));
        }
        Ok(())
    }

    /// Console log level; validated configs always parse.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_owned() }
}
