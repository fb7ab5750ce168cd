//! Console-only telemetry: download clicks and page load timing.
//!
//! Nothing leaves the browser; both are logged through the `log` facade.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

/// Name to log for a download link.
///
/// Prefers the `download` attribute's suggested file name, then the last
/// path segment of `href`.
#[must_use]
pub fn download_label(download: Option<&str>, href: Option<&str>) -> String {
    if let Some(name) = download.map(str::trim).filter(|name| !name.is_empty()) {
        return name.to_owned();
    }
    href.map(|href| href.split(['?', '#']).next().unwrap_or(href))
        .and_then(|path| path.rsplit('/').find(|segment| !segment.is_empty()))
        .unwrap_or("unknown")
        .to_owned()
}

/// Navigation timing marks in epoch milliseconds (0 when unrecorded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadTiming {
    pub navigation_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

/// Durations derived from [`LoadTiming`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSummary {
    pub dom_ready_ms: f64,
    pub full_load_ms: f64,
}

impl LoadTiming {
    /// `None` until every mark has been recorded.
    #[must_use]
    pub fn summary(&self) -> Option<LoadSummary> {
        let recorded = |mark: f64| mark > 0.0 && mark >= self.navigation_start;
        if self.navigation_start <= 0.0 || !recorded(self.dom_content_loaded_end) || !recorded(self.load_event_end) {
            return None;
        }
        Some(LoadSummary {
            dom_ready_ms: self.dom_content_loaded_end - self.navigation_start,
            full_load_ms: self.load_event_end - self.navigation_start,
        })
    }
}
