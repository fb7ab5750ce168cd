//! Error types shared by the pure cores and the browser layer.
//!
//! Nothing here is fatal: the startup routine logs every error and keeps
//! enabling the remaining features.

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Problems found while loading the optional JSON configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is not valid JSON or has mistyped fields.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// =============================================================================
// ENHANCE ERRORS
// =============================================================================

/// Errors produced while enhancing the page.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// An element a feature depends on is absent; the feature stays inactive.
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Browser storage is disabled or rejected a write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EnhanceError {
    /// Whether this error only means "feature not present on this page".
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
