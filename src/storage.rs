//! Key-value storage capability.
//!
//! Components receive storage as a `Box<dyn KeyValueStore>` so the same code
//! runs against `localStorage`/`sessionStorage` in the browser and against
//! [`MemoryStore`] in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::EnhanceError;

pub trait KeyValueStore {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnhanceError>;
}

/// Process-local store; also the fallback when browser storage is disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seed for tests.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnhanceError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(feature = "browser")]
pub use browser::BrowserStore;

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Storage, Window};

    use super::KeyValueStore;
    use crate::error::EnhanceError;

    /// `localStorage` or `sessionStorage` for the current origin.
    pub struct BrowserStore {
        inner: Storage,
    }

    impl BrowserStore {
        /// Durable per-origin storage.
        pub fn local(window: &Window) -> Result<Self, EnhanceError> {
            Self::wrap("localStorage", window.local_storage())
        }

        /// Per-tab storage cleared when the session ends.
        pub fn session(window: &Window) -> Result<Self, EnhanceError> {
            Self::wrap("sessionStorage", window.session_storage())
        }

        fn wrap(
            name: &str,
            storage: Result<Option<Storage>, wasm_bindgen::JsValue>,
        ) -> Result<Self, EnhanceError> {
            match storage {
                Ok(Some(inner)) => Ok(Self { inner }),
                Ok(None) => Err(EnhanceError::Storage(format!("{name} is not available"))),
                Err(err) => Err(EnhanceError::Storage(format!("{name} access denied: {err:?}"))),
            }
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.inner.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("storage read failed for {key}: {err:?}");
                    None
                }
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), EnhanceError> {
            self.inner
                .set_item(key, value)
                .map_err(|err| EnhanceError::Storage(format!("write to {key} failed: {err:?}")))
        }
    }
}
