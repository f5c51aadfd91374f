//! # Client preferences: browser local storage
//!
//! The only state the dashboard keeps on the client is whether dark mode is on.
//! It is stored under [`DARK_MODE_KEY`] as the string `"true"` or `"false"`, the
//! same encoding the browser's `localStorage` uses for booleans.
//!
//! [`Preferences`] reads and writes through the [`PreferenceStore`] trait:
//!
//! | Store | Platform |
//! |-------|----------|
//! | [`LocalStorage`] | WASM with the `web` feature, `window.localStorage` |
//! | [`MemoryPreferences`] | Everywhere else, and in tests |
//!
//! Storage failures (private browsing, quota, missing window) are logged and
//! treated as "no stored value". A preference is never worth breaking the page.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key/value storage for client preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory PreferenceStore for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        match self.values.lock() {
            Ok(mut values) => {
                values.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("preference store poisoned: {}", e),
        }
    }
}

/// `window.localStorage`-backed PreferenceStore.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("failed to store {}: {:?}", key, e);
            }
        }
    }
}

/// Typed access to the dashboard's stored preferences.
#[derive(Clone, Debug, Default)]
pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored dark-mode flag; anything other than `"true"` reads as off.
    pub fn dark_mode(&self) -> bool {
        self.store.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}
