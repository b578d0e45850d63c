//! # Browser local storage
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It wraps
//! `window.localStorage` through `web-sys`, so values survive reloads and are
//! shared by every tab of the same origin.
//!
//! The handle is looked up once at construction. When the browser denies
//! storage (sandboxed iframe, disabled cookies) the store is still created but
//! every read returns `None` and writes are dropped, which makes the client
//! behave as if the user had never logged in.

use crate::kv::KeyValueStore;

#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, nothing will be persisted");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LocalStorage {
    fn eq(&self, other: &Self) -> bool {
        self.storage.is_some() == other.storage.is_some()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Failed to write {key} to localStorage: {e:?}");
            }
        }
    }
}
