//! # Key-value persistence
//!
//! [`KeyValueStore`] is the small string-to-string interface the client uses for
//! everything it keeps across page loads: the bearer token, its expiry and the
//! theme choice. Implementations live in sibling modules:
//!
//! - [`crate::MemoryStore`]: process-local map, used natively and in tests.
//! - `LocalStorage`: the browser's `window.localStorage` (WASM + `web` feature).
//!
//! Reads return `None` for missing keys and for storage that is unavailable;
//! writes are best-effort. The browser can refuse storage (private mode, quota)
//! and the client must degrade to "nothing persisted" rather than fail.

/// Storage keys shared by every implementation.
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const EXPIRY: &str = "expiry";
    pub const THEME: &str = "theme";
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    /// Read a key, treating the empty string the same as a missing key.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
