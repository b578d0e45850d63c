use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for tests and non-browser targets.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held, including ones set to `""`.
    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::keys;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert!(store.get(keys::THEME).is_none());

        store.set(keys::THEME, "dark");
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set(keys::AUTH_TOKEN, "abc");

        assert_eq!(store.get(keys::AUTH_TOKEN).as_deref(), Some("abc"));
        assert_eq!(store, other);
        assert_ne!(store, MemoryStore::new());
    }

    #[test]
    fn test_empty_value_reads_as_missing() {
        let store = MemoryStore::new();
        store.set(keys::EXPIRY, "");

        assert_eq!(store.get(keys::EXPIRY).as_deref(), Some(""));
        assert!(store.get_non_empty(keys::EXPIRY).is_none());
        assert_eq!(store.len(), 1);
    }
}
