use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryTokenStore::new();
        assert!(store.get("access_token").is_none());

        store.set("access_token", "abc");
        assert_eq!(store.get("access_token").as_deref(), Some("abc"));

        store.set("access_token", "xyz");
        assert_eq!(store.get("access_token").as_deref(), Some("xyz"));

        store.remove("access_token");
        assert!(store.get("access_token").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryTokenStore::new();
        store.remove("refresh_token");
        assert!(store.get("refresh_token").is_none());
    }
}
