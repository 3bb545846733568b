//! # localStorage token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] implementation used on the
//! **web platform**. Tokens survive page reloads and new tabs, which is what the
//! login flow expects.
//!
//! The struct holds no handle to the browser storage: `window.localStorage` is
//! looked up on every operation, so the store is `Send + Sync` and can sit
//! inside a shared [`crate::Session`].
//!
//! Storage errors (private mode, quota, disabled storage) are logged and
//! swallowed. A failed read degrades to "signed out", which sends the user back
//! to the login page instead of crashing the app.

use web_sys::Storage;

use crate::session::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore {
    prefix: String,
}

impl LocalStorageTokenStore {
    /// Store with unprefixed keys (`access_token`, `refresh_token`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose keys are prefixed, e.g. `"billdesk."` → `"billdesk.access_token"`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key(key)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to read {key} from localStorage: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key(key), value) {
            tracing::warn!("failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key(key)) {
            tracing::warn!("failed to remove {key} from localStorage: {e:?}");
        }
    }
}
