//! # Session: bearer tokens in client-side storage
//!
//! The billing API authenticates every call with a bearer token obtained from
//! the login exchange. The frontend keeps that token (and the optional refresh
//! token) in persistent client storage; its mere presence is the only
//! authentication signal checked before entering protected routes. Signature
//! and expiry are the API's business.
//!
//! ## [`TokenStore`] trait
//!
//! A synchronous key/value interface (`get` / `set` / `remove`). Browser
//! `localStorage` is synchronous, so there is no reason to make callers await.
//! Implementations live in sibling modules ([`crate::memory`] and, on the web
//! platform, `crate::local`).
//!
//! ## [`Session`]
//!
//! A cheap-to-clone handle over a shared [`TokenStore`]. The API client and the
//! route guards receive a `Session` explicitly instead of reading storage from
//! wherever they happen to be, which keeps them testable with an in-memory store.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`access_token`](Session::access_token) | Stored bearer token; empty values count as absent. |
//! | [`refresh_token`](Session::refresh_token) | Stored refresh token, same emptiness rule. |
//! | [`is_authenticated`](Session::is_authenticated) | `true` when an access token is present. |
//! | [`store`](Session::store) | Persist a fresh [`AuthTokens`] pair after login. |
//! | [`clear`](Session::clear) | Forget both tokens (logout, expired session). |

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::memory::MemoryTokenStore;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Token pair returned by a successful credential exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Key/value storage for session tokens.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle to the tokens of the signed-in user.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore + Send + Sync>,
}

impl Session {
    pub fn new(store: impl TokenStore + Send + Sync + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by a fresh [`MemoryTokenStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Persist the tokens from a login response.
    ///
    /// A response without a refresh token removes any stale one left behind by
    /// a previous session.
    pub fn store(&self, tokens: &AuthTokens) {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        match tokens.refresh_token.as_deref() {
            Some(refresh) if !refresh.trim().is_empty() => {
                self.store.set(REFRESH_TOKEN_KEY, refresh)
            }
            _ => self.store.remove(REFRESH_TOKEN_KEY),
        }
        tracing::debug!("session tokens stored");
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        tracing::debug!("session tokens cleared");
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store
            .get(key)
            .filter(|value| !value.trim().is_empty())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the tokens themselves.
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}
