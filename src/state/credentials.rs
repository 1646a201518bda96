//! Persisted credentials: access token, refresh token, cached user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP wrapper reads the access token from here on every request and
//! clears it on a 401; the session context saves it after login and reads it
//! once at startup. Values are plain strings under three fixed keys with no
//! schema versioning, encryption, or expiry tracking.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;
use crate::state::session::Session;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// String key/value backend (browser `localStorage` or in-memory).
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Window `localStorage`. Every operation is a no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Save/load/clear the three credential keys as one unit.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl CredentialStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Persist every field of `session`; absent fields remove their key.
    pub fn save(&self, session: &Session) {
        self.put(ACCESS_TOKEN_KEY, session.access_token.as_deref());
        self.put(REFRESH_TOKEN_KEY, session.refresh_token.as_deref());
        let user = session.user.as_ref().and_then(|u| serde_json::to_string(u).ok());
        self.put(USER_KEY, user.as_deref());
    }

    /// Best-effort reconstruction; missing or unparsable fields come back absent.
    #[must_use]
    pub fn load(&self) -> Session {
        let user = self
            .storage
            .get_item(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        Session {
            user,
            access_token: self.non_empty(ACCESS_TOKEN_KEY),
            refresh_token: self.non_empty(REFRESH_TOKEN_KEY),
        }
    }

    pub fn clear(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            self.storage.remove_item(key);
        }
    }

    /// The bearer token for outgoing requests, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.non_empty(ACCESS_TOKEN_KEY)
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).filter(|v| !v.is_empty())
    }

    fn put(&self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.storage.set_item(key, value),
            None => self.storage.remove_item(key),
        }
    }
}
