//! Authentication token held for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once by the app root and provided as context. The login page is
//! the only writer; every networked view reads the token to build its
//! `Authorization` header. There is no expiry check or refresh: a stale
//! token surfaces as an ordinary request failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Read the persisted token. An empty value counts as absent.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Persist `token` and make it current.
    pub fn store_token(&mut self, store: &impl KeyValueStore, token: String) {
        store.set(TOKEN_KEY, &token);
        self.token = Some(token);
    }
}
