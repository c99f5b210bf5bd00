//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a single id token, persisted under one storage key so it
//! survives reloads. Components read login status, admin flag, and email
//! from it and mutate it only through [`AuthStore::login`] and
//! [`AuthStore::logout`].
//!
//! DESIGN
//! ======
//! One store per mounted application, handed out through Leptos context as
//! `RwSignal<AuthStore>`. Derived views are recomputed from the current
//! snapshot on every call; components wrap them in `Memo` where they need
//! caching, and the signal invalidates those memos on mutation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use super::reset::ResetHooks;
use crate::config::AppConfig;
use crate::util::claims::{Claims, decode_claims};
use crate::util::storage::KeyValueStore;

/// Stable name the store is registered and logged under.
pub const AUTH_STORE_NAME: &str = "auth";

/// Snapshot of the session: the id token, absent or non-empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    id_token: Option<String>,
}

impl AuthState {
    /// Empty tokens collapse to "absent".
    pub fn from_token(token: Option<String>) -> Self {
        Self { id_token: token.filter(|t| !t.is_empty()) }
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.id_token.is_some()
    }

    /// Decoded claims, or `None` when there is no token or it is malformed.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.id_token.as_deref()?;
        match decode_claims(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                log::warn!(target: AUTH_STORE_NAME, "invalid id token: {e}");
                None
            }
        }
    }

    pub fn is_admin(&self, admin_group: &str) -> bool {
        self.claims().is_some_and(|c| c.in_group(admin_group))
    }

    pub fn user_email(&self) -> Option<String> {
        self.claims().and_then(|c| c.email().map(str::to_owned))
    }

    pub fn groups(&self) -> Vec<String> {
        self.claims().map(|c| c.groups()).unwrap_or_default()
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The session store: in-memory state kept equal to its persisted slot.
#[derive(Clone)]
pub struct AuthStore {
    state: AuthState,
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    admin_group: String,
    resets: ResetHooks,
}

impl AuthStore {
    /// Construct the store, reading the token from its persisted slot.
    pub fn load(storage: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let state = AuthState::from_token(storage.get(&config.storage_key));
        log::debug!(
            target: AUTH_STORE_NAME,
            "loaded session from {} (logged_in={})",
            config.storage_key,
            state.is_logged_in()
        );
        Self {
            state,
            storage,
            storage_key: config.storage_key.clone(),
            admin_group: config.admin_group.clone(),
            resets: ResetHooks::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn id_token(&self) -> Option<&str> {
        self.state.id_token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin(&self.admin_group)
    }

    pub fn user_email(&self) -> Option<String> {
        self.state.user_email()
    }

    pub fn groups(&self) -> Vec<String> {
        self.state.groups()
    }

    pub fn claims(&self) -> Option<Claims> {
        self.state.claims()
    }

    /// Replace the session token and persist it.
    ///
    /// An empty token clears the session instead so the persisted slot never
    /// holds an empty value.
    pub fn login(&mut self, token: impl Into<String>) {
        self.state = AuthState::from_token(Some(token.into()));
        match self.state.id_token() {
            Some(token) => self.storage.set(&self.storage_key, token),
            None => self.storage.remove(&self.storage_key),
        }
        log::info!(target: AUTH_STORE_NAME, "login (logged_in={})", self.state.is_logged_in());
    }

    /// Clear the session, drop the persisted slot, then run reset hooks.
    ///
    /// Hooks run while the caller holds the store mutably, so they must not
    /// touch the store's own signal.
    pub fn logout(&mut self) {
        self.state = AuthState::default();
        self.storage.remove(&self.storage_key);
        log::info!(target: AUTH_STORE_NAME, "logout; resetting {} subsystem(s)", self.resets.len());
        self.resets.run();
    }

    /// Register a reset hook for a subsystem that holds session-derived state.
    pub fn on_logout<F>(&mut self, name: &'static str, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.resets.register(name, hook);
    }
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.state)
            .field("storage_key", &self.storage_key)
            .field("admin_group", &self.admin_group)
            .field("resets", &self.resets)
            .finish_non_exhaustive()
    }
}

/// The application's auth store from context.
///
/// # Panics
///
/// Panics if called outside the tree mounted by the bootstrap.
pub fn use_auth_store() -> RwSignal<AuthStore> {
    expect_context::<RwSignal<AuthStore>>()
}
