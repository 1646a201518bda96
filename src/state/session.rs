//! Session context: the current user and the only path that mutates it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionContext` from the credential store and provides it
//! through Leptos context. Route guards and the header read `state`; login,
//! register and logout pages call the methods here, which update the reactive
//! state and the credential store together.
//!
//! DESIGN
//! ======
//! `state` is a plain `RwSignal<AuthState>` so components can subscribe with
//! `.get()`. Service failures propagate unchanged; the session is left as it
//! was before the call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::credentials::CredentialStore;
use crate::net::auth::AuthService;
use crate::net::error::ApiError;
use crate::net::types::{AuthTokens, LoginRequest, RegisterRequest, User};

/// Persisted credentials plus the cached user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Both halves must be present; a token without a user (or the reverse)
    /// is a half-written session and counts as signed out.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }
}

impl From<AuthTokens> for Session {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            user: Some(tokens.user),
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
        }
    }
}

/// Reactive view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// A login or register call is in flight.
    pub loading: bool,
}

impl AuthState {
    fn from_session(session: &Session) -> Self {
        let user = if session.is_authenticated() { session.user.clone() } else { None };
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    auth: AuthService,
    credentials: CredentialStore,
}

impl SessionContext {
    /// Read the stored session once and seed the reactive state from it.
    #[must_use]
    pub fn init(auth: AuthService, credentials: CredentialStore) -> Self {
        let state = RwSignal::new(AuthState::from_session(&credentials.load()));
        Self { state, auth, credentials }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.get().loading
    }

    /// # Errors
    ///
    /// Returns the auth service's [`ApiError`] unchanged; the session is untouched.
    pub async fn login(&self, credentials: LoginRequest) -> Result<User, ApiError> {
        self.set_loading(true);
        let result = self.auth.login(&credentials).await;
        self.finish(result)
    }

    /// Sign up, then sign in with the same email and password.
    ///
    /// # Errors
    ///
    /// Returns the first failing call's [`ApiError`] unchanged.
    pub async fn register(&self, fields: RegisterRequest) -> Result<User, ApiError> {
        self.set_loading(true);
        if let Err(err) = self.auth.register(&fields).await {
            self.set_loading(false);
            return Err(err);
        }
        let result = self.auth.login(&fields.login_request()).await;
        self.finish(result)
    }

    pub fn logout(&self) {
        self.credentials.clear();
        self.state.set(AuthState::default());
        log::info!("signed out");
    }

    /// Reload from the credential store, e.g. after a 401 cleared it.
    pub fn resync(&self) {
        self.state.set(AuthState::from_session(&self.credentials.load()));
    }

    fn set_loading(&self, loading: bool) {
        self.state.update(|state| state.loading = loading);
    }

    fn finish(&self, result: Result<AuthTokens, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(tokens) => {
                let user = tokens.user.clone();
                self.credentials.save(&Session::from(tokens));
                log::info!("signed in as {}", user.email);
                self.state.set(AuthState { user: Some(user.clone()), loading: false });
                Ok(user)
            }
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                self.set_loading(false);
                Err(err)
            }
        }
    }
}
