//! Auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless: returns tokens and user records but never persists them. The
//! session context owns writing the credential store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::ApiClient;
use super::envelope::Results;
use super::error::ApiError;
use super::http::{HttpRequest, to_body};
use super::types::{AuthTokens, LoginRequest, RegisterRequest, RegisteredUser};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for tokens plus the user record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for rejected credentials, transport failures, or
    /// a body that is not `{results: AuthTokens}`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthTokens, ApiError> {
        let request = HttpRequest::post(LOGIN_ENDPOINT, to_body(credentials));
        let wrapped: Results<AuthTokens> = self.client.fetch_json(request).await?;
        Ok(wrapped.results)
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when signup is rejected (e.g. email taken).
    pub async fn register(&self, fields: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let request = HttpRequest::post(SIGNUP_ENDPOINT, to_body(fields));
        self.client.fetch_json(request).await
    }
}
