//! The one configured HTTP client every service goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request phase attaches `Authorization: Bearer <token>` from the credential
//! store. Response phase passes 2xx through; a 401 from any endpoint clears
//! the store and hard-navigates to `/login` before the call is rejected.
//! Every rejection is an [`ApiError`]. One attempt per call, no retries.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Transport};
use crate::config::{ClientConfig, EnvelopeMode};
use crate::state::credentials::CredentialStore;
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::routes;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    credentials: CredentialStore,
    navigator: Arc<dyn Navigator>,
    envelope: EnvelopeMode,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("envelope", &self.envelope).finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: CredentialStore,
        navigator: Arc<dyn Navigator>,
        envelope: EnvelopeMode,
    ) -> Self {
        Self { transport, credentials, navigator, envelope }
    }

    /// Client wired to `fetch`, `localStorage` and `window.location`.
    /// Outside the browser build every call is rejected by `OfflineTransport`.
    #[must_use]
    pub fn for_browser(config: &ClientConfig) -> Self {
        #[cfg(feature = "csr")]
        let transport: Arc<dyn Transport> = Arc::new(super::http::GlooTransport::new(config.api_base_url.clone()));
        #[cfg(not(feature = "csr"))]
        let transport: Arc<dyn Transport> = Arc::new(super::http::OfflineTransport);

        Self::new(transport, CredentialStore::browser(), Arc::new(BrowserNavigator), config.envelope)
    }

    #[must_use]
    pub fn envelope(&self) -> EnvelopeMode {
        self.envelope
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Send one request and return the 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses. A 401
    /// additionally clears stored credentials and navigates to `/login`.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.authorize(request);
        log::debug!("{} {}", request.method.as_str(), request.path);

        let response = self.transport.send(request).await.map_err(ApiError::from_transport)?;
        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 {
            self.handle_unauthorized();
        }
        Err(ApiError::from_response(&response))
    }

    /// [`execute`](Self::execute) then decode the body with `decode`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from `execute`, or a decode error carrying the
    /// response status.
    pub async fn fetch<T, F>(&self, request: HttpRequest, decode: F) -> Result<T, ApiError>
    where
        F: FnOnce(&str) -> Result<T, serde_json::Error>,
    {
        let response = self.execute(request).await?;
        decode(&response.body).map_err(|e| {
            log::warn!("response decode failed: {e}");
            ApiError::decode(response.status, &e)
        })
    }

    /// [`fetch`](Self::fetch) for bodies that are exactly `T`.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        self.fetch(request, |body| serde_json::from_str(body)).await
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match self.credentials.access_token() {
            Some(token) => request.with_header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    fn handle_unauthorized(&self) {
        log::warn!("received 401; clearing credentials and redirecting to {}", routes::LOGIN);
        self.credentials.clear();
        self.navigator.navigate(routes::LOGIN);
    }
}
