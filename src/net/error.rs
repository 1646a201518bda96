//! Uniform error shape for every rejected API call.
//!
//! ERROR HANDLING
//! ==============
//! Pages render `message` in a banner; `status_code` and `details` let callers
//! special-case 404s or inspect validation payloads without re-parsing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::http::{HttpResponse, TransportError};

pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Status reported when no HTTP response was received at all.
pub const NO_RESPONSE_STATUS: u16 = 500;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Normalize a non-2xx response. Prefers a server-supplied `message`,
    /// then the transport-level status text.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let details = parse_details(&response.body);
        let message = details
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| status_failed_message(response.status));
        Self { message, status_code: response.status, details }
    }

    /// Normalize a request that never got a response.
    #[must_use]
    pub fn from_transport(err: TransportError) -> Self {
        let message = if err.0.trim().is_empty() { FALLBACK_MESSAGE.to_owned() } else { err.0 };
        Self { message, status_code: NO_RESPONSE_STATUS, details: None }
    }

    /// A 2xx body that did not match the expected type.
    #[must_use]
    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        Self { message: format!("unexpected response body: {err}"), status_code: status, details: None }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

fn status_failed_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}

fn parse_details(body: &str) -> Option<serde_json::Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_owned())))
}

fn server_message(details: &serde_json::Value) -> Option<String> {
    details
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
