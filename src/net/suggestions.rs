//! AI topic suggestions.

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

use super::client::ApiClient;
use super::envelope::{decode_suggestions, suggestion_request};
use super::error::ApiError;
use super::http::HttpRequest;
use super::types::TopicSuggestion;

pub const SUGGEST_ENDPOINT: &str = "/suggest_topics";

#[derive(Clone, Debug)]
pub struct SuggestionService {
    client: ApiClient,
}

impl SuggestionService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend for topic ideas around `topics`.
    ///
    /// An unparsable payload is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only for transport and HTTP failures.
    pub async fn suggest(&self, topics: &[String]) -> Result<Vec<TopicSuggestion>, ApiError> {
        let mode = self.client.envelope();
        let request = HttpRequest::post(SUGGEST_ENDPOINT, suggestion_request(mode, topics));
        let response = self.client.execute(request).await?;
        Ok(decode_suggestions(mode, &response.body))
    }
}
