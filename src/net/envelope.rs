//! Response envelope variants and their adapters.
//!
//! DESIGN
//! ======
//! Two backend generations disagree on the outer shape of list and
//! suggestion payloads. Each variant is a serde type with an explicit adapter
//! into the shared shape; the variant is chosen by `EnvelopeMode` from config,
//! never by sniffing the response.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{Blog, BlogPage, TopicSuggestion};
use crate::config::EnvelopeMode;

/// `{ "results": T }` wrapper used by login and nested-mode writes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Results<T> {
    pub results: T,
}

// =============================================================
// BLOG LISTS
// =============================================================

/// Nested list payload: `{results: {items, total, page, limit, pages}}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NestedBlogList {
    pub items: Vec<Blog>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlogListEnvelope {
    Flat(BlogPage),
    Nested(NestedBlogList),
}

impl BlogListEnvelope {
    /// Decode a list body in the configured envelope.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body does not match the variant.
    pub fn decode(mode: EnvelopeMode, body: &str) -> Result<Self, serde_json::Error> {
        match mode {
            EnvelopeMode::Flat => serde_json::from_str(body).map(Self::Flat),
            EnvelopeMode::Nested => {
                serde_json::from_str::<Results<NestedBlogList>>(body).map(|r| Self::Nested(r.results))
            }
        }
    }

    #[must_use]
    pub fn into_page(self) -> BlogPage {
        match self {
            Self::Flat(page) => page,
            Self::Nested(nested) => nested_to_page(nested),
        }
    }
}

/// Remap the nested pagination field names onto the flat shape.
#[must_use]
pub fn nested_to_page(nested: NestedBlogList) -> BlogPage {
    BlogPage {
        blogs: nested.items,
        total: nested.total,
        page: nested.page,
        per_page: nested.limit,
        total_pages: nested.pages,
    }
}

/// Decode a single-record body: bare in flat mode, under `results` in nested mode.
///
/// # Errors
///
/// Returns the serde error when the body does not match the variant.
pub fn decode_record<T: DeserializeOwned>(mode: EnvelopeMode, body: &str) -> Result<T, serde_json::Error> {
    match mode {
        EnvelopeMode::Flat => serde_json::from_str(body),
        EnvelopeMode::Nested => serde_json::from_str::<Results<T>>(body).map(|r| r.results),
    }
}

// =============================================================
// TOPIC SUGGESTIONS
// =============================================================

/// The nested `results` field: either structured or a JSON-encoded string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionsField {
    Structured(Vec<TopicSuggestion>),
    Encoded(String),
}

impl SuggestionsField {
    /// Resolve to suggestions, running the second parse for the encoded form.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the encoded string is not a suggestion array.
    pub fn resolve(self) -> Result<Vec<TopicSuggestion>, serde_json::Error> {
        match self {
            Self::Structured(items) => Ok(items),
            Self::Encoded(raw) => serde_json::from_str(&raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FlatSuggestions {
    #[serde(default)]
    pub suggestions: Vec<TopicSuggestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NestedSuggestions {
    #[serde(default)]
    pub results: Option<SuggestionsField>,
}

/// Request body for `POST /suggest_topics`.
#[must_use]
pub fn suggestion_request(mode: EnvelopeMode, topics: &[String]) -> serde_json::Value {
    match mode {
        EnvelopeMode::Flat => serde_json::json!({ "keywords": topics }),
        EnvelopeMode::Nested => serde_json::json!({ "topics": topics }),
    }
}

/// Decode a suggestion body. Suggestions are best-effort: any decode failure
/// yields an empty list.
#[must_use]
pub fn decode_suggestions(mode: EnvelopeMode, body: &str) -> Vec<TopicSuggestion> {
    let parsed = match mode {
        EnvelopeMode::Flat => serde_json::from_str::<FlatSuggestions>(body).map(|s| s.suggestions),
        EnvelopeMode::Nested => serde_json::from_str::<NestedSuggestions>(body)
            .and_then(|s| s.results.map_or_else(|| Ok(Vec::new()), SuggestionsField::resolve)),
    };
    parsed.unwrap_or_else(|e| {
        log::warn!("discarding unparsable topic suggestions: {e}");
        Vec::new()
    })
}
