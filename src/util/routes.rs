//! Route paths and the suggestion-to-draft hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components build links from these helpers so the routing table
//! in `app` and every `href` stay in sync.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::TopicSuggestion;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const BLOGS: &str = "/blogs";
pub const MY_BLOGS: &str = "/blogs/my";
pub const CREATE_BLOG: &str = "/blogs/create";
pub const SUGGEST: &str = "/blogs/suggest";

pub fn blog_path(id: i64) -> String {
    format!("/blogs/{id}")
}

pub fn edit_blog_path(id: i64) -> String {
    format!("/blogs/{id}/edit")
}

/// Parse the `:id` route segment. Non-numeric or non-positive ids are rejected.
pub fn parse_blog_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// `/blogs/create?title=..&points=..` pre-filled from a suggestion.
pub fn suggestion_draft_path(suggestion: &TopicSuggestion) -> String {
    let points = serde_json::to_string(&suggestion.points).unwrap_or_else(|_| "[]".to_owned());
    format!(
        "{CREATE_BLOG}?title={}&points={}",
        urlencoding::encode(&suggestion.topic),
        urlencoding::encode(&points)
    )
}

/// Reference points from the (already URL-decoded) `points` query value.
/// Anything other than a JSON array of strings is ignored.
pub fn parse_reference_points(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
}
