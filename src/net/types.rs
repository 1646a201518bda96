//! Wire DTOs for the blog platform REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON so serde round-trips stay
//! lossless. Envelope-specific wrappers live in `envelope`; everything here is
//! the shape the view layer consumes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned inside the login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// `"First Last"`, or the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// A blog post. Server-owned; the client refetches after every write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owner of the post.
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

/// A suggested blog topic with supporting talking points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    pub topic: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    /// Credentials for the follow-up login after a successful signup.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Tokens and user returned by `POST /auth/login` (inside `results`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Summary of the account created by `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields for creating a blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
}

/// Partial update; absent fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<BlogDraft> for BlogPatch {
    fn from(draft: BlogDraft) -> Self {
        Self { title: Some(draft.title), content: Some(draft.content) }
    }
}

/// Flat paginated list shape consumed by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPage {
    pub blogs: Vec<Blog>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
}

impl SortField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Title => "title",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created_at" => Some(Self::CreatedAt),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Request shaping for list endpoints. Carries no server-side invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub search_text: Option<String>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, limit: 10, sort_field: SortField::CreatedAt, sort_order: SortOrder::Desc, search_text: None }
    }
}

impl PaginationParams {
    /// Query pairs for `GET /blogs`. Blank search text is omitted.
    #[must_use]
    pub fn list_all_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_owned(), self.page.to_string()),
            ("limit".to_owned(), self.limit.to_string()),
            ("sort_by".to_owned(), self.sort_field.as_str().to_owned()),
            ("order".to_owned(), self.sort_order.as_str().to_owned()),
        ];
        if let Some(search) = self.search_text.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query.push(("search".to_owned(), search.to_owned()));
        }
        query
    }

    /// Query pairs for `GET /blogs/my`, which only pages.
    #[must_use]
    pub fn list_mine_query(&self) -> Vec<(String, String)> {
        vec![("page".to_owned(), self.page.to_string()), ("per_page".to_owned(), self.limit.to_string())]
    }
}
