//! Form validation run before any request is sent.
//!
//! Each validator returns every failing field at once so the form can show
//! all messages inline in a single pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{BlogDraft, LoginRequest, RegisterRequest};

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";
pub const TOPICS_REQUIRED: &str = "Please add at least one topic";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name to message, for fields that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn check(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok {
            self.0.entry(field).or_insert(message);
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Loose address check: `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

fn present(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// # Errors
///
/// Returns the failing fields (`email`, `password`).
pub fn validate_login(form: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("email", is_valid_email(&form.email), INVALID_EMAIL);
    errors.check("password", !form.password.is_empty(), PASSWORD_REQUIRED);
    errors.into_result()
}

/// # Errors
///
/// Returns the failing fields (`email`, `password`, `first_name`, `last_name`).
pub fn validate_register(form: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("email", is_valid_email(&form.email), INVALID_EMAIL);
    errors.check("password", form.password.chars().count() >= MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT);
    errors.check("first_name", present(&form.first_name), FIRST_NAME_REQUIRED);
    errors.check("last_name", present(&form.last_name), LAST_NAME_REQUIRED);
    errors.into_result()
}

/// # Errors
///
/// Returns the failing fields (`title`, `content`).
pub fn validate_blog(draft: &BlogDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("title", present(&draft.title), TITLE_REQUIRED);
    errors.check("content", present(&draft.content), CONTENT_REQUIRED);
    errors.into_result()
}

/// Add a trimmed tag unless it is blank or already present. Returns whether it was added.
pub fn add_topic(topics: &mut Vec<String>, raw: &str) -> bool {
    let topic = raw.trim();
    if topic.is_empty() || topics.iter().any(|t| t == topic) {
        return false;
    }
    topics.push(topic.to_owned());
    true
}

/// # Errors
///
/// Returns [`TOPICS_REQUIRED`] when no topic has been added.
pub fn validate_topics(topics: &[String]) -> Result<(), &'static str> {
    if topics.is_empty() { Err(TOPICS_REQUIRED) } else { Ok(()) }
}
