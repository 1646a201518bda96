//! Client configuration baked into the bundle at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once by `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Which response envelope the configured backend speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvelopeMode {
    /// Lists arrive as `{blogs, total, page, per_page, total_pages}` and
    /// suggestions as `{suggestions: [...]}`.
    Flat,
    /// Payloads are wrapped in `results`; suggestions may be a JSON string.
    #[default]
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub envelope: EnvelopeMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), envelope: EnvelopeMode::default() }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `BLOGDESK_API_BASE_URL`: default `http://localhost:8000`
    /// - `BLOGDESK_ENVELOPE`: `nested` (default) or `flat`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an empty base URL or an unknown envelope.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("BLOGDESK_API_BASE_URL"), option_env!("BLOGDESK_ENVELOPE"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an empty base URL or an unknown envelope.
    pub fn from_values(base_url: Option<&str>, envelope: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(base_url)?;
        let envelope = parse_envelope(envelope)?;
        Ok(Self { api_base_url, envelope })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Parse("BLOGDESK_API_BASE_URL is empty".to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_envelope(raw: Option<&str>) -> Result<EnvelopeMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("nested") {
        "nested" => Ok(EnvelopeMode::Nested),
        "flat" => Ok(EnvelopeMode::Flat),
        other => Err(ConfigError::Parse(format!(
            "unknown BLOGDESK_ENVELOPE '{other}' (expected 'nested' or 'flat')"
        ))),
    }
}
