pub mod auth;
pub mod blogs;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod suggestions;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
