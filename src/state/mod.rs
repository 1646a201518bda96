pub mod credentials;
pub mod fetch;
pub mod session;
