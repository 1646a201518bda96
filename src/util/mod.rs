pub mod auth;
pub mod format;
pub mod navigation;
pub mod routes;
pub mod task;
pub mod validation;
