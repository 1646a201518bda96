//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render blog data and forms; pages own fetching and routing.

pub mod blog_card;
pub mod blog_form;
pub mod confirm_dialog;
pub mod error_banner;
pub mod header;
