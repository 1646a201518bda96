//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch state and calls the services from context;
//! rendering details live in `components`.

pub mod blog_edit;
pub mod blog_list;
pub mod blog_view;
pub mod login;
pub mod register;
pub mod suggest;
