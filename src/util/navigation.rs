//! Hard navigation outside the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP wrapper has no access to the Leptos router, so a 401 forces a
//! full page load to `/login`. The reload rebuilds the session context from
//! the (now empty) credential store.

/// Sends the browser somewhere else.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Assigns `window.location`; no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
