//! Fire-and-forget futures on the browser event loop.

use std::future::Future;

/// Run `fut` on the local executor. Outside the browser build there is no
/// event loop and the future is dropped unpolled.
pub fn spawn_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
