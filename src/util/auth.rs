//! Route guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in `Protected`; the login and register
//! routes wrap theirs in `GuestOnly`. Both read the session context's state and
//! nothing else.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{AuthState, SessionContext};
use crate::util::routes;

/// Send the visitor to `/login` once auth has settled with no user present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Signed-in users have no business on the login or register pages.
#[must_use]
pub fn should_redirect_authenticated(state: &AuthState) -> bool {
    state.user.is_some()
}

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    view! {
        <Show
            when=move || !should_redirect_unauth(&state.get())
            fallback=|| view! { <Redirect path=routes::LOGIN /> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    view! {
        <Show
            when=move || !should_redirect_authenticated(&state.get())
            fallback=|| view! { <Redirect path=routes::BLOGS /> }
        >
            {children()}
        </Show>
    }
}
