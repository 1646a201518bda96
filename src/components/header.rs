//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionContext;
use crate::util::routes;

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.get() == href;
    view! {
        <a class="nav-link" class:nav-link--active=active href=href>
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();

    // The route guard sends the now-anonymous visitor to /login.
    let on_logout = move |_| session.logout();
    let first_name = move || state.get().user.map(|u| u.first_name).unwrap_or_default();
    let full_name = move || state.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=routes::BLOGS>
                "Blog Platform"
            </a>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| {
                    view! {
                        <nav class="site-header__nav">
                            <NavLink href=routes::LOGIN label="Login" />
                            <NavLink href=routes::REGISTER label="Register" />
                        </nav>
                    }
                }
            >
                <nav class="site-header__nav">
                    <NavLink href=routes::BLOGS label="All Blogs" />
                    <NavLink href=routes::MY_BLOGS label="My Blogs" />
                    <NavLink href=routes::CREATE_BLOG label="Create Blog" />
                    <NavLink href=routes::SUGGEST label="Topic Suggestions" />
                    <span class="site-header__welcome" title=full_name>
                        "Welcome, "
                        {first_name}
                    </span>
                    <button class="btn btn--outline btn--sm" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
