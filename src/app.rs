//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single initialization point: config is parsed, one `ApiClient` is
//! built, and the session context plus every service are provided through
//! Leptos context for pages to pick up with `expect_context`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::auth::AuthService;
use crate::net::blogs::BlogService;
use crate::net::client::ApiClient;
use crate::net::suggestions::SuggestionService;
use crate::pages::{
    blog_edit::{CreateBlogPage, EditBlogPage},
    blog_list::BlogListPage,
    blog_view::BlogViewPage,
    login::LoginPage,
    register::RegisterPage,
    suggest::SuggestPage,
};
use crate::state::session::SessionContext;
use crate::util::auth::{GuestOnly, Protected};
use crate::util::routes;

fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to default client config");
        ClientConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::info!("api base url {} ({:?} envelope)", config.api_base_url, config.envelope);
    let client = ApiClient::for_browser(&config);

    provide_context(SessionContext::init(AuthService::new(client.clone()), client.credentials().clone()));
    provide_context(BlogService::new(client.clone()));
    provide_context(SuggestionService::new(client));

    view! {
        <Title text="Blog Platform" />

        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <Redirect path=routes::BLOGS /> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::BLOGS /> } />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <GuestOnly><LoginPage /></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <GuestOnly><RegisterPage /></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("blogs")
                        view=|| view! { <Protected><BlogListPage /></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("my"))
                        view=|| view! { <Protected><BlogListPage mine=true /></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("create"))
                        view=|| view! { <Protected><CreateBlogPage /></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("suggest"))
                        view=|| view! { <Protected><SuggestPage /></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"))
                        view=|| view! { <Protected><BlogViewPage /></Protected> }
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <Protected><EditBlogPage /></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
