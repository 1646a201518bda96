//! Single blog view at `/blogs/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::blogs::BlogService;
use crate::net::types::Blog;
use crate::state::fetch::{FetchState, load_into};
use crate::state::session::SessionContext;
use crate::util::format::format_timestamp;
use crate::util::routes;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="card empty-card">
            <h2>"Blog Not Found"</h2>
            <p>"The blog you're looking for doesn't exist or has been removed."</p>
            <a class="btn" href=routes::BLOGS>
                "Back to Blogs"
            </a>
        </section>
    }
}

#[component]
pub fn BlogViewPage() -> impl IntoView {
    let blogs = expect_context::<BlogService>();
    let session = expect_context::<SessionContext>().state();
    let params = use_params_map();
    let blog_id = Memo::new(move |_| params.with(|p| routes::parse_blog_id(p.get("id").as_deref())));
    let fetch = RwSignal::new(FetchState::<Option<Blog>>::default());

    Effect::new(move || {
        let Some(id) = blog_id.get() else {
            return;
        };
        let blogs = blogs.clone();
        load_into(fetch, async move { blogs.get_by_id(id).await });
    });

    let body = move || {
        if blog_id.get().is_none() {
            return view! { <NotFound /> }.into_any();
        }
        let state = fetch.get();
        if state.error.is_some() {
            return view! { <NotFound /> }.into_any();
        }
        match state.data {
            None => view! { <p class="loading">"Loading blog..."</p> }.into_any(),
            Some(None) => view! { <NotFound /> }.into_any(),
            Some(Some(blog)) => {
                let is_owner = session.get().user.is_some_and(|u| u.id == blog.user_id);
                let edited = blog.updated_at != blog.created_at;
                view! {
                    <article class="card blog-view">
                        <h1 class="blog-view__title">{blog.title}</h1>
                        <div class="blog-view__meta">
                            <span>"Published " {format_timestamp(&blog.created_at)}</span>
                            {edited.then(|| view! { <span>"Updated " {format_timestamp(&blog.updated_at)}</span> })}
                        </div>
                        <div class="blog-view__content">
                            {blog
                                .content
                                .split("\n\n")
                                .map(|para| view! { <p>{para.to_owned()}</p> })
                                .collect_view()}
                        </div>
                        {is_owner.then(|| view! {
                            <a class="btn btn--outline" href=routes::edit_blog_path(blog.id)>
                                "Edit"
                            </a>
                        })}
                    </article>
                }
                .into_any()
            }
        }
    };

    view! { <div class="blog-view-page">{body}</div> }
}
