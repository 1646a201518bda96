//! Create and edit pages around `BlogForm`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/blogs/create` accepts `?title=..&points=..` from the suggestion page and
//! shows the points beside the form as a writing reference. `/blogs/:id/edit`
//! loads the current blog first and pre-fills the form with it.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::blog_form::BlogForm;
use crate::components::error_banner::ErrorBanner;
use crate::net::blogs::BlogService;
use crate::net::types::{Blog, BlogDraft};
use crate::state::fetch::{FetchState, load_into};
use crate::util::routes;

#[component]
pub fn CreateBlogPage() -> impl IntoView {
    let query = use_query_map();
    let title = query.with_untracked(|q| q.get("title").unwrap_or_default());
    let points = query.with_untracked(|q| routes::parse_reference_points(q.get("points").as_deref()));
    let initial = BlogDraft { title, content: String::new() };

    if points.is_empty() {
        return view! { <BlogForm initial=initial /> }.into_any();
    }
    view! {
        <div class="create-with-reference">
            <BlogForm initial=initial />
            <aside class="card reference-points">
                <h2>"Reference Points"</h2>
                <ul>
                    {points.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
                </ul>
            </aside>
        </div>
    }
    .into_any()
}

#[component]
pub fn EditBlogPage() -> impl IntoView {
    let blogs = expect_context::<BlogService>();
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
        let state = fetch.get();
        if let Some(err) = state.error {
            return view! { <ErrorBanner message=err.message /> }.into_any();
        }
        match (blog_id.get(), state.data) {
            (None, _) | (_, Some(None)) => view! {
                <section class="card empty-card">
                    <h2>"Blog Not Found"</h2>
                    <a class="btn" href=routes::MY_BLOGS>
                        "Back to My Blogs"
                    </a>
                </section>
            }
            .into_any(),
            (_, None) => view! { <p class="loading">"Loading blog..."</p> }.into_any(),
            (Some(id), Some(Some(blog))) => {
                let initial = BlogDraft { title: blog.title, content: blog.content };
                view! { <BlogForm blog_id=id initial=initial /> }.into_any()
            }
        }
    };

    view! { <div class="edit-blog-page">{body}</div> }
}
