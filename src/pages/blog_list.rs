//! All-blogs and my-blogs listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/blogs` shows every blog with search, sort and page-size controls.
//! `/blogs/my` shows the signed-in user's blogs with edit and delete actions.
//! Both refetch whenever the paging parameters change; deletes refetch the
//! current page instead of patching the local list.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::net::blogs::BlogService;
use crate::net::types::{BlogPage, PaginationParams, SortField, SortOrder};
use crate::state::fetch::{FetchState, load_into};
use crate::util::routes;
use crate::util::task::spawn_task;

/// Page size of the my-blogs grid.
pub const MY_BLOGS_PER_PAGE: u32 = 6;

pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

#[component]
pub fn BlogListPage(#[prop(optional)] mine: bool) -> impl IntoView {
    let blogs = expect_context::<BlogService>();

    let initial = if mine {
        PaginationParams { limit: MY_BLOGS_PER_PAGE, ..PaginationParams::default() }
    } else {
        PaginationParams::default()
    };
    let params = RwSignal::new(initial);
    let fetch = RwSignal::new(FetchState::<BlogPage>::default());
    let search_input = RwSignal::new(String::new());

    {
        let blogs = blogs.clone();
        Effect::new(move || {
            let query = params.get();
            let blogs = blogs.clone();
            load_into(fetch, async move {
                if mine { blogs.list_mine(&query).await } else { blogs.list_all(&query).await }
            });
        });
    }
    let reload = move || params.update(|_| {});

    // Delete confirmation.
    let pending_delete = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);
    let delete_error = RwSignal::new(String::new());
    let on_delete_request = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        delete_error.set(String::new());
        let blogs = blogs.clone();
        spawn_task(async move {
            let result = blogs.delete(id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => reload(),
                Err(err) => delete_error.set(err.message),
            }
        });
    });

    let apply_search = move || {
        params.update(|p| {
            p.search_text = Some(search_input.get_untracked());
            p.page = 1;
        });
    };

    let filters = move || {
        (!mine).then(|| {
            view! {
                <section class="card list-filters">
                    <label class="field">
                        <span class="field__label">"Title"</span>
                        <input
                            type="text"
                            placeholder="Search by title"
                            prop:value=move || search_input.get()
                            on:input=move |ev| search_input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    apply_search();
                                }
                            }
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Sort By"</span>
                        <select
                            prop:value=move || params.get().sort_field.as_str()
                            on:change=move |ev| {
                                if let Some(field) = SortField::parse(&event_target_value(&ev)) {
                                    params.update(|p| {
                                        p.sort_field = field;
                                        p.page = 1;
                                    });
                                }
                            }
                        >
                            <option value="title">"Title"</option>
                            <option value="created_at">"Created At"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Order"</span>
                        <select
                            prop:value=move || params.get().sort_order.as_str()
                            on:change=move |ev| {
                                if let Some(order) = SortOrder::parse(&event_target_value(&ev)) {
                                    params.update(|p| {
                                        p.sort_order = order;
                                        p.page = 1;
                                    });
                                }
                            }
                        >
                            <option value="desc">"Desc"</option>
                            <option value="asc">"Asc"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Per Page"</span>
                        <select
                            prop:value=move || params.get().limit.to_string()
                            on:change=move |ev| {
                                if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                                    params.update(|p| {
                                        p.limit = limit;
                                        p.page = 1;
                                    });
                                }
                            }
                        >
                            {PAGE_SIZES
                                .iter()
                                .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn list-filters__search" on:click=move |_| apply_search()>
                        "Search"
                    </button>
                </section>
            }
        })
    };

    let body = move || {
        let state = fetch.get();
        if let Some(err) = state.error {
            return view! {
                <section class="card error-card">
                    <h2>"Error Loading Blogs"</h2>
                    <p>{err.message}</p>
                    <button class="btn" on:click=move |_| reload()>
                        "Try Again"
                    </button>
                </section>
            }
            .into_any();
        }
        let Some(page) = state.data else {
            return view! { <p class="loading">"Loading blogs..."</p> }.into_any();
        };
        if page.blogs.is_empty() {
            return view! {
                <section class="card empty-card">
                    <h2>"No Blogs Found"</h2>
                    {if mine {
                        view! {
                            <p>"You haven't written any blogs yet. Create your first blog post!"</p>
                            <a class="btn" href=routes::CREATE_BLOG>
                                "Create Your First Blog"
                            </a>
                        }
                        .into_any()
                    } else {
                        view! { <p>"No blogs have been published yet."</p> }.into_any()
                    }}
                </section>
            }
            .into_any();
        }

        let current = page.page.max(1);
        let total_pages = page.total_pages.max(1);
        view! {
            <div class="blog-grid">
                {page
                    .blogs
                    .into_iter()
                    .map(|blog| view! { <BlogCard blog=blog show_actions=mine on_delete=on_delete_request /> })
                    .collect_view()}
            </div>
            <Show when=move || { total_pages > 1 }>
                <nav class="pager">
                    <button
                        class="btn btn--outline"
                        disabled=move || { current <= 1 }
                        on:click=move |_| params.update(|p| p.page = current - 1)
                    >
                        "Previous"
                    </button>
                    <span class="pager__label">{format!("Page {current} of {total_pages}")}</span>
                    <button
                        class="btn btn--outline"
                        disabled=move || { current >= total_pages }
                        on:click=move |_| params.update(|p| p.page = current + 1)
                    >
                        "Next"
                    </button>
                </nav>
            </Show>
        }
        .into_any()
    };

    view! {
        <div class="blog-list-page">
            <header class="page-header">
                <h1>{if mine { "My Blogs" } else { "All Blogs" }}</h1>
                <p>
                    {if mine {
                        "Manage your blog posts"
                    } else {
                        "Discover amazing blog posts from our community"
                    }}
                </p>
            </header>
            {filters}
            <ErrorBanner message=delete_error />
            {body}
            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete blog?"
                description="This permanently removes the post."
                confirm_text="Delete"
                busy=deleting
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </div>
    }
}
