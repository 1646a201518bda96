//! Blog preview card for list pages.

use leptos::prelude::*;

use crate::net::types::Blog;
use crate::util::format::{format_date, truncate_content};
use crate::util::routes;

/// Card with a truncated preview. Edit and delete actions are shown only on
/// the owner's list.
#[component]
pub fn BlogCard(
    blog: Blog,
    #[prop(optional)] show_actions: bool,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = blog.id;
    let on_delete_click = move |_| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id);
        }
    };

    view! {
        <article class="blog-card">
            <div class="blog-card__head">
                <h3 class="blog-card__title">{blog.title}</h3>
                <Show when=move || show_actions>
                    <div class="blog-card__actions">
                        <a class="btn btn--outline btn--sm" href=routes::edit_blog_path(id)>
                            "Edit"
                        </a>
                        <button class="btn btn--danger btn--sm" on:click=on_delete_click>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
            <p class="blog-card__preview">{truncate_content(&blog.content)}</p>
            <div class="blog-card__foot">
                <span class="blog-card__date">{format_date(&blog.created_at)}</span>
                <a class="blog-card__more" href=routes::blog_path(id)>
                    "Read more →"
                </a>
            </div>
        </article>
    }
}
