//! Create/edit form for a blog post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the create page (optionally pre-filled from a topic suggestion) and
//! the edit page. Validation runs before any request; server failures show in
//! a banner above the fields.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::error_banner::ErrorBanner;
use crate::net::blogs::BlogService;
use crate::net::types::{BlogDraft, BlogPatch};
use crate::util::routes;
use crate::util::task::spawn_task;
use crate::util::validation::{FieldErrors, validate_blog};

/// `blog_id` present means edit mode.
#[component]
pub fn BlogForm(#[prop(optional)] blog_id: Option<i64>, #[prop(optional)] initial: BlogDraft) -> impl IntoView {
    let blogs = expect_context::<BlogService>();
    let navigate = use_navigate();

    let title = RwSignal::new(initial.title);
    let content = RwSignal::new(initial.content);
    let field_errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = BlogDraft { title: title.get_untracked(), content: content.get_untracked() };
        if let Err(errors) = validate_blog(&draft) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());
        error.set(String::new());
        busy.set(true);

        let blogs = blogs.clone();
        let navigate = navigate.clone();
        spawn_task(async move {
            let result = match blog_id {
                Some(id) => blogs.update(id, &BlogPatch::from(draft)).await.map(|blog| routes::blog_path(blog.id)),
                None => blogs.create(&draft).await.map(|_| routes::BLOGS.to_owned()),
            };
            busy.set(false);
            match result {
                Ok(next) => navigate(&next, NavigateOptions::default()),
                Err(err) => error.set(err.message),
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || field_errors.get().get(field).map(|message| view! { <p class="field-error">{message}</p> })
    };
    let cancel_href = blog_id.map_or_else(|| routes::BLOGS.to_owned(), routes::blog_path);
    let editing = blog_id.is_some();

    view! {
        <section class="card blog-form">
            <h1>{if editing { "Edit Blog" } else { "Create New Blog" }}</h1>
            <p class="card__subtitle">
                {if editing { "Update your blog post" } else { "Share your thoughts with the world" }}
            </p>
            <ErrorBanner message=error />
            <form on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        type="text"
                        placeholder="Enter blog title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    {field_error("title")}
                </label>
                <label class="field">
                    <span class="field__label">"Content"</span>
                    <textarea
                        rows="12"
                        placeholder="Write your blog content here..."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    {field_error("content")}
                </label>
                <div class="blog-form__actions">
                    <a class="btn btn--outline" href=cancel_href>
                        "Cancel"
                    </a>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), editing) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Blog",
                            (false, false) => "Create Blog",
                        }}
                    </button>
                </div>
            </form>
        </section>
    }
}
