//! AI topic suggestions at `/blogs/suggest`.
//!
//! Topics are entered as tags (Enter or comma adds one). Each suggestion can
//! be handed to the create page via "Use This Topic".

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::suggestions::SuggestionService;
use crate::net::types::TopicSuggestion;
use crate::util::routes;
use crate::util::task::spawn_task;
use crate::util::validation::{add_topic, validate_topics};

pub const FAILED_MESSAGE: &str = "Failed to get suggestions";

#[component]
fn SuggestionCard(suggestion: TopicSuggestion) -> impl IntoView {
    let href = routes::suggestion_draft_path(&suggestion);
    view! {
        <article class="card suggestion-card">
            <h3>{suggestion.topic}</h3>
            <ul class="suggestion-card__points">
                {suggestion.points.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
            </ul>
            <a class="btn btn--sm" href=href>
                "Use This Topic"
            </a>
        </article>
    }
}

#[component]
pub fn SuggestPage() -> impl IntoView {
    let service = expect_context::<SuggestionService>();

    let topics = RwSignal::new(Vec::<String>::new());
    let input = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<TopicSuggestion>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let commit_input = move || {
        let raw = input.get_untracked();
        topics.update(|list| {
            add_topic(list, &raw);
        });
        input.set(String::new());
    };

    let on_submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let requested = topics.get_untracked();
        if let Err(message) = validate_topics(&requested) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let service = service.clone();
        spawn_task(async move {
            match service.suggest(&requested).await {
                Ok(found) => suggestions.set(found),
                Err(err) => {
                    let message = if err.message.is_empty() { FAILED_MESSAGE.to_owned() } else { err.message };
                    error.set(message);
                }
            }
            busy.set(false);
        });
    };

    let tags = move || {
        topics
            .get()
            .into_iter()
            .map(|topic| {
                let label = format!("Remove {topic}");
                let removed = topic.clone();
                view! {
                    <span class="tag">
                        {topic}
                        <button
                            type="button"
                            class="tag__remove"
                            aria-label=label
                            on:click=move |_| topics.update(|list| list.retain(|t| *t != removed))
                        >
                            "×"
                        </button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="suggest-page">
            <section class="card">
                <h1>"Topic Suggestions"</h1>
                <p class="card__subtitle">"Add topics as tags to get AI-powered blog topic suggestions"</p>
                <ErrorBanner message=error />
                <label class="field">
                    <span class="field__label">"Topics"</span>
                    <div class="tag-list">{tags}</div>
                    <input
                        type="text"
                        placeholder="Type a topic and press Enter"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            let key = ev.key();
                            if key == "Enter" || key == "," {
                                ev.prevent_default();
                                commit_input();
                            }
                        }
                        on:blur=move |_| commit_input()
                    />
                </label>
                <button class="btn" disabled=move || busy.get() on:click=on_submit>
                    {move || if busy.get() { "Getting suggestions..." } else { "Get Suggestions" }}
                </button>
            </section>
            <Show when=move || !suggestions.get().is_empty()>
                <section class="suggestion-grid">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|suggestion| view! { <SuggestionCard suggestion=suggestion /> })
                            .collect_view()
                    }}
                </section>
            </Show>
        </div>
    }
}
