//! Inline error banner for failed API calls.

use leptos::prelude::*;

/// Renders nothing while `message` is empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner" role="alert">
                <p>{move || message.get()}</p>
            </div>
        </Show>
    }
}
