//! Account creation. A successful signup signs the user in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::RegisterRequest;
use crate::state::session::SessionContext;
use crate::util::routes;
use crate::util::task::spawn_task;
use crate::util::validation::{FieldErrors, validate_register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let form = RegisterRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
        };
        if let Err(errors) = validate_register(&form) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_task(async move {
            match session.register(form).await {
                Ok(_) => navigate(routes::BLOGS, NavigateOptions::default()),
                Err(err) => error.set(err.message),
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || field_errors.get().get(field).map(|message| view! { <p class="field-error">{message}</p> })
    };
    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>, field: &'static str| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                {field_error(field)}
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <h1>"Create an account"</h1>
                <ErrorBanner message=error />
                <form on:submit=on_submit>
                    <div class="field-row">
                        {text_field("First name", "text", first_name, "first_name")}
                        {text_field("Last name", "text", last_name, "last_name")}
                    </div>
                    {text_field("Email", "email", email, "email")}
                    {text_field("Password", "password", password, "password")}
                    <button class="btn auth-card__submit" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href=routes::LOGIN>"Sign in"</a>
                </p>
            </section>
        </div>
    }
}
