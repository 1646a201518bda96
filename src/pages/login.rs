//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::LoginRequest;
use crate::state::session::SessionContext;
use crate::util::routes;
use crate::util::task::spawn_task;
use crate::util::validation::{FieldErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let form = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        if let Err(errors) = validate_login(&form) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_task(async move {
            match session.login(form).await {
                Ok(_) => navigate(routes::BLOGS, NavigateOptions::default()),
                Err(err) => error.set(err.message),
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || field_errors.get().get(field).map(|message| view! { <p class="field-error">{message}</p> })
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <h1>"Sign in"</h1>
                <ErrorBanner message=error />
                <form on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {field_error("email")}
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {field_error("password")}
                    </label>
                    <button class="btn auth-card__submit" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href=routes::REGISTER>"Register"</a>
                </p>
            </section>
        </div>
    }
}
