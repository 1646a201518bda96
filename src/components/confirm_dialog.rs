//! Modal confirmation dialog.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into, default = "Are you sure?".to_owned())] title: String,
    #[prop(into, optional)] description: Option<String>,
    #[prop(into, default = "Confirm".to_owned())] confirm_text: String,
    #[prop(into, default = "Cancel".to_owned())] cancel_text: String,
    #[prop(into, optional)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !busy.get_untracked() {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    let confirm_label = Signal::derive(move || if busy.get() { "Working...".to_owned() } else { confirm_text.clone() });

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>{title.clone()}</h2>
                    {description.clone().map(|text| view! { <p class="dialog__description">{text}</p> })}
                    <div class="dialog__actions">
                        <button
                            class="btn btn--outline"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            {cancel_text.clone()}
                        </button>
                        <button
                            class="btn btn--danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || confirm_label.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
