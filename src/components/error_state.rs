//! Error and Empty States
//!
//! Renderable endpoints for every failure: a banner with manual retry,
//! and the "no matches" empty state.

use leptos::prelude::*;

#[component]
pub fn ErrorState(
    #[prop(into, default = "Something went wrong".into())] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <h2>{title}</h2>
            <p class="error-message">{move || message.get()}</p>
            <button class="retry-button" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] action_label: String,
    #[prop(into)] on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>{title}</h2>
            <p>{message}</p>
            <button class="empty-action" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}
