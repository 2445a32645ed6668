//! Search Bar Component
//!
//! Controlled name input. Debouncing happens upstream, on the decoded
//! URL value, so this stays a dumb input.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "Search characters by name...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
