//! App Header
//!
//! Sticky header with the home link and the favorites counter.

use leptos::prelude::*;

use crate::app::{use_router, Route};
use crate::favorites::use_favorites;

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let favorites = use_favorites();
    let route = router.route();

    view! {
        <header class="app-header">
            <a
                href="/"
                class="logo"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    router.navigate("/");
                }
            >
                <span class="logo-badge">"M"</span>
                <span class="logo-text">
                    <strong>"Mortydex"</strong>
                    <small>"Rick and Morty character catalog"</small>
                </span>
            </a>

            <nav class="header-nav">
                <Show when=move || route.get() != Route::Home>
                    <a
                        href="/"
                        class="home-link"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            router.navigate("/");
                        }
                    >
                        "Home"
                    </a>
                </Show>
                <a
                    href="/?favorites=true"
                    class="favorites-link"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        router.navigate("/?favorites=true");
                    }
                >
                    <span class="heart">"\u{2665}"</span>
                    " Favorites"
                    <span class="favorites-count">{move || favorites.count()}</span>
                </a>
            </nav>
        </header>
    }
}
