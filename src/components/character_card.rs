//! Character Card Component
//!
//! Grid card with status badge, favorite toggle, and a link to the
//! detail page.

use leptos::prelude::*;

use crate::app::use_router;
use crate::models::{Character, CharacterStatus};

fn status_class(status: CharacterStatus) -> &'static str {
    match status {
        CharacterStatus::Alive => "status-badge status-alive",
        CharacterStatus::Dead => "status-badge status-dead",
        CharacterStatus::Unknown => "status-badge status-unknown",
    }
}

#[component]
pub fn CharacterCard(
    character: Character,
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(into)] on_toggle_favorite: Callback<u32>,
) -> impl IntoView {
    let router = use_router();
    let id = character.id;
    let href = format!("/character/{id}");
    let link = href.clone();

    let favorite_class = move || {
        if is_favorite.get() {
            "favorite-toggle active"
        } else {
            "favorite-toggle"
        }
    };
    let favorite_label = move || {
        if is_favorite.get() {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    };

    view! {
        <article class="character-card">
            <button
                class=favorite_class
                aria-label=favorite_label
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_toggle_favorite.run(id);
                }
            >
                "\u{2665}"
            </button>

            <a
                href=href
                class="card-link"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    router.navigate(&link);
                }
            >
                <div class="card-image">
                    <img src=character.image.clone() alt=character.name.clone() loading="lazy"/>
                    <span class=status_class(character.status)>
                        <span class="status-dot"></span>
                        {character.status.to_string()}
                    </span>
                </div>

                <div class="card-body">
                    <h3 class="card-name">{character.name.clone()}</h3>
                    <p class="card-species">{character.species.clone()}</p>
                    <p class="card-location">
                        <span class="card-location-label">"Last known location"</span>
                        {character.location.name.clone()}
                    </p>
                </div>
            </a>
        </article>
    }
}
