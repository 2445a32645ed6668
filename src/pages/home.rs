//! Home Page
//!
//! Character grid with search, filters, pagination, and the favorites
//! view. All list decisions come from the reconciliation core; this page
//! only wires signals to components.

use leptos::prelude::*;

use crate::components::{
    CharacterCard, CharacterGridSkeleton, EmptyState, ErrorState, FilterPanel, Pagination,
    SearchBar,
};
use crate::debounce::{use_debounced, SEARCH_DEBOUNCE_MS};
use crate::favorites::use_favorites;
use crate::list_state::{use_character_list, CharacterListStoreFields, FetchStatus};
use crate::models::CharacterFilters;
use crate::url_state::{ParamUpdate, UrlStateHandle};

#[component]
pub fn HomePage() -> impl IntoView {
    let url = expect_context::<UrlStateHandle>();
    let favorites = use_favorites();
    let state = url.signal();

    let favorites_view = Memo::new(move |_| state.get().favorites);
    let page = Memo::new(move |_| state.get().page);
    let raw_filters = Memo::new(move |_| state.get().filters);
    let raw_name = Memo::new(move |_| state.get().filters.name);

    // typing updates the URL immediately; the fetch waits for quiet
    let debounced_name = use_debounced(raw_name.into(), SEARCH_DEBOUNCE_MS);
    let effective_filters = Memo::new(move |_| CharacterFilters {
        name: debounced_name.get(),
        ..state.get().filters
    });

    let handle = use_character_list(
        favorites_view.into(),
        effective_filters.into(),
        page.into(),
        favorites,
    );
    let list = handle.list;

    let status = move || list.status().get();
    let characters = move || list.characters().get();
    let info = move || list.info().get();
    let is_loading = move || matches!(status(), FetchStatus::Idle | FetchStatus::Loading);

    let on_name = Callback::new(move |value: String| url.update_one(ParamUpdate::Name(value)));
    let on_status = Callback::new(move |value: String| url.update_one(ParamUpdate::Status(value)));
    let on_species =
        Callback::new(move |value: String| url.update_one(ParamUpdate::Species(value)));
    let on_gender = Callback::new(move |value: String| url.update_one(ParamUpdate::Gender(value)));
    let on_page = Callback::new(move |value: u32| url.update_one(ParamUpdate::Page(value)));
    // the panel clears the selects it owns; the search box keeps its value
    let on_reset = Callback::new(move |_| {
        url.update_many(vec![
            ParamUpdate::Status(String::new()),
            ParamUpdate::Species(String::new()),
            ParamUpdate::Gender(String::new()),
        ])
    });
    let on_toggle_favorite = Callback::new(move |id: u32| favorites.toggle(id));

    let heading = move || {
        if favorites_view.get() {
            "Favorite Characters".to_string()
        } else {
            "Character Explorer".to_string()
        }
    };
    let subheading = move || {
        if favorites_view.get() {
            let count = favorites.count();
            let plural = if count == 1 { "" } else { "s" };
            format!("You have {count} favorite character{plural}")
        } else {
            let total = info().map(|info| info.count).unwrap_or_default();
            format!("Discover {total} characters from the multiverse")
        }
    };

    view! {
        <div class="home-page">
            <div class="page-heading">
                <h1>{heading}</h1>
                <p>{subheading}</p>
            </div>

            <Show when=move || { favorites_view.get() && favorites.count() > 0 }>
                <div class="favorites-actions">
                    <button class="clear-favorites" on:click=move |_| favorites.clear()>
                        "Clear all favorites"
                    </button>
                </div>
            </Show>

            <Show when=move || !favorites_view.get()>
                <div class="search-and-filters">
                    <SearchBar value=Signal::derive(move || raw_name.get()) on_input=on_name/>
                    <FilterPanel
                        filters=Signal::derive(move || raw_filters.get())
                        on_status=on_status
                        on_species=on_species
                        on_gender=on_gender
                        on_reset=on_reset
                    />
                </div>
            </Show>

            <Show when=move || !is_loading() && !characters().is_empty()>
                <div class="results-summary">
                    <span>
                        {move || {
                            let shown = characters().len();
                            match info() {
                                Some(info) if !favorites_view.get() => {
                                    format!("Showing {shown} of {} characters", info.count)
                                }
                                _ => format!("Showing {shown} characters"),
                            }
                        }}
                    </span>
                    <Show when=move || !favorites_view.get()>
                        <span>
                            {move || {
                                info()
                                    .filter(|info| info.pages > 1)
                                    .map(|info| format!("Page {} of {}", page.get(), info.pages))
                            }}
                        </span>
                    </Show>
                </div>
            </Show>

            {move || match status() {
                FetchStatus::Idle | FetchStatus::Loading => {
                    view! { <CharacterGridSkeleton/> }.into_any()
                }
                FetchStatus::Error => {
                    view! {
                        <ErrorState
                            message=Signal::derive(move || {
                                list.error().get().unwrap_or_else(|| "Request failed".into())
                            })
                            on_retry=Callback::new(move |_| handle.retry())
                        />
                    }
                        .into_any()
                }
                FetchStatus::Success if characters().is_empty() => {
                    if favorites_view.get() {
                        view! {
                            <EmptyState
                                title="No favorites yet"
                                message="Start exploring and add characters to your favorites!"
                                action_label="Browse Characters"
                                on_action=Callback::new(move |_| {
                                    url.update_one(ParamUpdate::Favorites(false))
                                })
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <EmptyState
                                title="No characters found"
                                message="Try adjusting your search or filters"
                                action_label="Clear Filters"
                                on_action=Callback::new(move |_| url.reset())
                            />
                        }
                            .into_any()
                    }
                }
                FetchStatus::Success => {
                    view! {
                        <div class="character-grid">
                            <For
                                each=move || characters()
                                key=|character| character.id
                                children=move |character| {
                                    let id = character.id;
                                    view! {
                                        <CharacterCard
                                            character=character
                                            is_favorite=Signal::derive(move || {
                                                favorites.is_favorite(id)
                                            })
                                            on_toggle_favorite=on_toggle_favorite
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || {
                !favorites_view.get() && !is_loading() && status() == FetchStatus::Success
            }>
                <Pagination
                    current_page=Signal::derive(move || page.get())
                    total_pages=Signal::derive(move || {
                        info().map(|info| info.pages).unwrap_or_default()
                    })
                    on_page=on_page
                />
            </Show>
        </div>
    }
}
