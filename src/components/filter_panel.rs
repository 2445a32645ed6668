//! Filter Panel Component
//!
//! Status, species, and gender selects with active-filter tags and a
//! clear-all action.

use leptos::prelude::*;

use crate::models::CharacterFilters;

const STATUS_OPTIONS: &[&str] = &["", "Alive", "Dead", "unknown"];
const GENDER_OPTIONS: &[&str] = &["", "Female", "Male", "Genderless", "unknown"];
// The API has no species list endpoint; these cover the common ones
const SPECIES_OPTIONS: &[&str] = &[
    "",
    "Human",
    "Alien",
    "Humanoid",
    "Robot",
    "Animal",
    "Mythological Creature",
    "Cronenberg",
    "Poopybutthole",
    "unknown",
];

#[component]
pub fn FilterPanel(
    #[prop(into)] filters: Signal<CharacterFilters>,
    #[prop(into)] on_status: Callback<String>,
    #[prop(into)] on_species: Callback<String>,
    #[prop(into)] on_gender: Callback<String>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let has_active = move || filters.get().has_active();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-head">
                <h3>"Filters"</h3>
                <Show when=has_active>
                    <button class="filter-clear" on:click=move |_| on_reset.run(())>
                        "Clear All"
                    </button>
                </Show>
            </div>

            <div class="filter-selects">
                <FilterSelect
                    label="Status"
                    empty_label="All Statuses"
                    options=STATUS_OPTIONS
                    value=Signal::derive(move || filters.get().status)
                    on_change=on_status
                />
                <FilterSelect
                    label="Species"
                    empty_label="All Species"
                    options=SPECIES_OPTIONS
                    value=Signal::derive(move || filters.get().species)
                    on_change=on_species
                />
                <FilterSelect
                    label="Gender"
                    empty_label="All Genders"
                    options=GENDER_OPTIONS
                    value=Signal::derive(move || filters.get().gender)
                    on_change=on_gender
                />
            </div>

            <Show when=has_active>
                <div class="filter-tags">
                    <Show when=move || !filters.get().status.is_empty()>
                        <FilterTag
                            label=Signal::derive(move || format!("Status: {}", filters.get().status))
                            on_remove=Callback::new(move |_| on_status.run(String::new()))
                        />
                    </Show>
                    <Show when=move || !filters.get().species.is_empty()>
                        <FilterTag
                            label=Signal::derive(move || format!("Species: {}", filters.get().species))
                            on_remove=Callback::new(move |_| on_species.run(String::new()))
                        />
                    </Show>
                    <Show when=move || !filters.get().gender.is_empty()>
                        <FilterTag
                            label=Signal::derive(move || format!("Gender: {}", filters.get().gender))
                            on_remove=Callback::new(move |_| on_gender.run(String::new()))
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    empty_label: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span>{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|option| {
                        let text = if option.is_empty() { empty_label } else { option };
                        view! { <option value=*option>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn FilterTag(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {move || label.get()}
            <button class="filter-tag-remove" on:click=move |_| on_remove.run(())>
                "\u{00d7}"
            </button>
        </span>
    }
}
