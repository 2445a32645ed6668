//! Character Detail Page
//!
//! Full record for one character: badges, origin and location info, and
//! the episode list.

use leptos::prelude::*;

use crate::app::use_router;
use crate::components::{CharacterDetailSkeleton, ErrorState};
use crate::detail_state::{use_character_detail, CharacterDetailStoreFields};
use crate::favorites::use_favorites;
use crate::list_state::FetchStatus;
use crate::models::{Character, CharacterStatus, Episode, Location};

fn status_class(status: CharacterStatus) -> &'static str {
    match status {
        CharacterStatus::Alive => "badge badge-alive",
        CharacterStatus::Dead => "badge badge-dead",
        CharacterStatus::Unknown => "badge badge-unknown",
    }
}

#[component]
pub fn CharacterDetailPage(id: Option<u32>) -> impl IntoView {
    let router = use_router();
    let handle = use_character_detail(Signal::derive(move || id));
    let detail = handle.detail;

    let status = move || detail.status().get();

    view! {
        <div class="detail-page">
            <button class="back-button" on:click=move |_| router.back()>
                "\u{2190} Back"
            </button>

            {move || match status() {
                FetchStatus::Idle | FetchStatus::Loading => {
                    view! { <CharacterDetailSkeleton/> }.into_any()
                }
                FetchStatus::Error => {
                    view! {
                        <div class="detail-error">
                            <ErrorState
                                title="Character not found"
                                message=Signal::derive(move || {
                                    detail
                                        .error()
                                        .get()
                                        .unwrap_or_else(|| {
                                            "Unable to load character details".into()
                                        })
                                })
                                on_retry=Callback::new(move |_| handle.retry())
                            />
                            <a
                                href="/"
                                class="back-home"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    router.navigate("/");
                                }
                            >
                                "\u{2190} Back to characters"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                FetchStatus::Success => {
                    match detail.character().get() {
                        Some(character) => {
                            view! {
                                <DetailBody
                                    character=character
                                    episodes=detail.episodes().get()
                                    origin=detail.origin().get()
                                    location=detail.location().get()
                                />
                            }
                                .into_any()
                        }
                        None => view! { <CharacterDetailSkeleton/> }.into_any(),
                    }
                }
            }}
        </div>
    }
}

#[component]
fn DetailBody(
    character: Character,
    episodes: Vec<Episode>,
    origin: Option<Location>,
    location: Option<Location>,
) -> impl IntoView {
    let favorites = use_favorites();
    let id = character.id;

    let favorite_class = move || {
        if favorites.is_favorite(id) {
            "favorite-toggle large active"
        } else {
            "favorite-toggle large"
        }
    };

    let subtype_badge = (!character.subtype.is_empty())
        .then(|| view! { <span class="badge badge-subtype">{character.subtype.clone()}</span> });

    let origin_kind = origin.as_ref().map(|origin| origin.kind.clone());
    let location_kind = location.as_ref().map(|location| location.kind.clone());
    let origin_dimension = origin
        .as_ref()
        .map(|origin| origin.dimension.clone())
        .filter(|dimension| !dimension.is_empty() && dimension != "unknown");
    let location_dimension = location
        .as_ref()
        .map(|location| location.dimension.clone())
        .filter(|dimension| !dimension.is_empty() && dimension != "unknown");

    let first_episode = episodes
        .first()
        .map(|episode| format!("{} \u{00b7} {}", episode.episode, episode.name));
    let episode_count = episodes.len();

    view! {
        <article class="detail-card">
            <div class="detail-portrait">
                <img src=character.image.clone() alt=character.name.clone()/>
                <button class=favorite_class on:click=move |_| favorites.toggle(id)>
                    "\u{2665}"
                </button>
            </div>

            <div class="detail-body">
                <h1>{character.name.clone()}</h1>

                <div class="detail-badges">
                    <span class=status_class(character.status)>
                        {character.status.to_string()}
                    </span>
                    <span class="badge badge-species">{character.species.clone()}</span>
                    <span class="badge badge-gender">{character.gender.to_string()}</span>
                    {subtype_badge}
                </div>

                <div class="detail-info">
                    <InfoSection
                        label="Origin"
                        value=character.origin.name.clone()
                        sub=origin_kind
                    />
                    <InfoSection
                        label="Last Known Location"
                        value=character.location.name.clone()
                        sub=location_kind
                    />
                    {origin_dimension
                        .map(|dimension| {
                            view! { <InfoSection label="Origin Dimension" value=dimension/> }
                        })}
                    {location_dimension
                        .map(|dimension| {
                            view! { <InfoSection label="Current Dimension" value=dimension/> }
                        })}
                    {first_episode
                        .map(|label| {
                            view! { <InfoSection label="First Appearance" value=label/> }
                        })}
                </div>

                <section class="detail-episodes">
                    <h2>{format!("Episodes ({episode_count})")}</h2>
                    <ul>
                        {episodes
                            .iter()
                            .map(|episode| {
                                view! {
                                    <li class="episode-row">
                                        <span class="episode-code">{episode.episode.clone()}</span>
                                        <span class="episode-name">{episode.name.clone()}</span>
                                        <span class="episode-date">{episode.air_date.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </article>
    }
}

#[component]
fn InfoSection(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional_no_strip)] sub: Option<String>,
) -> impl IntoView {
    view! {
        <div class="info-section">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
            {sub.map(|sub| view! { <span class="info-sub">{sub}</span> })}
        </div>
    }
}
