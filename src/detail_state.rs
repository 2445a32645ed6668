//! Character Detail State
//!
//! Loads one character plus its episodes and locations for the detail
//! page. Secondary lookups degrade to partial detail instead of failing
//! the whole page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::list_state::{FetchStatus, FreshnessGate};
use crate::models::{Character, Episode, Location};

/// Everything the detail page renders
#[derive(Clone, Debug, Default, Store)]
pub struct CharacterDetail {
    pub character: Option<Character>,
    pub episodes: Vec<Episode>,
    pub origin: Option<Location>,
    pub location: Option<Location>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

/// Handle returned by [`use_character_detail`]
#[derive(Clone, Copy)]
pub struct CharacterDetailHandle {
    pub detail: Store<CharacterDetail>,
    retry: Callback<()>,
}

impl CharacterDetailHandle {
    /// Re-run the identical detail fetch
    pub fn retry(&self) {
        self.retry.run(());
    }
}

struct DetailBundle {
    character: Character,
    episodes: Vec<Episode>,
    origin: Option<Location>,
    location: Option<Location>,
}

async fn load_detail(id: u32) -> Result<DetailBundle, ApiError> {
    let character = api::get_character(id).await?;

    let episode_ids = api::extract_episode_ids(&character.episode);
    let episodes = api::get_episodes_by_ids(&episode_ids)
        .await
        .unwrap_or_default();

    let origin = match api::extract_location_id(&character.origin.url) {
        Some(location_id) => api::get_location(location_id).await.ok(),
        None => None,
    };
    let location = match api::extract_location_id(&character.location.url) {
        Some(location_id) => api::get_location(location_id).await.ok(),
        None => None,
    };

    Ok(DetailBundle {
        character,
        episodes,
        origin,
        location,
    })
}

/// Drive the detail store for a route-supplied id.
///
/// `None` stands for an id that never identified a character (zero,
/// negative, or unparseable); it is rejected without touching the network.
pub fn use_character_detail(id: Signal<Option<u32>>) -> CharacterDetailHandle {
    let detail = Store::new(CharacterDetail::default());
    let gate = StoredValue::new(FreshnessGate::default());
    let last_id = StoredValue::new(None::<Option<u32>>);

    let run = move |id: Option<u32>| {
        let Some(tag) = gate.try_update_value(|gate| gate.begin()) else {
            return;
        };
        let Some(id) = id else {
            detail.set(CharacterDetail {
                status: FetchStatus::Error,
                error: Some("Character not found".into()),
                ..Default::default()
            });
            return;
        };
        detail.status().set(FetchStatus::Loading);
        detail.error().set(None);
        spawn_local(async move {
            let result = load_detail(id).await;
            let current = gate
                .try_with_value(|gate| gate.is_current(tag))
                .unwrap_or(false);
            if !current {
                return;
            }
            match result {
                Ok(bundle) => detail.set(CharacterDetail {
                    character: Some(bundle.character),
                    episodes: bundle.episodes,
                    origin: bundle.origin,
                    location: bundle.location,
                    status: FetchStatus::Success,
                    error: None,
                }),
                Err(ApiError::NotFound) => detail.set(CharacterDetail {
                    status: FetchStatus::Error,
                    error: Some("Character not found".into()),
                    ..Default::default()
                }),
                Err(err) => detail.set(CharacterDetail {
                    status: FetchStatus::Error,
                    error: Some(err.to_string()),
                    ..Default::default()
                }),
            }
        });
    };

    Effect::new(move |_| {
        let id = id.get();
        last_id.set_value(Some(id));
        run(id);
    });

    let retry = Callback::new(move |_| {
        let last = last_id.try_with_value(|last| *last).flatten();
        if let Some(id) = last {
            run(id);
        }
    });

    CharacterDetailHandle { detail, retry }
}
