//! List Reconciliation Core
//!
//! Decides, on every relevant state change, which character data to request
//! and which result set to present, reconciling filter criteria, page
//! cursor, and favorites membership. Stale in-flight responses are
//! discarded by comparing a monotonic request sequence number at commit
//! time, so the last-issued request always wins.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::favorites::FavoritesStore;
use crate::models::{ApiInfo, Character, CharacterFilters, Paged};

/// Fetch lifecycle for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What one reconciliation round decided to request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// Remote filtered/paginated view
    Page { filters: CharacterFilters, page: u32 },
    /// Favorites view with at least one id: a single batched-by-id call
    Favorites { ids: Vec<u32> },
    /// Favorites view with no ids: empty result, no network
    Empty,
}

/// Plan the request for the current (mode, criteria, page) state.
///
/// `filters` must already carry the debounced name. In the favorites view
/// the page is pinned to 1 and the criteria are ignored entirely.
pub fn plan_request(
    favorites_view: bool,
    filters: &CharacterFilters,
    page: u32,
    favorite_ids: Vec<u32>,
) -> ListRequest {
    if favorites_view {
        if favorite_ids.is_empty() {
            ListRequest::Empty
        } else {
            ListRequest::Favorites { ids: favorite_ids }
        }
    } else {
        ListRequest::Page {
            filters: filters.clone(),
            page: page.max(1),
        }
    }
}

/// Result of a completed round, after 404 reclassification
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Loaded {
        characters: Vec<Character>,
        info: Option<ApiInfo>,
    },
    Failed(String),
}

/// 404 means "nothing matched", not a hard failure
pub fn classify_page(result: Result<Paged<Character>, ApiError>) -> ListOutcome {
    match result {
        Ok(page) => ListOutcome::Loaded {
            characters: page.results,
            info: Some(page.info),
        },
        Err(ApiError::NotFound) => ListOutcome::Loaded {
            characters: Vec::new(),
            info: None,
        },
        Err(err) => ListOutcome::Failed(err.to_string()),
    }
}

/// Same classification for the batched-by-id favorites path
pub fn classify_batch(result: Result<Vec<Character>, ApiError>) -> ListOutcome {
    match result {
        Ok(characters) => ListOutcome::Loaded {
            characters,
            info: None,
        },
        Err(ApiError::NotFound) => ListOutcome::Loaded {
            characters: Vec::new(),
            info: None,
        },
        Err(err) => ListOutcome::Failed(err.to_string()),
    }
}

// ========================
// Freshness Gate
// ========================

/// Monotonic sequence of issued requests; only the latest may commit
#[derive(Debug, Default)]
pub struct FreshnessGate {
    issued: u64,
}

impl FreshnessGate {
    /// Tag a newly issued request
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True when `tag` belongs to the most recently issued request
    pub fn is_current(&self, tag: u64) -> bool {
        tag == self.issued
    }
}

/// Reconciled list view with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CharacterList {
    pub characters: Vec<Character>,
    pub info: Option<ApiInfo>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

/// Handle returned by [`use_character_list`]
#[derive(Clone, Copy)]
pub struct CharacterListHandle {
    pub list: Store<CharacterList>,
    retry: Callback<()>,
}

impl CharacterListHandle {
    /// Re-issue the identical last request
    pub fn retry(&self) {
        self.retry.run(());
    }
}

/// Drive the list store from the reactive inputs.
///
/// Any change of effective filters, page, or view mode replans and
/// refetches; favorite toggles replan only while the favorites view is
/// active, and filter or page changes are not tracked at all in that mode.
pub fn use_character_list(
    favorites_view: Signal<bool>,
    filters: Signal<CharacterFilters>,
    page: Signal<u32>,
    favorites: FavoritesStore,
) -> CharacterListHandle {
    let list = Store::new(CharacterList::default());
    let gate = StoredValue::new(FreshnessGate::default());
    let last_request = StoredValue::new(None::<ListRequest>);

    let run = move |request: ListRequest| {
        let Some(tag) = gate.try_update_value(|gate| gate.begin()) else {
            return;
        };
        match request {
            ListRequest::Empty => {
                // nothing to ask the remote for; commit the empty view directly
                list.set(CharacterList {
                    status: FetchStatus::Success,
                    ..Default::default()
                });
            }
            ListRequest::Page { filters, page } => {
                list.status().set(FetchStatus::Loading);
                list.error().set(None);
                spawn_local(async move {
                    let outcome = classify_page(api::get_characters(&filters, page).await);
                    if is_current(gate, tag) {
                        commit(list, outcome);
                    }
                });
            }
            ListRequest::Favorites { ids } => {
                list.status().set(FetchStatus::Loading);
                list.error().set(None);
                spawn_local(async move {
                    let outcome = classify_batch(api::get_characters_by_ids(&ids).await);
                    if is_current(gate, tag) {
                        commit(list, outcome);
                    }
                });
            }
        }
    };

    Effect::new(move |_| {
        let request = if favorites_view.get() {
            plan_request(true, &CharacterFilters::default(), 1, favorites.sorted_ids())
        } else {
            plan_request(false, &filters.get(), page.get(), Vec::new())
        };
        // equal criteria do not warrant a new remote fetch
        let repeat = last_request
            .try_with_value(|last| last.as_ref() == Some(&request))
            .unwrap_or(true);
        if repeat {
            return;
        }
        last_request.set_value(Some(request.clone()));
        run(request);
    });

    let retry = Callback::new(move |_| {
        let last = last_request.try_with_value(|last| last.clone()).flatten();
        if let Some(request) = last {
            run(request);
        }
    });

    CharacterListHandle { list, retry }
}

fn is_current(gate: StoredValue<FreshnessGate>, tag: u64) -> bool {
    gate.try_with_value(|gate| gate.is_current(tag))
        .unwrap_or(false)
}

fn commit(list: Store<CharacterList>, outcome: ListOutcome) {
    match outcome {
        ListOutcome::Loaded { characters, info } => {
            web_sys::console::log_1(
                &format!("[list] committed {} characters", characters.len()).into(),
            );
            list.set(CharacterList {
                characters,
                info,
                status: FetchStatus::Success,
                error: None,
            });
        }
        ListOutcome::Failed(message) => {
            list.set(CharacterList {
                characters: Vec::new(),
                info: None,
                status: FetchStatus::Error,
                error: Some(message),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterGender, CharacterStatus, LocationRef};

    fn make_character(id: u32) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            subtype: String::new(),
            gender: CharacterGender::Male,
            origin: LocationRef {
                name: "Earth (C-137)".to_string(),
                url: "https://rickandmortyapi.com/api/location/1".to_string(),
            },
            location: LocationRef {
                name: "Citadel of Ricks".to_string(),
                url: "https://rickandmortyapi.com/api/location/3".to_string(),
            },
            image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
            episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
            url: format!("https://rickandmortyapi.com/api/character/{}", id),
            created: "2017-11-04T18:48:46.250Z".to_string(),
        }
    }

    #[test]
    fn test_plan_zero_favorites_issues_no_request() {
        let plan = plan_request(true, &CharacterFilters::default(), 1, Vec::new());
        assert_eq!(plan, ListRequest::Empty);
    }

    #[test]
    fn test_plan_favorites_batches_ids() {
        let plan = plan_request(true, &CharacterFilters::default(), 1, vec![2, 5, 9]);
        assert_eq!(plan, ListRequest::Favorites { ids: vec![2, 5, 9] });
    }

    #[test]
    fn test_plan_favorites_ignores_filters_and_page() {
        let filters = CharacterFilters {
            name: "rick".into(),
            ..Default::default()
        };
        let plan = plan_request(true, &filters, 7, vec![1]);
        assert_eq!(plan, ListRequest::Favorites { ids: vec![1] });
    }

    #[test]
    fn test_plan_remote_view_carries_criteria() {
        let filters = CharacterFilters {
            status: "Alive".into(),
            ..Default::default()
        };
        let plan = plan_request(false, &filters, 3, Vec::new());
        assert_eq!(
            plan,
            ListRequest::Page {
                filters,
                page: 3
            }
        );
    }

    #[test]
    fn test_plan_clamps_page_to_one() {
        let plan = plan_request(false, &CharacterFilters::default(), 0, Vec::new());
        assert_eq!(
            plan,
            ListRequest::Page {
                filters: CharacterFilters::default(),
                page: 1
            }
        );
    }

    #[test]
    fn test_stale_request_may_not_commit() {
        let mut gate = FreshnessGate::default();
        let first = gate.begin();
        let second = gate.begin();
        // the earlier fetch resolves after the later one was issued
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_latest_request_commits_regardless_of_resolution_order() {
        let mut gate = FreshnessGate::default();
        let a = gate.begin();
        let b = gate.begin();
        // b resolves first and commits; a resolving later must be discarded
        assert!(gate.is_current(b));
        assert!(!gate.is_current(a));
    }

    #[test]
    fn test_not_found_classifies_as_empty_success() {
        let outcome = classify_page(Err(ApiError::NotFound));
        assert_eq!(
            outcome,
            ListOutcome::Loaded {
                characters: Vec::new(),
                info: None
            }
        );
    }

    #[test]
    fn test_server_error_classifies_as_failure() {
        let outcome = classify_page(Err(ApiError::Remote {
            status: 500,
            message: "Internal Server Error".into(),
        }));
        assert_eq!(
            outcome,
            ListOutcome::Failed(
                "request failed with status 500: Internal Server Error".to_string()
            )
        );
    }

    #[test]
    fn test_loaded_page_keeps_results_and_info() {
        let info = ApiInfo {
            count: 826,
            pages: 42,
            next: Some("https://rickandmortyapi.com/api/character?page=2".into()),
            prev: None,
        };
        let outcome = classify_page(Ok(Paged {
            info: info.clone(),
            results: vec![make_character(1), make_character(2)],
        }));
        match outcome {
            ListOutcome::Loaded { characters, info: got } => {
                assert_eq!(characters.len(), 2);
                assert_eq!(got, Some(info));
            }
            ListOutcome::Failed(message) => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn test_batch_not_found_is_empty() {
        assert_eq!(
            classify_batch(Err(ApiError::NotFound)),
            ListOutcome::Loaded {
                characters: Vec::new(),
                info: None
            }
        );
    }
}
