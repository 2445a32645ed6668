//! URL-Synchronized Filter State
//!
//! The address bar's query string is the single source of truth for the
//! current filters, page cursor, and view mode. Decoding is a pure function
//! of the query string; mutations write a new history entry and the signal
//! in the same step.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use wasm_bindgen::JsValue;

use crate::api::push_param;
use crate::models::CharacterFilters;

const KEY_NAME: &str = "name";
const KEY_STATUS: &str = "status";
const KEY_SPECIES: &str = "species";
const KEY_GENDER: &str = "gender";
const KEY_PAGE: &str = "page";
const KEY_FAVORITES: &str = "favorites";

/// State decoded from the query string. Default values mean "key absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlState {
    pub filters: CharacterFilters,
    /// 1-based page cursor
    pub page: u32,
    /// `favorites=true` selects the favorites view and suppresses the
    /// other keys' effect
    pub favorites: bool,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            filters: CharacterFilters::default(),
            page: 1,
            favorites: false,
        }
    }
}

/// A single update against the decoded state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamUpdate {
    Name(String),
    Status(String),
    Species(String),
    Gender(String),
    Page(u32),
    Favorites(bool),
}

impl ParamUpdate {
    fn is_page(&self) -> bool {
        matches!(self, ParamUpdate::Page(_))
    }
}

// ========================
// Pure Codec
// ========================

/// Decode a query string (without the leading '?') into state.
/// Unrecognized keys are ignored; malformed page numbers fall back to 1.
pub fn decode_query(query: &str) -> UrlState {
    let mut state = UrlState::default();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let raw = raw.replace('+', " ");
        let value = percent_decode_str(&raw).decode_utf8_lossy().into_owned();
        match key {
            KEY_NAME => state.filters.name = value,
            KEY_STATUS => state.filters.status = value,
            KEY_SPECIES => state.filters.species = value,
            KEY_GENDER => state.filters.gender = value,
            KEY_PAGE => state.page = value.parse().ok().filter(|page| *page >= 1).unwrap_or(1),
            KEY_FAVORITES => state.favorites = value == "true",
            _ => {}
        }
    }
    state
}

/// Encode state as a canonical query string. Fields holding their default
/// value are omitted entirely, so encode(decode(q)) is minimal.
pub fn encode_query(state: &UrlState) -> String {
    let mut query = String::new();
    push_param(&mut query, KEY_NAME, &state.filters.name);
    push_param(&mut query, KEY_STATUS, &state.filters.status);
    push_param(&mut query, KEY_SPECIES, &state.filters.species);
    push_param(&mut query, KEY_GENDER, &state.filters.gender);
    if state.page > 1 {
        push_param(&mut query, KEY_PAGE, &state.page.to_string());
    }
    if state.favorites {
        push_param(&mut query, KEY_FAVORITES, "true");
    }
    query
}

/// Apply one update. Any non-page change resets the cursor to page 1,
/// since result ordering and count may shift under the new criteria.
pub fn apply_update(state: &UrlState, update: ParamUpdate) -> UrlState {
    let mut next = state.clone();
    if !update.is_page() {
        next.page = 1;
    }
    apply(&mut next, update);
    next
}

/// Apply a batch atomically. The page resets when the batch touches any
/// filter field without pinning the page explicitly.
pub fn apply_updates(state: &UrlState, updates: Vec<ParamUpdate>) -> UrlState {
    let mut next = state.clone();
    let touches_filters = updates.iter().any(|update| !update.is_page());
    let pins_page = updates.iter().any(ParamUpdate::is_page);
    if touches_filters && !pins_page {
        next.page = 1;
    }
    for update in updates {
        apply(&mut next, update);
    }
    next
}

fn apply(state: &mut UrlState, update: ParamUpdate) {
    match update {
        ParamUpdate::Name(value) => state.filters.name = value,
        ParamUpdate::Status(value) => state.filters.status = value,
        ParamUpdate::Species(value) => state.filters.species = value,
        ParamUpdate::Gender(value) => state.filters.gender = value,
        ParamUpdate::Page(page) => state.page = page.max(1),
        ParamUpdate::Favorites(value) => state.favorites = value,
    }
}

// ========================
// Browser Sync
// ========================

fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| search.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

/// Read the state currently encoded in the address bar
pub fn read_location() -> UrlState {
    decode_query(&current_query())
}

/// Push a new history entry whose query encodes `state`
fn write_location(state: &UrlState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".into());
    let query = encode_query(state);
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
}

/// Handle to the URL-backed state plus its mutation operations.
/// Provided once via context; the popstate listener lives in the app shell.
#[derive(Clone, Copy)]
pub struct UrlStateHandle {
    state: ReadSignal<UrlState>,
    set_state: WriteSignal<UrlState>,
}

impl UrlStateHandle {
    pub fn signal(&self) -> ReadSignal<UrlState> {
        self.state
    }

    /// Set a single field; non-page updates reset the page cursor to 1
    pub fn update_one(&self, update: ParamUpdate) {
        let next = apply_update(&self.state.get_untracked(), update);
        self.commit(next);
    }

    /// Apply a batch of updates atomically
    pub fn update_many(&self, updates: Vec<ParamUpdate>) {
        let next = apply_updates(&self.state.get_untracked(), updates);
        self.commit(next);
    }

    /// Drop every recognized key, returning to defaults
    pub fn reset(&self) {
        self.commit(UrlState::default());
    }

    /// Re-decode the address bar, e.g. after back/forward navigation
    pub fn refresh(&self) {
        self.set_state.set(read_location());
    }

    fn commit(&self, next: UrlState) {
        if next == self.state.get_untracked() {
            return;
        }
        write_location(&next);
        self.set_state.set(next);
    }
}

/// Create the URL-backed state signal from the current location
pub fn use_url_state() -> UrlStateHandle {
    let (state, set_state) = signal(read_location());
    UrlStateHandle { state, set_state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_query_is_default() {
        assert_eq!(decode_query(""), UrlState::default());
    }

    #[test]
    fn test_decode_reads_recognized_keys() {
        let state = decode_query("name=rick&status=Alive&page=4");
        assert_eq!(state.filters.name, "rick");
        assert_eq!(state.filters.status, "Alive");
        assert_eq!(state.page, 4);
        assert!(!state.favorites);
    }

    #[test]
    fn test_decode_percent_and_plus() {
        let state = decode_query("species=Mythological%20Creature&name=birdperson+jr");
        assert_eq!(state.filters.species, "Mythological Creature");
        assert_eq!(state.filters.name, "birdperson jr");
    }

    #[test]
    fn test_decode_malformed_page_falls_back_to_one() {
        assert_eq!(decode_query("page=abc").page, 1);
        assert_eq!(decode_query("page=0").page, 1);
        assert_eq!(decode_query("page=").page, 1);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        assert_eq!(decode_query("utm_source=feed&name=rick").filters.name, "rick");
    }

    #[test]
    fn test_encode_omits_defaults() {
        let state = UrlState {
            filters: CharacterFilters {
                name: "rick".into(),
                status: "Alive".into(),
                ..Default::default()
            },
            page: 1,
            favorites: false,
        };
        // page=1 is the default and must not appear
        assert_eq!(encode_query(&state), "name=rick&status=Alive");
        assert_eq!(encode_query(&UrlState::default()), "");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let state = UrlState {
            filters: CharacterFilters {
                name: "morty".into(),
                gender: "Male".into(),
                ..Default::default()
            },
            page: 3,
            favorites: false,
        };
        assert_eq!(decode_query(&encode_query(&state)), state);
    }

    #[test]
    fn test_favorites_key_round_trip() {
        let state = UrlState {
            favorites: true,
            ..Default::default()
        };
        assert_eq!(encode_query(&state), "favorites=true");
        assert!(decode_query("favorites=true").favorites);
        assert!(!decode_query("favorites=1").favorites);
    }

    #[test]
    fn test_leaving_favorites_view_keeps_filters() {
        let state = decode_query("status=Alive&favorites=true");
        let next = apply_update(&state, ParamUpdate::Favorites(false));
        assert!(!next.favorites);
        assert_eq!(next.filters.status, "Alive");
        assert_eq!(encode_query(&next), "status=Alive");
    }

    #[test]
    fn test_filter_update_resets_page() {
        let state = UrlState {
            page: 7,
            ..Default::default()
        };
        let next = apply_update(&state, ParamUpdate::Status("Dead".into()));
        assert_eq!(next.page, 1);
        assert_eq!(next.filters.status, "Dead");
    }

    #[test]
    fn test_page_update_keeps_filters() {
        let state = decode_query("name=rick&page=2");
        let next = apply_update(&state, ParamUpdate::Page(5));
        assert_eq!(next.page, 5);
        assert_eq!(next.filters.name, "rick");
    }

    #[test]
    fn test_clearing_a_filter_removes_its_key() {
        let state = decode_query("name=rick&status=Alive");
        let next = apply_update(&state, ParamUpdate::Name(String::new()));
        assert_eq!(encode_query(&next), "status=Alive");
    }

    #[test]
    fn test_batch_resets_page_unless_pinned() {
        let state = UrlState {
            page: 9,
            ..Default::default()
        };
        let reset = apply_updates(
            &state,
            vec![
                ParamUpdate::Name("rick".into()),
                ParamUpdate::Gender("Male".into()),
            ],
        );
        assert_eq!(reset.page, 1);

        let pinned = apply_updates(
            &state,
            vec![ParamUpdate::Name("rick".into()), ParamUpdate::Page(4)],
        );
        assert_eq!(pinned.page, 4);
    }

    #[test]
    fn test_page_only_batch_does_not_reset() {
        let state = decode_query("name=rick&page=2");
        let next = apply_updates(&state, vec![ParamUpdate::Page(6)]);
        assert_eq!(next.page, 6);
        assert_eq!(next.filters.name, "rick");
    }
}
