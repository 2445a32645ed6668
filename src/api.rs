//! API Gateway
//!
//! HTTP bindings to the public Rick and Morty REST API.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Character, CharacterFilters, Episode, Location, Paged};

pub const BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Error raised by gateway calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Remote answered 404; list callers treat this as an empty result set
    #[error("no results found")]
    NotFound,
    /// Any other non-2xx status
    #[error("request failed with status {status}: {message}")]
    Remote { status: u16, message: String },
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected schema
    #[error("unexpected response body: {0}")]
    Decode(String),
}

// ========================
// Query Building
// ========================

/// Append `key=value` to `query`, percent-encoding the value.
/// Empty values are skipped so URLs stay minimal.
pub(crate) fn push_param(query: &mut String, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(key);
    query.push('=');
    query.push_str(&utf8_percent_encode(value, NON_ALPHANUMERIC).to_string());
}

/// Build the character list query for one filter/page combination.
/// Only non-empty filters are written; `page` is always sent.
pub fn character_query(filters: &CharacterFilters, page: u32) -> String {
    let mut query = String::new();
    push_param(&mut query, "name", &filters.name);
    push_param(&mut query, "status", &filters.status);
    push_param(&mut query, "species", &filters.species);
    push_param(&mut query, "gender", &filters.gender);
    push_param(&mut query, "page", &page.to_string());
    query
}

// ========================
// Fetch Plumbing
// ========================

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// GET `url` and decode the JSON body into `T`.
/// Non-2xx responses carry no guaranteed body schema, so only the status
/// line is mapped into the error.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a response".into()))?;

    if !response.ok() {
        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        let message = match response.status_text() {
            text if text.is_empty() => "request failed".to_string(),
            text => text,
        };
        return Err(ApiError::Remote {
            status: response.status(),
            message,
        });
    }

    let body = JsFuture::from(
        response
            .json()
            .map_err(|err| ApiError::Decode(js_message(&err)))?,
    )
    .await
    .map_err(|err| ApiError::Decode(js_message(&err)))?;
    serde_wasm_bindgen::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

// ========================
// Character Endpoints
// ========================

/// Fetch one page of characters matching `filters`
pub async fn get_characters(
    filters: &CharacterFilters,
    page: u32,
) -> Result<Paged<Character>, ApiError> {
    let url = format!("{BASE_URL}/character?{}", character_query(filters, page));
    fetch_json(&url).await
}

/// Fetch a single character by id
pub async fn get_character(id: u32) -> Result<Character, ApiError> {
    fetch_json(&format!("{BASE_URL}/character/{id}")).await
}

/// Batched-by-id fetch: zero ids is answered locally with no request,
/// exactly one id takes the single-item path.
pub async fn get_characters_by_ids(ids: &[u32]) -> Result<Vec<Character>, ApiError> {
    match ids {
        [] => Ok(Vec::new()),
        [id] => Ok(vec![get_character(*id).await?]),
        _ => {
            let list = join_ids(ids);
            fetch_json(&format!("{BASE_URL}/character/{list}")).await
        }
    }
}

// ========================
// Episode / Location Endpoints
// ========================

/// Fetch a single episode by id
pub async fn get_episode(id: u32) -> Result<Episode, ApiError> {
    fetch_json(&format!("{BASE_URL}/episode/{id}")).await
}

/// Batched-by-id episode fetch, same batching rule as characters
pub async fn get_episodes_by_ids(ids: &[u32]) -> Result<Vec<Episode>, ApiError> {
    match ids {
        [] => Ok(Vec::new()),
        [id] => Ok(vec![get_episode(*id).await?]),
        _ => {
            let list = join_ids(ids);
            fetch_json(&format!("{BASE_URL}/episode/{list}")).await
        }
    }
}

/// Fetch a single location by id
pub async fn get_location(id: u32) -> Result<Location, ApiError> {
    fetch_json(&format!("{BASE_URL}/location/{id}")).await
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// ========================
// Reference URL Helpers
// ========================

/// Extract ids from episode reference URLs
/// ("https://…/api/episode/12" -> 12); non-numeric tails are dropped
pub fn extract_episode_ids(urls: &[String]) -> Vec<u32> {
    urls.iter()
        .filter_map(|url| trailing_id(url, "/episode/"))
        .collect()
}

/// Extract the id from a location reference URL, if it carries one
pub fn extract_location_id(url: &str) -> Option<u32> {
    trailing_id(url, "/location/")
}

fn trailing_id(url: &str, segment: &str) -> Option<u32> {
    let (_, tail) = url.rsplit_once(segment)?;
    let id: u32 = tail.parse().ok()?;
    (id > 0).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_query_only_writes_set_filters() {
        let filters = CharacterFilters {
            name: "rick".into(),
            status: "Alive".into(),
            ..Default::default()
        };
        assert_eq!(character_query(&filters, 1), "name=rick&status=Alive&page=1");
    }

    #[test]
    fn test_character_query_empty_filters_still_sends_page() {
        assert_eq!(character_query(&CharacterFilters::default(), 3), "page=3");
    }

    #[test]
    fn test_character_query_percent_encodes_values() {
        let filters = CharacterFilters {
            species: "Mythological Creature".into(),
            ..Default::default()
        };
        assert_eq!(
            character_query(&filters, 1),
            "species=Mythological%20Creature&page=1"
        );
    }

    #[test]
    fn test_extract_episode_ids() {
        let urls = vec![
            "https://rickandmortyapi.com/api/episode/1".to_string(),
            "https://rickandmortyapi.com/api/episode/28".to_string(),
            "https://rickandmortyapi.com/api/episode/abc".to_string(),
            "https://rickandmortyapi.com/api/location/3".to_string(),
        ];
        assert_eq!(extract_episode_ids(&urls), vec![1, 28]);
    }

    #[test]
    fn test_extract_location_id() {
        assert_eq!(
            extract_location_id("https://rickandmortyapi.com/api/location/20"),
            Some(20)
        );
        assert_eq!(extract_location_id(""), None);
        assert_eq!(extract_location_id("https://example.com/other/20"), None);
        assert_eq!(
            extract_location_id("https://rickandmortyapi.com/api/location/0"),
            None
        );
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 2, 35]), "1,2,35");
    }
}
