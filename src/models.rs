//! API Models
//!
//! Data structures matching the Rick and Morty API wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "Alive"),
            CharacterStatus::Dead => write!(f, "Dead"),
            CharacterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Gender reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterGender::Female => write!(f, "Female"),
            CharacterGender::Male => write!(f, "Male"),
            CharacterGender::Genderless => write!(f, "Genderless"),
            CharacterGender::Unknown => write!(f, "unknown"),
        }
    }
}

/// Name plus resolvable reference URL for an origin or current location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// Character record; immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Optional subtype; empty when the API has none
    #[serde(rename = "type")]
    pub subtype: String,
    pub gender: CharacterGender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// Episode reference URLs, in airing order
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Episode code, e.g. "S01E05"
    pub episode: String,
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    pub residents: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Pagination metadata reported alongside every list response.
/// Totals may change between requests; the client never assumes stability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of list results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub info: ApiInfo,
    pub results: Vec<T>,
}

/// Character list filters; an empty string means "no constraint".
/// Structural equality decides whether a new remote fetch is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterFilters {
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
}

impl CharacterFilters {
    /// True when any non-name filter is set
    pub fn has_active(&self) -> bool {
        !self.status.is_empty() || !self.species.is_empty() || !self.gender.is_empty()
    }
}
