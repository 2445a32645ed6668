//! Persistent Favorites Store
//!
//! In-memory favorites set mirrored synchronously to localStorage and
//! shared through context. When storage is unavailable or corrupt the set
//! degrades to in-memory only for the session.

use leptos::prelude::*;
use std::collections::HashSet;

/// localStorage slot holding the favorite character ids
const STORAGE_KEY: &str = "mortydex.favorites";

/// Shared favorites set with signal-based invalidation for consumers
#[derive(Clone, Copy)]
pub struct FavoritesStore {
    ids: RwSignal<HashSet<u32>>,
}

/// Create the store from persisted state and provide it via context
pub fn provide_favorites() {
    let ids = RwSignal::new(load());
    provide_context(FavoritesStore { ids });
}

/// Get the favorites store from context
pub fn use_favorites() -> FavoritesStore {
    expect_context::<FavoritesStore>()
}

impl FavoritesStore {
    /// O(1) membership check
    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.with(|ids| ids.contains(&id))
    }

    pub fn count(&self) -> usize {
        self.ids.with(|ids| ids.len())
    }

    /// Snapshot of the ids in ascending order (also the persisted order)
    pub fn sorted_ids(&self) -> Vec<u32> {
        self.ids.with(|ids| sorted(ids))
    }

    /// Remove `id` if present, else add it
    pub fn toggle(&self, id: u32) {
        self.mutate(|ids| toggle_id(ids, id));
    }

    /// Idempotent add
    pub fn add(&self, id: u32) {
        self.mutate(|ids| {
            ids.insert(id);
        });
    }

    /// No-op if absent
    pub fn remove(&self, id: u32) {
        self.mutate(|ids| {
            ids.remove(&id);
        });
    }

    pub fn clear(&self) {
        self.mutate(HashSet::clear);
    }

    /// Write-back happens inside the same update as the in-memory change,
    /// so callers never observe an eventual-consistency window.
    fn mutate(&self, mutation: impl FnOnce(&mut HashSet<u32>)) {
        self.ids.update(|ids| {
            mutation(ids);
            persist(ids);
        });
    }
}

/// Remove `id` if present, else insert it
fn toggle_id(ids: &mut HashSet<u32>, id: u32) {
    if !ids.remove(&id) {
        ids.insert(id);
    }
}

fn sorted(ids: &HashSet<u32>) -> Vec<u32> {
    let mut ordered: Vec<u32> = ids.iter().copied().collect();
    ordered.sort_unstable();
    ordered
}

// ========================
// Persistence
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load() -> HashSet<u32> {
    match local_storage().map(|storage| storage.get_item(STORAGE_KEY)) {
        Some(Ok(Some(raw))) => decode_ids(&raw),
        _ => HashSet::new(),
    }
}

/// Best effort: a failed write leaves the session in-memory only
fn persist(ids: &HashSet<u32>) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, &encode_ids(ids));
    }
}

/// Serialize as an ordered JSON integer list
fn encode_ids(ids: &HashSet<u32>) -> String {
    serde_json::to_string(&sorted(ids)).unwrap_or_else(|_| "[]".into())
}

/// Corrupt or missing payloads decode to the empty set
fn decode_ids(raw: &str) -> HashSet<u32> {
    serde_json::from_str::<Vec<u32>>(raw)
        .map(HashSet::from_iter)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut ids = HashSet::from([1, 5]);
        toggle_id(&mut ids, 3);
        assert!(ids.contains(&3));
        toggle_id(&mut ids, 3);
        assert_eq!(ids, HashSet::from([1, 5]));
    }

    #[test]
    fn test_toggle_removes_existing() {
        let mut ids = HashSet::from([7]);
        toggle_id(&mut ids, 7);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_encode_is_ordered() {
        let ids = HashSet::from([20, 3, 7]);
        assert_eq!(encode_ids(&ids), "[3,7,20]");
    }

    #[test]
    fn test_decode_round_trip() {
        let ids = HashSet::from([1, 2, 35]);
        assert_eq!(decode_ids(&encode_ids(&ids)), ids);
    }

    #[test]
    fn test_decode_corrupt_payload_is_empty() {
        assert!(decode_ids("not json").is_empty());
        assert!(decode_ids("{\"a\":1}").is_empty());
        assert!(decode_ids("[1,\"x\"]").is_empty());
        assert!(decode_ids("").is_empty());
    }
}
