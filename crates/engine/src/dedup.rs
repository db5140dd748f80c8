//! Deduplication and ownership filtering of fetched candidates.
//!
//! The unioned per-genre result set can contain the same store id several
//! times (a game listed under more than one queried genre). Deduplication
//! keys on the store id with last-write-wins metadata: when an id repeats,
//! the occurrence from the later fetch replaces the earlier one's metadata.
//! Output order keeps each id's first-occurrence position so downstream
//! ranking ties stay deterministic.
//!
//! Ownership filtering drops candidates whose id appears among the owned
//! library's external ids. Owned entries without an external id are simply
//! ignored here; they can never exclude anything.

use crate::provider::ExternalGame;
use catalog::{AppId, Game};
use std::collections::{HashMap, HashSet};

/// Collapse duplicate store ids, last write wins on metadata.
pub fn dedupe(raw: Vec<ExternalGame>) -> Vec<ExternalGame> {
    let mut order: Vec<AppId> = Vec::new();
    let mut by_id: HashMap<AppId, ExternalGame> = HashMap::new();

    for game in raw {
        if !by_id.contains_key(&game.app_id) {
            order.push(game.app_id);
        }
        by_id.insert(game.app_id, game);
    }

    order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .collect()
}

/// Drop candidates already present in the owned library.
pub fn filter_owned(candidates: Vec<ExternalGame>, owned: &[Game]) -> Vec<ExternalGame> {
    let owned_ids: HashSet<AppId> = owned.iter().filter_map(|g| g.external_id).collect();
    candidates
        .into_iter()
        .filter(|candidate| !owned_ids.contains(&candidate.app_id))
        .collect()
}

/// Dedupe then filter; idempotent over its own output.
pub fn dedupe_and_filter_owned(raw: Vec<ExternalGame>, owned: &[Game]) -> Vec<ExternalGame> {
    filter_owned(dedupe(raw), owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_duplicate() -> Vec<ExternalGame> {
        vec![
            ExternalGame::new(42, "From RPG Query", vec!["RPG"]),
            ExternalGame::new(7, "Unique", vec!["Action"]),
            ExternalGame::new(42, "From Action Query", vec!["Action"]),
        ]
    }

    #[test]
    fn test_dedupe_keeps_last_metadata() {
        let deduped = dedupe(raw_with_duplicate());
        assert_eq!(deduped.len(), 2);
        let survivor = deduped.iter().find(|g| g.app_id == 42).unwrap();
        assert_eq!(survivor.title, "From Action Query");
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_position() {
        let deduped = dedupe(raw_with_duplicate());
        assert_eq!(deduped[0].app_id, 42);
        assert_eq!(deduped[1].app_id, 7);
    }

    #[test]
    fn test_filter_owned_by_external_id() {
        let owned = vec![Game::new("o1", "Owned", vec![]).with_external_id(7)];
        let filtered = dedupe_and_filter_owned(raw_with_duplicate(), &owned);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].app_id, 42);
    }

    #[test]
    fn test_owned_without_external_id_excludes_nothing() {
        let owned = vec![
            Game::new("o1", "Unlinked One", vec![]),
            Game::new("o2", "Unlinked Two", vec![]),
        ];
        let filtered = dedupe_and_filter_owned(raw_with_duplicate(), &owned);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filtering_twice_is_a_noop() {
        let owned = vec![Game::new("o1", "Owned", vec![]).with_external_id(7)];
        let once = dedupe_and_filter_owned(raw_with_duplicate(), &owned);
        let twice = dedupe_and_filter_owned(once.clone(), &owned);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.app_id, b.app_id);
            assert_eq!(a.title, b.title);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(dedupe_and_filter_owned(vec![], &[]).is_empty());
        let untouched = dedupe_and_filter_owned(raw_with_duplicate(), &[]);
        assert_eq!(untouched.len(), 2);
    }
}
