//! Genre and mood affinity built from the owned library.
//!
//! Weights are simple frequencies (count / total owned games), not
//! time-decayed. Sorting is deterministic: genres are ranked by count
//! descending with ties broken by first-seen insertion order, so profile
//! output is reproducible for a given library ordering.

use crate::mood::classify;
use catalog::{Game, MoodLabel};
use std::collections::HashMap;
use tracing::debug;

/// Per-genre frequency statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreStat {
    pub count: usize,
    /// count / total owned games, as a percentage
    pub percentage: f32,
    /// count / total owned games, 0..=1
    pub weight: f32,
    /// Index of the first owned game that introduced this genre; tie-breaker
    pub first_seen: usize,
}

/// Genre-affinity weights over an owned library.
///
/// Keys in `per_genre` and entries in `top_genres` are lowercased genre
/// labels; all downstream matching is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct GenreAffinityProfile {
    pub per_genre: HashMap<String, GenreStat>,
    /// Genres sorted by count descending, ties broken by insertion order
    pub top_genres: Vec<String>,
    /// Head of `top_genres`, `None` for an empty library
    pub favorite_genre: Option<String>,
}

impl GenreAffinityProfile {
    /// The first `limit` entries of the ranked genre list.
    ///
    /// May return fewer than `limit` entries, or none at all for an empty
    /// library; substituting a fallback genre list is the caller's job.
    pub fn recommended_genres(&self, limit: usize) -> Vec<String> {
        self.top_genres.iter().take(limit).cloned().collect()
    }

    /// Frequency weight for a genre label, zero when unseen.
    pub fn weight_of(&self, genre: &str) -> f32 {
        self.per_genre
            .get(&genre.to_lowercase())
            .map(|stat| stat.weight)
            .unwrap_or(0.0)
    }
}

/// Build the genre-affinity profile for an owned library.
///
/// A game with N genres contributes one count to each of its N buckets.
pub fn build_genre_affinity(owned: &[Game]) -> GenreAffinityProfile {
    let total = owned.len();
    let mut per_genre: HashMap<String, GenreStat> = HashMap::new();
    let mut seen = 0usize;

    for game in owned {
        for genre in &game.genres {
            let key = genre.to_lowercase();
            let stat = per_genre.entry(key).or_insert_with(|| {
                let stat = GenreStat {
                    count: 0,
                    percentage: 0.0,
                    weight: 0.0,
                    first_seen: seen,
                };
                seen += 1;
                stat
            });
            stat.count += 1;
        }
    }

    for stat in per_genre.values_mut() {
        stat.weight = stat.count as f32 / total as f32;
        stat.percentage = stat.weight * 100.0;
    }

    let mut ranked: Vec<(&String, &GenreStat)> = per_genre.iter().collect();
    // Count descending, first-seen genre wins ties.
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first_seen.cmp(&b.1.first_seen)));
    let top_genres: Vec<String> = ranked.into_iter().map(|(genre, _)| genre.clone()).collect();
    let favorite_genre = top_genres.first().cloned();

    debug!(
        total_games = total,
        distinct_genres = per_genre.len(),
        favorite = favorite_genre.as_deref().unwrap_or("-"),
        "built genre affinity profile"
    );

    GenreAffinityProfile {
        per_genre,
        top_genres,
        favorite_genre,
    }
}

/// Frequency weights over the mood buckets of an owned library.
///
/// Games the classifier leaves unlabelled contribute nothing; the weights
/// are normalized over the owned-game count, so they need not sum to one.
pub fn build_mood_affinity(owned: &[Game]) -> HashMap<MoodLabel, f32> {
    let total = owned.len();
    let mut counts: HashMap<MoodLabel, usize> = HashMap::new();
    for game in owned {
        if let Some(label) = classify(game) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(label, count)| (label, count as f32 / total as f32))
        .collect()
}
