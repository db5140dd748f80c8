//! The external-catalog recommendation pipeline.
//!
//! Stages run strictly in order with no retries and no partial rollback;
//! see the crate docs for the stage list. The per-genre fetches are the
//! only suspension points, so dropping the returned future between fetches
//! aborts the remaining un-issued requests.

use crate::dedup;
use crate::provider::{CatalogProvider, ExternalGame};
use catalog::Game;
use profile::{GenreAffinityProfile, build_genre_affinity};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

const DEFAULT_PAGE_LIMIT: usize = 10;
const DEFAULT_GENRE_COUNT: usize = 3;

/// Genres queried when the owned library yields no genre signal at all.
const FALLBACK_GENRES: [&str; 3] = ["Action", "Adventure", "RPG"];

/// Final pipeline output: the ranked list plus run telemetry.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Ranked, truncated recommendation list
    pub games: Vec<ExternalGame>,
    /// Unique candidates found before ownership filtering
    pub total_found: usize,
    /// Every genre a fetch was attempted for, in issue order
    pub genres_searched: Vec<String>,
    /// Candidates dropped for being already owned
    pub excluded_owned: usize,
}

impl PipelineReport {
    /// The well-formed empty report returned when the whole run fails.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Orchestrates profile building, per-genre fetching, deduplication,
/// ownership filtering, and genre-weight ranking.
#[derive(Clone)]
pub struct CatalogPipeline {
    provider: Arc<dyn CatalogProvider>,
    page_limit: usize,
    genre_count: usize,
    fallback_genres: Vec<String>,
}

impl CatalogPipeline {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            page_limit: DEFAULT_PAGE_LIMIT,
            genre_count: DEFAULT_GENRE_COUNT,
            fallback_genres: FALLBACK_GENRES.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Configure the per-genre page size (default: 10)
    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Configure how many top genres to query (default: 3)
    pub fn with_genre_count(mut self, genre_count: usize) -> Self {
        self.genre_count = genre_count;
        self
    }

    /// Run the pipeline for an owned library.
    ///
    /// Never fails: any error escaping the stages is logged here and
    /// converted into an empty report, so the caller always receives a
    /// well-formed response.
    #[instrument(skip(self, owned), fields(library_size = owned.len()))]
    pub async fn recommend(&self, owned: &[Game], limit: usize) -> PipelineReport {
        match self.run(owned, limit).await {
            Ok(report) => report,
            Err(error) => {
                error!(%error, "recommendation pipeline failed; returning empty report");
                PipelineReport::empty()
            }
        }
    }

    async fn run(&self, owned: &[Game], limit: usize) -> anyhow::Result<PipelineReport> {
        // Stage 1-2: genre profile, then the genres to query.
        let profile = build_genre_affinity(owned);
        let genres = self.query_genres(&profile);

        // Stage 3: one sequential fetch per genre. A failed genre is logged
        // and contributes zero results; the genre still counts as searched.
        let mut raw: Vec<ExternalGame> = Vec::new();
        for genre in &genres {
            match self.provider.fetch_by_genre(genre, self.page_limit).await {
                Ok(mut page) => {
                    debug!(genre = %genre, results = page.len(), "fetched genre page");
                    raw.append(&mut page);
                }
                Err(error) => {
                    warn!(genre = %genre, %error, "genre fetch failed, treating as zero results");
                }
            }
        }

        // Stage 4: union is already in fetch order; dedupe and drop owned.
        let unique = dedup::dedupe(raw);
        let total_found = unique.len();
        let survivors = dedup::filter_owned(unique, owned);
        let excluded_owned = total_found - survivors.len();

        // Stage 5: genre-weight scoring, ranked descending (stable).
        let mut scored: Vec<(ExternalGame, f32)> = survivors
            .into_par_iter()
            .map(|game| {
                let score = genre_weight_score(&game, &profile);
                (game, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        // Stage 6: truncate to the caller's limit.
        let games: Vec<ExternalGame> = scored.into_iter().take(limit).map(|(g, _)| g).collect();

        debug!(
            total_found,
            excluded_owned,
            returned = games.len(),
            "pipeline run complete"
        );
        Ok(PipelineReport {
            games,
            total_found,
            genres_searched: genres,
            excluded_owned,
        })
    }

    fn query_genres(&self, profile: &GenreAffinityProfile) -> Vec<String> {
        let genres = profile.recommended_genres(self.genre_count);
        if genres.is_empty() {
            debug!("library yielded no genres, using fallback genre list");
            self.fallback_genres.clone()
        } else {
            genres
        }
    }
}

/// Genre-weight-only score: the sum of `weight * 100` over every candidate
/// genre present in the profile, capped at 100.
fn genre_weight_score(game: &ExternalGame, profile: &GenreAffinityProfile) -> f32 {
    let sum: f32 = game
        .genres
        .iter()
        .map(|genre| profile.weight_of(genre) * 100.0)
        .sum();
    sum.min(100.0)
}
