//! Caller-facing service facade.
//!
//! Bundles the injected fallback catalog, the standard scorer set, and the
//! external-catalog pipeline behind two request/response entry points.
//! Nothing here persists state; every call derives what it needs from the
//! arguments and discards it.

use crate::pipeline::{CatalogPipeline, PipelineReport};
use crate::provider::CatalogProvider;
use catalog::{Archetype, Game, SignalOverrides, builtin_catalog};
use profile::derive_signals;
use scoring::{Recommendation, Recommender, ScoringContext};
use std::sync::Arc;
use tracing::info;

/// The player profile a personalised request scores against.
#[derive(Debug, Clone, Default)]
pub struct Persona {
    pub archetype: Option<Archetype>,
    /// Owned library snapshot, read-only for the engine
    pub library: Vec<Game>,
    /// Explicit signal overrides, applied after library derivation
    pub overrides: Option<SignalOverrides>,
}

/// The engine's public API surface.
pub struct RecommendationService {
    catalog: Vec<Game>,
    recommender: Recommender,
    pipeline: CatalogPipeline,
}

impl RecommendationService {
    /// Create a service over the built-in fallback catalog.
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog: builtin_catalog(),
            recommender: Recommender::standard(),
            pipeline: CatalogPipeline::new(provider),
        }
    }

    /// Replace the candidate catalog (primarily for tests and demos).
    pub fn with_catalog(mut self, catalog: Vec<Game>) -> Self {
        self.catalog = catalog;
        self
    }

    /// One personalised recommendation from the local candidate catalog.
    ///
    /// `refresh_index` walks down the ranked list on repeated requests.
    /// With no persona the result is the documented random pick among the
    /// first three catalog entries. Returns `None` only when the catalog
    /// itself is empty.
    pub fn personalised(
        &self,
        persona: Option<&Persona>,
        refresh_index: usize,
    ) -> Option<Recommendation> {
        let context = persona.map(|p| {
            let signals = derive_signals(&p.library, p.overrides.as_ref());
            ScoringContext {
                signals,
                archetype: p.archetype,
            }
        });
        let recommendation = self
            .recommender
            .recommend(&self.catalog, context.as_ref(), refresh_index)?;
        info!(
            title = %recommendation.game.title,
            score = recommendation.score,
            refresh_index,
            "personalised recommendation served"
        );
        Some(recommendation)
    }

    /// Ranked store recommendations for an owned library, with telemetry.
    pub async fn discover(&self, owned: &[Game], limit: usize) -> PipelineReport {
        self.pipeline.recommend(owned, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ExternalGame, StaticCatalogProvider};

    fn service() -> RecommendationService {
        let provider = Arc::new(StaticCatalogProvider::new(vec![
            ExternalGame::new(1, "Store RPG", vec!["RPG"]),
            ExternalGame::new(2, "Store Action", vec!["Action"]),
        ]));
        RecommendationService::new(provider)
    }

    #[test]
    fn test_no_persona_returns_general_pick() {
        let service = service();
        let rec = service.personalised(None, 0).expect("builtin catalog is non-empty");
        assert_eq!(rec.score, 50);
        assert_eq!(rec.explanation, "Based on general trends and popularity");
    }

    #[test]
    fn test_persona_with_library_is_deterministic() {
        let service = service();
        let persona = Persona {
            library: vec![
                Game::new("o1", "Owned Roguelike", vec!["Roguelike"]).with_playtime_minutes(60 * 30),
            ],
            ..Default::default()
        };
        let first = service.personalised(Some(&persona), 0).unwrap();
        let second = service.personalised(Some(&persona), 0).unwrap();
        assert_eq!(first.game.id, second.game.id);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let service = service().with_catalog(vec![]);
        assert!(service.personalised(None, 0).is_none());
    }

    #[tokio::test]
    async fn test_discover_delegates_to_pipeline() {
        let service = service();
        let owned = vec![Game::new("o1", "Owned RPG", vec!["RPG"])];
        let report = service.discover(&owned, 5).await;
        assert_eq!(report.genres_searched, vec!["rpg"]);
        assert_eq!(report.games.len(), 1);
        assert_eq!(report.games[0].app_id, 1);
    }
}
