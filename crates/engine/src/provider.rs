//! The external catalog collaborator boundary.
//!
//! The engine never fetches store data itself; it consumes a
//! [`CatalogProvider`] supplied by the integration layer. The trait is the
//! only async seam in the workspace.

use async_trait::async_trait;
use catalog::{AppId, CatalogError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One game listing as returned by an external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalGame {
    pub app_id: AppId,
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl ExternalGame {
    pub fn new(app_id: AppId, title: impl Into<String>, genres: Vec<&str>) -> Self {
        Self {
            app_id,
            title: title.into(),
            genres: genres.into_iter().map(String::from).collect(),
        }
    }
}

/// An external game store queried one genre at a time.
///
/// A failed fetch means "zero results for this genre" to the pipeline;
/// implementations should still return the underlying error so it can be
/// logged at the pipeline stage.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_by_genre(
        &self,
        genre: &str,
        page_limit: usize,
    ) -> Result<Vec<ExternalGame>, CatalogError>;
}

/// Provider backed by a fixed in-memory listing.
///
/// Serves genre queries by case-insensitive genre membership. Used by the
/// demo CLI and as a test double; a production integration would implement
/// [`CatalogProvider`] over a store HTTP API instead.
pub struct StaticCatalogProvider {
    games: Vec<ExternalGame>,
}

impl StaticCatalogProvider {
    pub fn new(games: Vec<ExternalGame>) -> Self {
        Self { games }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn fetch_by_genre(
        &self,
        genre: &str,
        page_limit: usize,
    ) -> Result<Vec<ExternalGame>, CatalogError> {
        let mut page: Vec<ExternalGame> = self
            .games
            .iter()
            .filter(|game| game.genres.iter().any(|g| g.eq_ignore_ascii_case(genre)))
            .cloned()
            .collect();
        page.truncate(page_limit);
        debug!(genre, results = page.len(), "served static catalog page");
        Ok(page)
    }
}
