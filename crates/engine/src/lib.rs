//! # Engine Crate
//!
//! The external-catalog recommendation pipeline and the caller-facing
//! service facade.
//!
//! ## Pipeline stages
//! 1. Build the genre-affinity profile from the owned library
//! 2. Derive the top genres to query (fixed fallback triple for an empty
//!    library)
//! 3. Fetch each genre from the [`CatalogProvider`] collaborator,
//!    sequentially and in order — a failed genre contributes zero results
//!    and never aborts the run
//! 4. Union, deduplicate by store id (last write wins), drop games the
//!    player already owns
//! 5. Score survivors by genre weight, rank, truncate
//! 6. Return the list plus telemetry ([`PipelineReport`])
//!
//! Fetch issuance stays sequential on purpose: which duplicate survives
//! deduplication depends on fetch order, so concurrent fan-out would make
//! results non-deterministic.
//!
//! The pipeline never surfaces an error; any failure inside the run is
//! logged and converted into an empty, well-formed report.

pub mod dedup;
pub mod pipeline;
pub mod provider;
pub mod service;

// Re-export main types
pub use dedup::{dedupe, dedupe_and_filter_owned, filter_owned};
pub use pipeline::{CatalogPipeline, PipelineReport};
pub use provider::{CatalogProvider, ExternalGame, StaticCatalogProvider};
pub use service::{Persona, RecommendationService};
