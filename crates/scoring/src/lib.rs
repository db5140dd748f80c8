//! Scoring and aggregation for personalised recommendations.
//!
//! This crate provides:
//! - The [`SignalScorer`] trait and its five implementations, one per
//!   independent signal dimension (genre affinity, mood/session patterns,
//!   archetype, difficulty, session length)
//! - [`ScorerSet`] for composing scorers in a fixed evaluation order
//! - The [`Recommender`] aggregator: sums signal points per candidate,
//!   ranks, applies the refresh-index variety walk and the zero-score
//!   fallback, and assembles the human-readable explanation
//!
//! ## Architecture
//! Each scorer is stateless and returns a bounded point value plus a reason
//! string (empty when no points were awarded). The aggregator is the only
//! place where points are combined; a candidate's total is always the exact
//! sum of its five scorer outputs.

pub mod aggregator;
pub mod scorers;
pub mod traits;

// Re-export main types
pub use aggregator::{Recommendation, Recommender, ScoredCandidate};
pub use traits::{ScoringContext, SignalScore, SignalScorer};
