//! Scorer implementations for the recommendation engine.
//!
//! One module per signal dimension; the standard evaluation order is fixed
//! by [`crate::aggregator::Recommender::standard`].

pub mod archetype;
pub mod genre_affinity;
pub mod mood_pattern;
pub mod difficulty;
pub mod session_length;

// Re-export for convenience
pub use archetype::ArchetypeScorer;
pub use difficulty::DifficultyScorer;
pub use genre_affinity::GenreAffinityScorer;
pub use mood_pattern::MoodPatternScorer;
pub use session_length::SessionLengthScorer;
