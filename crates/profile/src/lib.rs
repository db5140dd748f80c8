//! # Profile Crate
//!
//! Derives a player's preference profile from their owned library.
//!
//! ## Components
//!
//! ### Mood classification
//! Maps one game's metadata to at most one [`catalog::MoodLabel`] using an
//! ordered, first-match-wins rule table. Priority order is the core design
//! decision: many games satisfy several predicates at once and the product
//! needs a single canonical bucket, not a blend.
//!
//! ### Genre affinity
//! Frequency-based genre weights over the owned library, with deterministic
//! tie-breaking (first-seen genre wins ties) so downstream ranking is stable.
//!
//! ### Player signals
//! The per-request [`catalog::PlayerSignals`] snapshot: playtime per genre,
//! session patterns, preferred difficulty. Derived values can be overridden
//! by explicit caller-supplied signals.
//!
//! All of this is pure, synchronous computation over in-memory data; each
//! call operates on freshly passed-in data and shares no state.

pub mod affinity;
pub mod mood;
pub mod signals;

// Re-export commonly used items
pub use affinity::{GenreAffinityProfile, GenreStat, build_genre_affinity, build_mood_affinity};
pub use mood::classify;
pub use signals::derive_signals;
