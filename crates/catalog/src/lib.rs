//! Core domain types for the game-library recommendation engine.
//!
//! This crate defines the data model shared by every other crate in the
//! workspace:
//! - [`Game`] — one catalog or library entry with its descriptive metadata
//! - [`PlayerSignals`] — the ephemeral per-request preference snapshot
//! - [`MoodLabel`], [`Archetype`], [`SessionLength`] — the closed categorical
//!   vocabularies used by classification and scoring
//! - [`CatalogError`] — errors surfaced by external catalog collaborators
//! - [`builtin_catalog`] — the fixed fallback catalog used when no library
//!   signal is available
//!
//! Everything here is plain data: no I/O, no globals, no hidden state. The
//! fallback catalog is a constructor, not a static, so callers inject it as
//! configuration and tests can substitute synthetic catalogs freely.

pub mod builtin;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use builtin::builtin_catalog;
pub use error::CatalogError;
pub use types::{
    AppId, Archetype, Game, MoodLabel, PlayerSignals, SessionLength, SignalOverrides,
    DIFFICULTY_SCALE, difficulty_rank,
};
