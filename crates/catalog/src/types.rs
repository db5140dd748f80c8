//! The fundamental data structures used throughout the engine.
//!
//! Genre labels, mood tags, and difficulty labels are free-text strings as
//! they arrive from game stores; the closed vocabularies (mood labels,
//! archetypes, session-length classes) are enums. All comparisons against
//! free-text metadata happen case-insensitively in the consuming crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Unique identifier for a game on an external store (e.g. a Steam app id)
pub type AppId = u64;

// =============================================================================
// Game
// =============================================================================

/// One catalog or library entry.
///
/// `id` is unique within a single catalog snapshot; titles are not unique
/// keys. Library entries carry playtime and, when linked to a store,
/// `external_id`; candidates fetched from a store carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    /// Ordered genre labels as supplied by the catalog source
    #[serde(default)]
    pub genres: Vec<String>,
    /// Free-text mood/feature tags ("energetic", "relaxed", ...)
    #[serde(default)]
    pub mood_tags: Vec<String>,
    /// Playstyle tags matched against player archetypes ("achiever", ...)
    #[serde(default)]
    pub playstyle_tags: Vec<String>,
    /// Position on the fixed difficulty scale, when known
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Estimated play-session length class
    #[serde(default)]
    pub session_length: Option<SessionLength>,
    /// External store identifier, present only for store-linked entries
    #[serde(default)]
    pub external_id: Option<AppId>,
    /// Cumulative playtime in the owner's library, zero for candidates
    #[serde(default)]
    pub playtime_minutes: u64,
    #[serde(default)]
    pub multiplayer: bool,
}

impl Game {
    /// Create a game with the given identity and genres; remaining metadata
    /// is filled in through the `with_*` builders.
    pub fn new(id: impl Into<String>, title: impl Into<String>, genres: Vec<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres: genres.into_iter().map(String::from).collect(),
            mood_tags: Vec::new(),
            playstyle_tags: Vec::new(),
            difficulty: None,
            session_length: None,
            external_id: None,
            playtime_minutes: 0,
            multiplayer: false,
        }
    }

    pub fn with_mood_tags(mut self, tags: Vec<&str>) -> Self {
        self.mood_tags = tags.into_iter().map(String::from).collect();
        self
    }

    pub fn with_playstyle_tags(mut self, tags: Vec<&str>) -> Self {
        self.playstyle_tags = tags.into_iter().map(String::from).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_session_length(mut self, session_length: SessionLength) -> Self {
        self.session_length = Some(session_length);
        self
    }

    pub fn with_external_id(mut self, app_id: AppId) -> Self {
        self.external_id = Some(app_id);
        self
    }

    pub fn with_playtime_minutes(mut self, minutes: u64) -> Self {
        self.playtime_minutes = minutes;
        self
    }

    pub fn with_multiplayer(mut self, multiplayer: bool) -> Self {
        self.multiplayer = multiplayer;
        self
    }

    /// Cumulative playtime in hours
    pub fn playtime_hours(&self) -> f32 {
        self.playtime_minutes as f32 / 60.0
    }
}

// =============================================================================
// Closed vocabularies
// =============================================================================

/// Estimated play-session length class for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionLength {
    Short,
    Medium,
    Long,
    Flexible,
}

/// The single categorical mood bucket assigned by the classifier.
///
/// The classifier assigns at most one label per game; `None` from
/// classification means "unclassified" and is an expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Creative,
    Story,
    Competitive,
    Social,
    Exploratory,
    Focused,
    Energetic,
    Chill,
}

/// Fixed categorical player-type tag used for bonus scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Specialist,
    Socialite,
    Casual,
    Explorer,
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "specialist" => Ok(Archetype::Specialist),
            "socialite" => Ok(Archetype::Socialite),
            "casual" => Ok(Archetype::Casual),
            "explorer" => Ok(Archetype::Explorer),
            other => Err(format!("unknown archetype: {other}")),
        }
    }
}

// =============================================================================
// Difficulty scale
// =============================================================================

/// The fixed ordered difficulty scale, easiest first
pub const DIFFICULTY_SCALE: [&str; 4] = ["Relaxed", "Normal", "Hard", "Brutal"];

/// Position of a difficulty label on the fixed scale.
///
/// Unknown labels map to -1, which produces a large rank difference in the
/// difficulty scorer and therefore zero points; no further special-casing.
pub fn difficulty_rank(label: &str) -> i64 {
    DIFFICULTY_SCALE
        .iter()
        .position(|known| known.eq_ignore_ascii_case(label))
        .map(|i| i as i64)
        .unwrap_or(-1)
}

// =============================================================================
// Player signals
// =============================================================================

/// Derived per-request preference snapshot.
///
/// Rebuilt from the owned library (plus optional explicit overrides) every
/// time a recommendation is requested; never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSignals {
    /// Cumulative playtime in hours, keyed by lowercased genre label
    pub playtime_by_genre: HashMap<String, f32>,
    pub avg_session_minutes: f32,
    pub sessions_per_week: f32,
    /// One of [`DIFFICULTY_SCALE`]
    pub preferred_difficulty: String,
    /// Fraction of play spent in multiplayer, 0..=1
    pub multiplayer_ratio: f32,
    /// Fraction of sessions started late at night, 0..=1
    pub late_night_ratio: f32,
    /// Fraction of started games finished, 0..=1
    pub completion_rate: f32,
}

impl Default for PlayerSignals {
    fn default() -> Self {
        Self {
            playtime_by_genre: HashMap::new(),
            avg_session_minutes: 60.0,
            sessions_per_week: 3.0,
            preferred_difficulty: "Normal".to_string(),
            multiplayer_ratio: 0.0,
            late_night_ratio: 0.0,
            completion_rate: 0.0,
        }
    }
}

/// Explicit caller-supplied signal overrides.
///
/// Any field set here wins over the value derived from the owned library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalOverrides {
    #[serde(default)]
    pub avg_session_minutes: Option<f32>,
    #[serde(default)]
    pub sessions_per_week: Option<f32>,
    #[serde(default)]
    pub preferred_difficulty: Option<String>,
    #[serde(default)]
    pub multiplayer_ratio: Option<f32>,
    #[serde(default)]
    pub late_night_ratio: Option<f32>,
    #[serde(default)]
    pub completion_rate: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_rank_known_labels() {
        assert_eq!(difficulty_rank("Relaxed"), 0);
        assert_eq!(difficulty_rank("Normal"), 1);
        assert_eq!(difficulty_rank("Hard"), 2);
        assert_eq!(difficulty_rank("Brutal"), 3);
    }

    #[test]
    fn test_difficulty_rank_is_case_insensitive() {
        assert_eq!(difficulty_rank("hard"), 2);
        assert_eq!(difficulty_rank("BRUTAL"), 3);
    }

    #[test]
    fn test_difficulty_rank_unknown_label() {
        assert_eq!(difficulty_rank("Nightmare"), -1);
        assert_eq!(difficulty_rank(""), -1);
    }

    #[test]
    fn test_archetype_from_str() {
        assert_eq!("specialist".parse::<Archetype>(), Ok(Archetype::Specialist));
        assert_eq!("Socialite".parse::<Archetype>(), Ok(Archetype::Socialite));
        assert!("speedrunner".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_game_builder() {
        let game = Game::new("g1", "Test Game", vec!["RPG", "Strategy"])
            .with_difficulty("Hard")
            .with_session_length(SessionLength::Long)
            .with_playtime_minutes(600)
            .with_external_id(42);

        assert_eq!(game.genres.len(), 2);
        assert_eq!(game.difficulty.as_deref(), Some("Hard"));
        assert_eq!(game.external_id, Some(42));
        assert!((game.playtime_hours() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_game_deserializes_with_missing_fields() {
        let game: Game =
            serde_json::from_str(r#"{"id": "g1", "title": "Sparse"}"#).expect("should parse");
        assert_eq!(game.title, "Sparse");
        assert!(game.genres.is_empty());
        assert_eq!(game.external_id, None);
        assert_eq!(game.playtime_minutes, 0);
    }

    #[test]
    fn test_session_length_serde_lowercase() {
        let parsed: SessionLength = serde_json::from_str("\"flexible\"").expect("should parse");
        assert_eq!(parsed, SessionLength::Flexible);
    }
}
