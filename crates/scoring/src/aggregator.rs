//! Aggregation of signal scores into one ranked recommendation.
//!
//! ## Algorithm
//! 1. Sum every scorer's points per candidate, collecting non-empty reasons
//!    in scorer-evaluation order
//! 2. Stable-sort descending by total score (ties keep catalog order)
//! 3. Select the candidate at `min(refresh_index, len - 1)` — the variety
//!    walk: repeated refreshes step down the ranked list deterministically
//!    instead of re-randomizing
//! 4. If the selected total is exactly zero (no signal matched at all),
//!    fall back to `catalog[refresh_index % len]` with a fixed score so the
//!    caller always receives a recommendation
//!
//! Without a scoring context the engine skips scoring entirely and picks
//! uniformly at random among the first three catalog entries; that branch
//! is the only non-deterministic path.

use crate::scorers::{
    ArchetypeScorer, DifficultyScorer, GenreAffinityScorer, MoodPatternScorer,
    SessionLengthScorer,
};
use crate::traits::{ScoringContext, SignalScorer};
use catalog::Game;
use rand::Rng;
use tracing::debug;

/// Score given to every fallback pick
pub const FALLBACK_SCORE: u32 = 50;

/// Explanation for the no-context random pick
pub const GENERAL_TRENDS_EXPLANATION: &str = "Based on general trends and popularity";

const ZERO_SCORE_FALLBACK_EXPLANATION: &str = "A popular pick you might enjoy";
const GENERIC_EXPLANATION: &str = "Recommended for you";
const REASON_SEPARATOR: &str = " • ";
const MAX_REASONS: usize = 3;
const RANDOM_POOL_SIZE: usize = 3;

/// A candidate with its aggregate score; lives for one request only.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub game: Game,
    pub total: u32,
    /// Non-empty reasons in scorer-evaluation order
    pub reasons: Vec<String>,
}

/// The external contract returned to callers.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub game: Game,
    pub explanation: String,
    pub score: u32,
}

/// Sums signal scorers over a candidate catalog and picks one entry.
pub struct Recommender {
    scorers: Vec<Box<dyn SignalScorer>>,
}

impl Recommender {
    /// Create a recommender with no scorers (for tests composing their own).
    pub fn new() -> Self {
        Self {
            scorers: Vec::new(),
        }
    }

    /// Add a scorer (builder pattern); evaluation order is insertion order.
    pub fn add_scorer(mut self, scorer: impl SignalScorer + 'static) -> Self {
        self.scorers.push(Box::new(scorer));
        self
    }

    /// The standard five-signal configuration in its fixed evaluation order.
    pub fn standard() -> Self {
        Self::new()
            .add_scorer(GenreAffinityScorer)
            .add_scorer(MoodPatternScorer)
            .add_scorer(ArchetypeScorer)
            .add_scorer(DifficultyScorer)
            .add_scorer(SessionLengthScorer)
    }

    /// Run every scorer over one candidate.
    ///
    /// The total is always the exact sum of the individual scorer outputs.
    pub fn score_candidate(&self, game: &Game, context: &ScoringContext) -> ScoredCandidate {
        let mut total = 0u32;
        let mut reasons = Vec::new();
        for scorer in &self.scorers {
            let score = scorer.score(game, context);
            total += score.points;
            if !score.reason.is_empty() {
                reasons.push(score.reason);
            }
        }
        ScoredCandidate {
            game: game.clone(),
            total,
            reasons,
        }
    }

    /// Produce one recommendation from the candidate catalog.
    ///
    /// Returns `None` only for an empty catalog. `context == None` takes the
    /// documented random branch; everything else is deterministic for fixed
    /// inputs.
    pub fn recommend(
        &self,
        catalog: &[Game],
        context: Option<&ScoringContext>,
        refresh_index: usize,
    ) -> Option<Recommendation> {
        if catalog.is_empty() {
            return None;
        }

        let Some(context) = context else {
            return Some(self.pick_general(catalog));
        };

        let mut ranked: Vec<ScoredCandidate> = catalog
            .iter()
            .map(|game| self.score_candidate(game, context))
            .collect();
        // Stable sort: ties preserve original catalog order.
        ranked.sort_by(|a, b| b.total.cmp(&a.total));

        let selected = &ranked[refresh_index.min(ranked.len() - 1)];
        debug!(
            title = %selected.game.title,
            score = selected.total,
            refresh_index,
            "selected ranked candidate"
        );

        if selected.total == 0 {
            // No signal matched anything; hand back a rotating catalog pick
            // rather than a meaningless zero-score "winner".
            let fallback = &catalog[refresh_index % catalog.len()];
            return Some(Recommendation {
                game: fallback.clone(),
                explanation: ZERO_SCORE_FALLBACK_EXPLANATION.to_string(),
                score: FALLBACK_SCORE,
            });
        }

        let explanation = if selected.reasons.is_empty() {
            GENERIC_EXPLANATION.to_string()
        } else {
            selected.reasons[..selected.reasons.len().min(MAX_REASONS)].join(REASON_SEPARATOR)
        };

        Some(Recommendation {
            game: selected.game.clone(),
            explanation,
            score: selected.total,
        })
    }

    /// Uniformly random pick among the head of the catalog, used when no
    /// persona/context is available.
    fn pick_general(&self, catalog: &[Game]) -> Recommendation {
        let pool = catalog.len().min(RANDOM_POOL_SIZE);
        let index = rand::rng().random_range(0..pool);
        Recommendation {
            game: catalog[index].clone(),
            explanation: GENERAL_TRENDS_EXPLANATION.to_string(),
            score: FALLBACK_SCORE,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{PlayerSignals, SessionLength};

    fn rpg_context() -> ScoringContext {
        let mut signals = PlayerSignals::default();
        signals.playtime_by_genre.insert("rpg".to_string(), 10.0);
        ScoringContext::new(signals)
    }

    fn catalog_pair() -> Vec<Game> {
        vec![
            Game::new("c1", "Strategy Pick", vec!["Strategy"]),
            Game::new("c2", "RPG Pick", vec!["RPG"]),
        ]
    }

    #[test]
    fn test_total_is_exact_sum_of_scorers() {
        let context = rpg_context();
        let game = Game::new("g", "G", vec!["RPG"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Flexible);

        let recommender = Recommender::standard();
        let scored = recommender.score_candidate(&game, &context);
        // genre 10 (>5h) + difficulty 15 (Normal == Normal) + flexible 5
        assert_eq!(scored.total, 30);
        assert_eq!(scored.reasons.len(), 3);
    }

    #[test]
    fn test_genre_signal_ranks_rpg_first() {
        let recommender = Recommender::standard();
        let rec = recommender
            .recommend(&catalog_pair(), Some(&rpg_context()), 0)
            .expect("non-empty catalog");
        assert_eq!(rec.game.id, "c2");
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let recommender = Recommender::standard();
        let context = rpg_context();
        let first = recommender.recommend(&catalog_pair(), Some(&context), 0).unwrap();
        for _ in 0..10 {
            let again = recommender.recommend(&catalog_pair(), Some(&context), 0).unwrap();
            assert_eq!(again.game.id, first.game.id);
            assert_eq!(again.score, first.score);
            assert_eq!(again.explanation, first.explanation);
        }
    }

    #[test]
    fn test_refresh_walks_ranked_list_without_repeats() {
        let mut signals = PlayerSignals::default();
        signals.playtime_by_genre.insert("rpg".to_string(), 60.0);
        signals.playtime_by_genre.insert("action".to_string(), 25.0);
        signals.playtime_by_genre.insert("puzzle".to_string(), 8.0);
        let context = ScoringContext::new(signals);

        let catalog = vec![
            Game::new("c1", "Puzzler", vec!["Puzzle"]),
            Game::new("c2", "Action Game", vec!["Action"]),
            Game::new("c3", "Big RPG", vec!["RPG"]),
        ];

        let recommender = Recommender::standard();
        let mut seen = Vec::new();
        let mut last_score = u32::MAX;
        for refresh_index in 0..catalog.len() {
            let rec = recommender
                .recommend(&catalog, Some(&context), refresh_index)
                .unwrap();
            assert!(rec.score <= last_score, "scores must be non-increasing");
            assert!(!seen.contains(&rec.game.id), "no candidate repeats");
            last_score = rec.score;
            seen.push(rec.game.id);
        }
    }

    #[test]
    fn test_refresh_index_clamps_to_last_entry() {
        let recommender = Recommender::standard();
        let rec = recommender
            .recommend(&catalog_pair(), Some(&rpg_context()), 99)
            .unwrap();
        // Clamped to the lowest-ranked candidate, which scores zero here and
        // triggers the rotating fallback: 99 % 2 == 1.
        assert_eq!(rec.game.id, "c2");
        assert_eq!(rec.score, FALLBACK_SCORE);
    }

    #[test]
    fn test_zero_score_falls_back_to_rotating_catalog_pick() {
        let recommender = Recommender::standard();
        // Default signals score nothing against these bare candidates.
        let context = ScoringContext::new(PlayerSignals::default());
        let catalog = vec![
            Game::new("c1", "One", vec!["Unseen"]),
            Game::new("c2", "Two", vec!["Unseen"]),
            Game::new("c3", "Three", vec!["Unseen"]),
        ];

        for refresh_index in 0..5 {
            let rec = recommender.recommend(&catalog, Some(&context), refresh_index).unwrap();
            assert_eq!(rec.game.id, catalog[refresh_index % 3].id);
            assert_eq!(rec.score, FALLBACK_SCORE);
            assert_eq!(rec.explanation, "A popular pick you might enjoy");
        }
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let recommender = Recommender::standard();
        let mut signals = PlayerSignals::default();
        signals.playtime_by_genre.insert("rpg".to_string(), 10.0);
        let context = ScoringContext::new(signals);
        let catalog = vec![
            Game::new("c1", "First RPG", vec!["RPG"]),
            Game::new("c2", "Second RPG", vec!["RPG"]),
        ];
        let rec = recommender.recommend(&catalog, Some(&context), 0).unwrap();
        assert_eq!(rec.game.id, "c1");
    }

    #[test]
    fn test_explanation_joins_at_most_three_reasons() {
        let mut signals = PlayerSignals::default();
        signals.playtime_by_genre.insert("rpg".to_string(), 60.0);
        signals.sessions_per_week = 6.0;
        signals.avg_session_minutes = 100.0;
        let context = ScoringContext::new(signals)
            .with_archetype(catalog::Archetype::Specialist);

        // Fires genre, mood, archetype, difficulty, and session scorers.
        let game = Game::new("g", "Everything Game", vec!["RPG"])
            .with_mood_tags(vec!["energetic"])
            .with_playstyle_tags(vec!["achiever"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Medium);

        let recommender = Recommender::standard();
        let rec = recommender.recommend(&[game], Some(&context), 0).unwrap();
        assert_eq!(rec.explanation.matches(" • ").count(), 2);
    }

    #[test]
    fn test_no_context_picks_random_top_three() {
        let catalog = vec![
            Game::new("c1", "One", vec![]),
            Game::new("c2", "Two", vec![]),
            Game::new("c3", "Three", vec![]),
            Game::new("c4", "Four", vec![]),
        ];
        let recommender = Recommender::standard();
        for _ in 0..50 {
            let rec = recommender.recommend(&catalog, None, 0).unwrap();
            assert_ne!(rec.game.id, "c4", "pick must come from the first three");
            assert_eq!(rec.score, FALLBACK_SCORE);
            assert_eq!(rec.explanation, GENERAL_TRENDS_EXPLANATION);
        }
    }

    #[test]
    fn test_no_context_with_tiny_catalog() {
        let catalog = vec![Game::new("c1", "Only", vec![])];
        let rec = Recommender::standard().recommend(&catalog, None, 0).unwrap();
        assert_eq!(rec.game.id, "c1");
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let recommender = Recommender::standard();
        assert!(recommender.recommend(&[], Some(&rpg_context()), 0).is_none());
        assert!(recommender.recommend(&[], None, 0).is_none());
    }
}
