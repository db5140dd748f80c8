//! Challenge match on the fixed difficulty scale.
//!
//! Both the candidate's difficulty and the player's preferred difficulty
//! are ranked on [`catalog::DIFFICULTY_SCALE`]; a rank difference of 0
//! scores 15, a difference of 1 scores 8, anything wider scores 0. Unknown
//! labels rank -1, which produces a large difference and falls through to
//! zero without any special-casing. Maximum 15.

use crate::traits::{ScoringContext, SignalScore, SignalScorer};
use catalog::{Game, difficulty_rank};

pub struct DifficultyScorer;

impl SignalScorer for DifficultyScorer {
    fn name(&self) -> &str {
        "DifficultyScorer"
    }

    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore {
        let candidate_rank = difficulty_rank(game.difficulty.as_deref().unwrap_or(""));
        let preferred_rank = difficulty_rank(&context.signals.preferred_difficulty);

        match (candidate_rank - preferred_rank).abs() {
            0 => SignalScore::new(15, "Matches your preferred difficulty"),
            1 => SignalScore::new(8, "Close to your preferred difficulty"),
            _ => SignalScore::zero(),
        }
    }
}
