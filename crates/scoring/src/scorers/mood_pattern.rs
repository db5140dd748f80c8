//! Mood tags matched against the player's session patterns.
//!
//! Four independent bonuses, each tested in a fixed order and added when it
//! fires:
//! - "energetic" tag and more than 5 sessions per week -> 15
//! - "relaxed" tag and at most 3 sessions per week -> 15
//! - "focused" tag and average session above 90 minutes -> 10
//! - "social" tag and multiplayer ratio above 0.5 -> 10
//!
//! Maximum 50. The reason string is overwritten by whichever bonus fires
//! last in evaluation order even though the points are additive; this is
//! long-standing observable behavior that explanation text depends on, so
//! it is kept as is rather than collecting every fired reason.

use crate::traits::{ScoringContext, SignalScore, SignalScorer};
use catalog::Game;

fn has_tag(game: &Game, tag: &str) -> bool {
    game.mood_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

pub struct MoodPatternScorer;

impl SignalScorer for MoodPatternScorer {
    fn name(&self) -> &str {
        "MoodPatternScorer"
    }

    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore {
        let signals = &context.signals;
        let mut points = 0u32;
        let mut reason = String::new();

        if has_tag(game, "energetic") && signals.sessions_per_week > 5.0 {
            points += 15;
            reason = "Matches your frequent play sessions".to_string();
        }
        if has_tag(game, "relaxed") && signals.sessions_per_week <= 3.0 {
            points += 15;
            reason = "A laid-back fit for your occasional sessions".to_string();
        }
        if has_tag(game, "focused") && signals.avg_session_minutes > 90.0 {
            points += 10;
            reason = "Suits your long, focused sessions".to_string();
        }
        if has_tag(game, "social") && signals.multiplayer_ratio > 0.5 {
            points += 10;
            reason = "You mostly play with others".to_string();
        }

        SignalScore { points, reason }
    }
}
