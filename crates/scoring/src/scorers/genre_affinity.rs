//! Genre-affinity scoring against cumulative playtime.
//!
//! Awards tiered points per candidate genre: 30 for more than 50 hours of
//! playtime in that genre, 20 for more than 20, 10 for more than 5. Points
//! accumulate across every matching genre of the candidate — a game whose
//! genres each clear a threshold earns proportionally more — while the
//! reason string names only the single best-matching genre. The per-genre
//! maximum is 30.

use crate::traits::{ScoringContext, SignalScore, SignalScorer};
use catalog::Game;

const TIER_HIGH_HOURS: f32 = 50.0;
const TIER_MID_HOURS: f32 = 20.0;
const TIER_LOW_HOURS: f32 = 5.0;

fn tier_points(hours: f32) -> u32 {
    if hours > TIER_HIGH_HOURS {
        30
    } else if hours > TIER_MID_HOURS {
        20
    } else if hours > TIER_LOW_HOURS {
        10
    } else {
        0
    }
}

pub struct GenreAffinityScorer;

impl SignalScorer for GenreAffinityScorer {
    fn name(&self) -> &str {
        "GenreAffinityScorer"
    }

    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore {
        let mut points = 0u32;
        let mut best: Option<(&str, f32)> = None;

        for genre in &game.genres {
            let hours = context
                .signals
                .playtime_by_genre
                .get(&genre.to_lowercase())
                .copied()
                .unwrap_or(0.0);
            let tier = tier_points(hours);
            if tier == 0 {
                continue;
            }
            points += tier;
            match best {
                Some((_, best_hours)) if best_hours >= hours => {}
                _ => best = Some((genre.as_str(), hours)),
            }
        }

        match best {
            Some((genre, hours)) => SignalScore::new(
                points,
                format!("You've played {hours:.0}h of {genre} games"),
            ),
            None => SignalScore::zero(),
        }
    }
}
