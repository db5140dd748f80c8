//! Archetype bonus from a fixed (archetype, playstyle tag) table.
//!
//! Specialist + "achiever" -> 20, Socialite + "social" -> 20,
//! Casual + "casual" -> 15. Anything else, including a missing archetype,
//! scores zero. Maximum 20.

use crate::traits::{ScoringContext, SignalScore, SignalScorer};
use catalog::{Archetype, Game};

/// The (archetype, playstyle tag, points) bonus table.
const BONUS_TABLE: [(Archetype, &str, u32); 3] = [
    (Archetype::Specialist, "achiever", 20),
    (Archetype::Socialite, "social", 20),
    (Archetype::Casual, "casual", 15),
];

pub struct ArchetypeScorer;

impl SignalScorer for ArchetypeScorer {
    fn name(&self) -> &str {
        "ArchetypeScorer"
    }

    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore {
        let Some(archetype) = context.archetype else {
            return SignalScore::zero();
        };

        for (entry_archetype, tag, points) in BONUS_TABLE {
            if entry_archetype == archetype
                && game.playstyle_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            {
                return SignalScore::new(points, format!("Fits your {archetype:?} playstyle"));
            }
        }
        SignalScore::zero()
    }
}
