//! Session-length class matched against the player's average session.
//!
//! Fixed thresholds on the player's average minutes: short is at most 60,
//! medium in (60, 120], long above 120. A matching class scores 10; the
//! flexible class always scores 5 regardless of minutes; a mismatch or a
//! missing class scores 0. Maximum 10.

use crate::traits::{ScoringContext, SignalScore, SignalScorer};
use catalog::{Game, SessionLength};

pub struct SessionLengthScorer;

impl SignalScorer for SessionLengthScorer {
    fn name(&self) -> &str {
        "SessionLengthScorer"
    }

    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore {
        let avg = context.signals.avg_session_minutes;
        match game.session_length {
            Some(SessionLength::Flexible) => SignalScore::new(5, "Fits any session length"),
            Some(SessionLength::Short) if avg <= 60.0 => {
                SignalScore::new(10, "Great for your shorter sessions")
            }
            Some(SessionLength::Medium) if avg > 60.0 && avg <= 120.0 => {
                SignalScore::new(10, "Matches your typical session length")
            }
            Some(SessionLength::Long) if avg > 120.0 => {
                SignalScore::new(10, "Made for your long sessions")
            }
            _ => SignalScore::zero(),
        }
    }
}
