//! Core trait for the scoring pipeline.

use catalog::{Archetype, Game, PlayerSignals};

/// Output of one scorer for one candidate.
///
/// `reason` is the empty string exactly when `points` is zero; non-empty
/// reasons are collected by the aggregator in scorer-evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalScore {
    pub points: u32,
    pub reason: String,
}

impl SignalScore {
    pub fn zero() -> Self {
        Self {
            points: 0,
            reason: String::new(),
        }
    }

    pub fn new(points: u32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: reason.into(),
        }
    }
}

/// Everything a scorer may consult about the player.
///
/// Owned by a single recommendation call; built fresh from the library each
/// time and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub signals: PlayerSignals,
    pub archetype: Option<Archetype>,
}

impl ScoringContext {
    pub fn new(signals: PlayerSignals) -> Self {
        Self {
            signals,
            archetype: None,
        }
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }
}

/// One independent scoring dimension.
///
/// Implementations are pure functions of the candidate and the context:
/// no I/O, no interior state, bounded non-negative output.
pub trait SignalScorer: Send + Sync {
    /// Name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Score one candidate against the player context.
    fn score(&self, game: &Game, context: &ScoringContext) -> SignalScore;
}
