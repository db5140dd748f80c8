//! Derivation of [`PlayerSignals`] from an owned library.
//!
//! The snapshot is rebuilt on every recommendation request; nothing here is
//! cached or persisted. The library only records playtime per game, so
//! session-pattern fields are estimated from session-length classes and can
//! be replaced wholesale via [`SignalOverrides`] — an explicit override
//! always wins over a derived value.

use catalog::{Game, PlayerSignals, SessionLength, SignalOverrides};
use std::collections::HashMap;
use tracing::debug;

/// Midpoint minutes assumed for each session-length class when estimating
/// the player's average session.
fn class_midpoint_minutes(class: SessionLength) -> f32 {
    match class {
        SessionLength::Short => 45.0,
        SessionLength::Medium => 90.0,
        SessionLength::Long => 150.0,
        SessionLength::Flexible => 75.0,
    }
}

/// Derive the per-request signal snapshot for an owned library.
pub fn derive_signals(owned: &[Game], overrides: Option<&SignalOverrides>) -> PlayerSignals {
    let mut signals = PlayerSignals::default();

    // Playtime per genre, in hours, keyed by lowercased label.
    for game in owned {
        let hours = game.playtime_hours();
        if hours <= 0.0 {
            continue;
        }
        for genre in &game.genres {
            *signals
                .playtime_by_genre
                .entry(genre.to_lowercase())
                .or_insert(0.0) += hours;
        }
    }

    // Average session estimated from the class midpoints of played games.
    let midpoints: Vec<f32> = owned
        .iter()
        .filter(|g| g.playtime_minutes > 0)
        .filter_map(|g| g.session_length.map(class_midpoint_minutes))
        .collect();
    if !midpoints.is_empty() {
        signals.avg_session_minutes = midpoints.iter().sum::<f32>() / midpoints.len() as f32;
    }

    if !owned.is_empty() {
        let multiplayer = owned.iter().filter(|g| g.multiplayer).count();
        signals.multiplayer_ratio = multiplayer as f32 / owned.len() as f32;
    }

    // Preferred difficulty: label with the most cumulative playtime behind it.
    let mut by_difficulty: HashMap<&str, u64> = HashMap::new();
    for game in owned {
        if let Some(difficulty) = &game.difficulty {
            *by_difficulty.entry(difficulty.as_str()).or_insert(0) += game.playtime_minutes;
        }
    }
    if let Some((label, minutes)) = by_difficulty
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(a.0)))
    {
        if minutes > 0 {
            signals.preferred_difficulty = label.to_string();
        }
    }

    if let Some(explicit) = overrides {
        apply_overrides(&mut signals, explicit);
    }

    debug!(
        genres = signals.playtime_by_genre.len(),
        avg_session = signals.avg_session_minutes,
        preferred_difficulty = %signals.preferred_difficulty,
        "derived player signals"
    );
    signals
}

fn apply_overrides(signals: &mut PlayerSignals, explicit: &SignalOverrides) {
    if let Some(v) = explicit.avg_session_minutes {
        signals.avg_session_minutes = v;
    }
    if let Some(v) = explicit.sessions_per_week {
        signals.sessions_per_week = v;
    }
    if let Some(v) = &explicit.preferred_difficulty {
        signals.preferred_difficulty = v.clone();
    }
    if let Some(v) = explicit.multiplayer_ratio {
        signals.multiplayer_ratio = v;
    }
    if let Some(v) = explicit.late_night_ratio {
        signals.late_night_ratio = v;
    }
    if let Some(v) = explicit.completion_rate {
        signals.completion_rate = v;
    }
}
