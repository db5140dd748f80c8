//! The fixed fallback catalog.
//!
//! Roughly ten well-known games used when no library or persona signal is
//! available. Returned as an owned value so callers inject it as
//! configuration; the engine holds no global catalog state.

use crate::types::{Game, SessionLength};

/// Build the built-in fallback catalog.
pub fn builtin_catalog() -> Vec<Game> {
    vec![
        Game::new("builtin-minecraft", "Minecraft", vec!["Sandbox", "Survival"])
            .with_mood_tags(vec!["relaxed"])
            .with_difficulty("Relaxed")
            .with_session_length(SessionLength::Flexible)
            .with_multiplayer(true),
        Game::new("builtin-witcher3", "The Witcher 3: Wild Hunt", vec!["RPG", "Open World"])
            .with_mood_tags(vec!["focused"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Long),
        Game::new("builtin-stardew", "Stardew Valley", vec!["Farming", "Casual"])
            .with_mood_tags(vec!["relaxed"])
            .with_playstyle_tags(vec!["casual"])
            .with_difficulty("Relaxed")
            .with_session_length(SessionLength::Flexible)
            .with_multiplayer(true),
        Game::new("builtin-rocketleague", "Rocket League", vec!["Sports", "Racing"])
            .with_mood_tags(vec!["energetic", "social"])
            .with_playstyle_tags(vec!["social"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Short)
            .with_multiplayer(true),
        Game::new("builtin-hades", "Hades", vec!["Roguelike", "Action"])
            .with_mood_tags(vec!["energetic", "focused"])
            .with_playstyle_tags(vec!["achiever"])
            .with_difficulty("Hard")
            .with_session_length(SessionLength::Medium),
        Game::new("builtin-civ6", "Sid Meier's Civilization VI", vec!["Strategy", "Turn-Based"])
            .with_mood_tags(vec!["focused"])
            .with_playstyle_tags(vec!["achiever"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Long)
            .with_multiplayer(true),
        Game::new("builtin-amongus", "Among Us", vec!["Party", "Social Deduction"])
            .with_mood_tags(vec!["social"])
            .with_playstyle_tags(vec!["social", "casual"])
            .with_difficulty("Relaxed")
            .with_session_length(SessionLength::Short)
            .with_multiplayer(true),
        Game::new("builtin-darksouls3", "Dark Souls III", vec!["Action RPG", "Souls-like"])
            .with_mood_tags(vec!["focused"])
            .with_playstyle_tags(vec!["achiever"])
            .with_difficulty("Brutal")
            .with_session_length(SessionLength::Long),
        Game::new("builtin-nms", "No Man's Sky", vec!["Exploration", "Survival"])
            .with_mood_tags(vec!["relaxed"])
            .with_difficulty("Normal")
            .with_session_length(SessionLength::Flexible)
            .with_multiplayer(true),
        Game::new("builtin-celeste", "Celeste", vec!["Platformer", "Indie"])
            .with_mood_tags(vec!["energetic", "focused"])
            .with_playstyle_tags(vec!["achiever"])
            .with_difficulty("Hard")
            .with_session_length(SessionLength::Short),
    ]
}
