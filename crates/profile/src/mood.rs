//! Mood classification via an ordered rule table.
//!
//! Each rule pairs a [`MoodLabel`] with a disjunction of predicates: keyword
//! membership over the game's genre labels and mood tags, and substring
//! tests against a fixed list of well-known titles. Rules are evaluated top
//! to bottom and the first match wins; later rules are never consulted even
//! if they would also match. The table order is therefore an explicit,
//! testable artifact, not an accident of source order.
//!
//! No matching rule yields `None`, which callers must treat as
//! "unclassified" — never as an error, and never silently defaulted to a
//! specific mood (that would bias recommendations).

use catalog::{Game, MoodLabel};

/// One classification rule: a label plus the predicates that select it.
#[derive(Debug)]
pub struct MoodRule {
    pub label: MoodLabel,
    /// Lowercase keywords matched against genre labels and mood tags
    pub keywords: &'static [&'static str],
    /// Lowercase fragments matched as substrings of the title
    pub titles: &'static [&'static str],
}

/// The classification table, highest priority first.
///
/// Creative/sandbox outranks story, which outranks competitive, and so on
/// down to chill as the lowest-priority bucket.
pub const RULES: &[MoodRule] = &[
    MoodRule {
        label: MoodLabel::Creative,
        keywords: &["sandbox", "building", "city builder", "simulation", "crafting"],
        titles: &["minecraft", "terraria", "factorio", "cities: skylines", "the sims"],
    },
    MoodRule {
        label: MoodLabel::Story,
        keywords: &["story rich", "visual novel", "narrative", "adventure"],
        titles: &["the witcher", "disco elysium", "life is strange", "the last of us"],
    },
    MoodRule {
        label: MoodLabel::Competitive,
        keywords: &["moba", "battle royale", "fighting", "esports", "pvp"],
        titles: &["counter-strike", "dota", "league of legends", "valorant", "rocket league"],
    },
    MoodRule {
        label: MoodLabel::Social,
        keywords: &["party", "social deduction", "mmo", "co-op"],
        titles: &["among us", "fall guys", "jackbox"],
    },
    MoodRule {
        label: MoodLabel::Exploratory,
        keywords: &["open world", "exploration", "survival", "metroidvania"],
        titles: &["no man's sky", "subnautica", "zelda", "elden ring"],
    },
    MoodRule {
        label: MoodLabel::Focused,
        keywords: &["puzzle", "strategy", "roguelike", "turn-based", "tactics"],
        titles: &["baba is you", "into the breach", "slay the spire", "chess"],
    },
    MoodRule {
        label: MoodLabel::Energetic,
        keywords: &["action", "shooter", "racing", "platformer", "rhythm"],
        titles: &["doom", "celeste", "beat saber"],
    },
    MoodRule {
        label: MoodLabel::Chill,
        keywords: &["casual", "farming", "cozy", "relaxing", "idle"],
        titles: &["stardew valley", "animal crossing", "unpacking", "a short hike"],
    },
];

/// Classify a game into at most one mood bucket.
///
/// Deterministic and pure: genre labels and tags are compared lowercased,
/// titles by lowercased substring. Empty genre and tag lists simply fail
/// every membership test and fall through to the next rule.
pub fn classify(game: &Game) -> Option<MoodLabel> {
    let title = game.title.to_lowercase();
    let labels: Vec<String> = game
        .genres
        .iter()
        .chain(game.mood_tags.iter())
        .map(|s| s.to_lowercase())
        .collect();

    for rule in RULES {
        let keyword_hit = rule
            .keywords
            .iter()
            .any(|kw| labels.iter().any(|label| label.as_str() == *kw));
        let title_hit = rule.titles.iter().any(|t| title.contains(t));
        if keyword_hit || title_hit {
            return Some(rule.label);
        }
    }
    None
}
