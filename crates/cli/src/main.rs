use anyhow::{Context, Result};
use catalog::{Archetype, Game};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{ExternalGame, Persona, RecommendationService, StaticCatalogProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// play-next - game-library recommendation engine
#[derive(Parser)]
#[command(name = "play-next")]
#[command(about = "Mood classification and recommendations for a game library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a personalised pick from the built-in catalog
    Recommend {
        /// Path to the owned library (JSON list of games)
        #[arg(long)]
        library: Option<PathBuf>,

        /// Player archetype (specialist, socialite, casual, explorer)
        #[arg(long)]
        archetype: Option<String>,

        /// Refresh index: 0 is the top pick, higher values walk the ranking
        #[arg(long, default_value = "0")]
        refresh: usize,
    },

    /// Rank store candidates against the owned library
    Discover {
        /// Path to the owned library (JSON list of games)
        #[arg(long)]
        library: PathBuf,

        /// Path to the store listing (JSON list of external games)
        #[arg(long)]
        store: PathBuf,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show the mood bucket assigned to each library game
    Classify {
        /// Path to the owned library (JSON list of games)
        #[arg(long)]
        library: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            library,
            archetype,
            refresh,
        } => handle_recommend(library, archetype, refresh),
        Commands::Discover {
            library,
            store,
            limit,
        } => handle_discover(library, store, limit).await,
        Commands::Classify { library } => handle_classify(library),
    }
}

fn handle_recommend(
    library: Option<PathBuf>,
    archetype: Option<String>,
    refresh: usize,
) -> Result<()> {
    let archetype: Option<Archetype> = match archetype {
        Some(raw) => Some(raw.parse().map_err(anyhow::Error::msg)?),
        None => None,
    };
    let library = match library {
        Some(path) => Some(load_library(&path)?),
        None => None,
    };

    // No library and no archetype means no persona at all: the engine falls
    // back to its documented random pick from the catalog head.
    let persona = match (library, archetype) {
        (None, None) => None,
        (library, archetype) => Some(Persona {
            archetype,
            library: library.unwrap_or_default(),
            overrides: None,
        }),
    };

    let service = RecommendationService::new(Arc::new(StaticCatalogProvider::new(vec![])));
    let recommendation = service
        .personalised(persona.as_ref(), refresh)
        .context("catalog is empty")?;

    println!(
        "{} {}",
        "▶".green(),
        recommendation.game.title.bold()
    );
    println!("  {} {}", "score:".cyan(), recommendation.score);
    println!("  {} {}", "why:  ".cyan(), recommendation.explanation);
    Ok(())
}

async fn handle_discover(library: PathBuf, store: PathBuf, limit: usize) -> Result<()> {
    let owned = load_library(&library)?;
    let listing = load_store(&store)?;

    let provider = Arc::new(StaticCatalogProvider::new(listing));
    let service = RecommendationService::new(provider);
    let report = service.discover(&owned, limit).await;

    println!(
        "Searched genres: {}",
        report.genres_searched.join(", ").cyan()
    );
    println!(
        "Found {} unique candidates, {} already owned",
        report.total_found, report.excluded_owned
    );
    for (rank, game) in report.games.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            rank + 1,
            game.title.bold(),
            format!("({})", game.genres.join("/")).dimmed()
        );
    }
    if report.games.is_empty() {
        println!("{}", "No recommendations available.".yellow());
    }
    Ok(())
}

fn handle_classify(library: PathBuf) -> Result<()> {
    let owned = load_library(&library)?;
    for game in &owned {
        let mood = profile::classify(game)
            .map(|label| format!("{label:?}").to_lowercase())
            .unwrap_or_else(|| "unclassified".to_string());
        println!("{} {}", format!("[{mood}]").cyan(), game.title);
    }
    Ok(())
}

fn load_library(path: &Path) -> Result<Vec<Game>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read library file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse library file {}", path.display()))
}

fn load_store(path: &Path) -> Result<Vec<ExternalGame>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read store file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse store file {}", path.display()))
}
