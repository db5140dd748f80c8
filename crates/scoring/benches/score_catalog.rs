//! Benchmarks for catalog scoring.
//!
//! Run with: cargo bench --package scoring

use catalog::{Game, PlayerSignals, SessionLength};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scoring::{Recommender, ScoringContext};

fn synthetic_catalog(size: usize) -> Vec<Game> {
    let genres = ["RPG", "Action", "Strategy", "Puzzle", "Shooter"];
    (0..size)
        .map(|i| {
            Game::new(format!("g{i}"), format!("Game {i}"), vec![genres[i % genres.len()]])
                .with_difficulty(if i % 2 == 0 { "Normal" } else { "Hard" })
                .with_session_length(if i % 3 == 0 {
                    SessionLength::Short
                } else {
                    SessionLength::Medium
                })
        })
        .collect()
}

fn bench_context() -> ScoringContext {
    let mut signals = PlayerSignals::default();
    signals.playtime_by_genre.insert("rpg".to_string(), 60.0);
    signals.playtime_by_genre.insert("action".to_string(), 25.0);
    signals.playtime_by_genre.insert("puzzle".to_string(), 8.0);
    signals.avg_session_minutes = 90.0;
    ScoringContext::new(signals)
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::standard();
    let catalog = synthetic_catalog(1000);
    let context = bench_context();

    c.bench_function("recommend_1000_candidates", |b| {
        b.iter(|| {
            let rec = recommender.recommend(black_box(&catalog), Some(&context), black_box(0));
            black_box(rec)
        })
    });
}

fn bench_score_candidate(c: &mut Criterion) {
    let recommender = Recommender::standard();
    let game = synthetic_catalog(1).pop().unwrap();
    let context = bench_context();

    c.bench_function("score_single_candidate", |b| {
        b.iter(|| {
            let scored = recommender.score_candidate(black_box(&game), &context);
            black_box(scored)
        })
    });
}

criterion_group!(benches, bench_recommend, bench_score_candidate);
criterion_main!(benches);
