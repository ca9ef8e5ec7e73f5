use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use klondike_engine::rules::legal_transfers;
use klondike_engine::{Board, Game, GameConfig, GameRng};

/// Games a few moves in, so the tableau has some variety.
fn corpus() -> Vec<Game> {
    (0..16u64)
        .map(|seed| {
            let mut game = Game::new(GameConfig::new().with_seed(seed)).unwrap();
            for _ in 0..10 {
                match game.hint() {
                    Some(mv) => game.apply(mv).unwrap(),
                    None => break,
                }
            }
            game
        })
        .collect()
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal/shuffled", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(Board::shuffled(&mut GameRng::new(seed)))
        })
    });
}

fn bench_moves(c: &mut Criterion) {
    let games = corpus();
    c.bench_function("moves/legal_transfers", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for game in &games {
                total += legal_transfers(game.board()).len();
            }
            black_box(total)
        })
    });
    c.bench_function("moves/status", |b| {
        b.iter(|| {
            for game in &games {
                black_box(game.status());
            }
        })
    });
    c.bench_function("moves/apply_hint", |b| {
        b.iter_batched(
            || games.clone(),
            |mut games| {
                for game in &mut games {
                    if let Some(mv) = game.hint() {
                        let _ = game.apply(mv);
                    }
                }
                games
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_deal, bench_moves);
criterion_main!(benches);
