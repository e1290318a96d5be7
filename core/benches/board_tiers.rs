use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use miner_core::{Board, DifficultyPreset, GameConfig, Miner, Placement, SizePreset};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in SizePreset::ALL {
        for difficulty in DifficultyPreset::ALL {
            let config = GameConfig::from_presets(size, difficulty);
            for placement in [Placement::Rejection, Placement::Shuffle] {
                let id = BenchmarkId::new(format!("{placement:?}"), format!("{size}-{difficulty}"));
                group.bench_with_input(id, &config, |b, config| {
                    let mut seed = 0u64;
                    b.iter(|| {
                        seed = seed.wrapping_add(1);
                        Board::build(config.size(), config.bomb_count(), seed, placement).unwrap()
                    })
                });
            }
        }
    }
    group.finish();
}

fn bench_dense_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense");
    for difficulty in [50, 90, 99] {
        let config = GameConfig::new(20, difficulty).unwrap();
        for placement in [Placement::Rejection, Placement::Shuffle] {
            let id = BenchmarkId::new(format!("{placement:?}"), difficulty);
            group.bench_with_input(id, &config, |b, config| {
                b.iter(|| Board::build(config.size(), config.bomb_count(), 7, placement).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [20u8, 100, 255] {
        let board = Board::from_mine_coords(size, &[]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| {
                let mut miner = Miner::from_board(board.clone());
                black_box(miner.reveal(0, 0).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_dense_rejection, bench_flood_fill);
criterion_main!(benches);
