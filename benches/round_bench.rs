//! Benchmarks for tree construction and match simulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use leduc_sim::game::BettingTree;
use leduc_sim::sim::{run_match, MatchConfig};
use leduc_sim::strategy::GreedyStrategy;

fn tree_construction_benchmark(c: &mut Criterion) {
    c.bench_function("betting_tree_build", |b| {
        b.iter(|| BettingTree::new(black_box(0), black_box(1), black_box(2)))
    });
}

fn greedy_match_benchmark(c: &mut Criterion) {
    let config = MatchConfig {
        hands: 1000,
        seed: Some(42),
        ..Default::default()
    };
    c.bench_function("greedy_vs_greedy_1000_hands", |b| {
        b.iter(|| {
            run_match(
                Box::new(GreedyStrategy),
                Box::new(GreedyStrategy),
                black_box(&config),
            )
        })
    });
}

criterion_group!(benches, tree_construction_benchmark, greedy_match_benchmark);
criterion_main!(benches);
