use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_draughts::game_state::game_state::GameState;
use plum_draughts::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    notation: &'static str,
    /// Hand-verified node counts for depths 1..=len; deeper benched depths
    /// run without a correctness guard.
    expected_nodes: &'static [u64],
    max_depth: u8,
}

const STARTPOS_NOTATION: &str =
    "1m1m1m1m/m1m1m1m1/1m1m1m1m/8/8/M1M1M1M1/1M1M1M1M/M1M1M1M1 l -";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        notation: STARTPOS_NOTATION,
        expected_nodes: &[7, 49],
        max_depth: 6,
    },
    BenchCase {
        name: "forced_double_jump",
        notation: "8/8/3m4/8/3m4/2M5/8/8 l -",
        expected_nodes: &[1],
        max_depth: 6,
    },
    BenchCase {
        name: "kings_endgame",
        notation: "1K6/8/8/4k3/8/2K5/8/8 d -",
        expected_nodes: &[4],
        max_depth: 6,
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_notation(case.notation).expect("benchmark notation should parse");

        // Correctness guard before benchmarking.
        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );
        }

        for depth in 1..=case.max_depth {
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(BenchmarkId::from_parameter(bench_name), &depth, |b, &depth| {
                b.iter(|| {
                    let counts = perft(black_box(&bench_game), black_box(depth))
                        .expect("perft benchmark run should succeed");
                    black_box(counts.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
