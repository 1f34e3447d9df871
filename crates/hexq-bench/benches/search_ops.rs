//! Criterion benchmarks for the backtracking search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hexq_bench::{geometry, greedy_state, EXHAUSTIVE_SIZE, LARGE_SIZE, REFERENCE_SIZE};
use hexq_core::{CaptureSet, CellIndex};
use hexq_engine::Solver;

/// Benchmark: first solution on the size-4 board.
fn bench_solve_reference(c: &mut Criterion) {
    let g = geometry(REFERENCE_SIZE);

    c.bench_function("solve_size_4", |b| {
        b.iter(|| black_box(Solver::new(&g).run()));
    });
}

/// Benchmark: exhaust the size-5 search space.
fn bench_exhaust(c: &mut Criterion) {
    let g = geometry(EXHAUSTIVE_SIZE);
    let mut group = c.benchmark_group("exhaust");
    group.sample_size(20);
    group.bench_function("size_5", |b| {
        b.iter(|| black_box(Solver::new(&g).run()));
    });
    group.finish();
}

/// Benchmark: clone a full board state, the per-node cost of copy-on-push.
fn bench_state_clone(c: &mut Criterion) {
    let g = geometry(LARGE_SIZE);
    let state = greedy_state(&g);

    c.bench_function("state_clone_16", |b| {
        b.iter(|| black_box(state.clone()));
    });
}

/// Benchmark: cursor scan over a mostly-captured 721-cell bitmap.
fn bench_next_vacant(c: &mut Criterion) {
    let mut set = CaptureSet::with_capacity(721);
    for i in (0..721u32).filter(|i| i % 97 != 0) {
        set.insert(CellIndex(i));
    }

    c.bench_function("next_vacant_721", |b| {
        b.iter(|| {
            let mut from = 0;
            while let Some(cell) = set.next_vacant(black_box(from)) {
                from = cell.as_usize() + 1;
            }
            black_box(from)
        });
    });
}

criterion_group!(
    benches,
    bench_solve_reference,
    bench_exhaust,
    bench_state_clone,
    bench_next_vacant
);
criterion_main!(benches);
