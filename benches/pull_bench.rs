//! Benchmark for the pull iterator core.
//!
//! Measures a map/filter/fold pipeline against the equivalent std
//! iterator pipeline, and the overhead of lookahead and fusing.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazypull::maybe::Maybe;
use lazypull::pull::{Pull, from_seq, successors};
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline_fold");

    for size in [100, 1_000, 10_000] {
        let items: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("pull", size), &items, |bencher, items| {
            bencher.iter(|| {
                let total = from_seq(items.clone())
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .fold(0i64, |accumulator, item| accumulator + item);
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &items, |bencher, items| {
            bencher.iter(|| {
                let total: i64 = items
                    .clone()
                    .into_iter()
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Adapter Overhead Benchmarks
// =============================================================================

fn benchmark_lookahead(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookahead");

    group.bench_function("peek_then_next", |bencher| {
        bencher.iter(|| {
            let mut items = from_seq(0..1_000).peekable();
            let mut total = 0;
            loop {
                let ahead = items.peek().map(|value| *value);
                match items.next() {
                    Maybe::Present(item) => total += item + ahead.unwrap_or(0),
                    Maybe::Absent => break,
                }
            }
            black_box(total)
        });
    });

    group.bench_function("fused_drain", |bencher| {
        bencher.iter(|| {
            let total = from_seq(0..1_000)
                .fuse()
                .fold(0, |accumulator, item| accumulator + item);
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Source Benchmarks
// =============================================================================

fn benchmark_successors(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("successors");

    group.bench_function("unfold_take_1000", |bencher| {
        bencher.iter(|| {
            let total = successors(Maybe::present(1u64), |x| Maybe::present(x.wrapping_mul(3)))
                .take(1_000)
                .fold(0u64, |accumulator, item| accumulator.wrapping_add(item));
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_lookahead,
    benchmark_successors
);
criterion_main!(benches);
