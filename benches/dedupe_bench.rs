//! Benchmark for order-preserving deduplication
//!
//! Compares the hashing `dedupe` against the equality-only `dedupe_by`
//! across input sizes and duplicate ratios.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use uniqmap::{dedupe, dedupe_by, Unique};

/// Deterministic input where roughly `len / distinct` copies of each value appear
fn create_input(len: usize, distinct: usize) -> Vec<i64> {
    (0..len)
        .map(|i| ((i * 7919) % distinct.max(1)) as i64)
        .collect()
}

fn bench_dedupe(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedupe");

    for &(len, distinct) in &[(1_000, 10), (1_000, 1_000), (100_000, 100), (100_000, 50_000)] {
        let input = create_input(len, distinct);
        let id = format!("{len}x{distinct}");

        group.bench_with_input(BenchmarkId::new("hash", &id), &input, |b, input| {
            b.iter(|| dedupe(black_box(input)))
        });

        group.bench_with_input(BenchmarkId::new("iter", &id), &input, |b, input| {
            b.iter(|| black_box(input).iter().copied().unique().collect::<Vec<_>>())
        });

        // Quadratic in the distinct count, so only the small cases
        if distinct <= 1_000 {
            group.bench_with_input(BenchmarkId::new("by_eq", &id), &input, |b, input| {
                b.iter(|| dedupe_by(black_box(input), |x, y| x == y))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_dedupe);
criterion_main!(benches);
