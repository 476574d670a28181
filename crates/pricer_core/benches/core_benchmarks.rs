//! Criterion benchmarks for pricer_core path vector arithmetic.
//!
//! Measures elementwise and fused operations across path counts on both
//! sides of the parallel threshold.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::PathVector;

fn generate_paths(n: usize) -> PathVector {
    PathVector::from_fn(n, |i| 1.0 + (i as f64).sin() * 0.01).unwrap()
}

/// Benchmark elementwise multiplication against a full and a degenerate vector.
fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_vector_mult");

    for size in [1_000, 10_000, 100_000] {
        let a = generate_paths(size);
        let b = generate_paths(size);
        let scalar = PathVector::constant(1.5);

        group.bench_with_input(BenchmarkId::new("full", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a) * black_box(*b));
        });

        group.bench_with_input(
            BenchmarkId::new("broadcast", size),
            &(&a, &scalar),
            |bench, (a, s)| {
                bench.iter(|| black_box(*a) * black_box(*s));
            },
        );
    }

    group.finish();
}

/// Benchmark the fused ratio against its composed equivalent.
fn bench_fused_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_vector_add_ratio");

    for size in [1_000, 100_000] {
        let base = generate_paths(size);
        let numerator = generate_paths(size);
        let denominator = generate_paths(size);

        group.bench_with_input(BenchmarkId::new("fused", size), &size, |bench, _| {
            bench.iter(|| black_box(&base).add_ratio(black_box(&numerator), black_box(&denominator)));
        });

        group.bench_with_input(BenchmarkId::new("composed", size), &size, |bench, _| {
            bench.iter(|| &base + &(black_box(&numerator) / black_box(&denominator)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_fused_ratio);
criterion_main!(benches);
