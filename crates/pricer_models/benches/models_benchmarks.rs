//! Criterion benchmarks for period valuation.
//!
//! Measures present value and forward cash-flow estimation of a swap leg
//! against path counts on both sides of the parallel threshold.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::traits::{CashFlowEstimator, MonteCarloProduct};
use pricer_models::instruments::rates::{ConstantNotional, ForwardRateIndex, PeriodFlags, SwapLeg};
use pricer_models::models::FlatRateModel;

fn ten_year_semi_annual_leg() -> SwapLeg {
    let tenor: Vec<f64> = (0..=20).map(|i| i as f64 * 0.5).collect();
    SwapLeg::from_tenor(
        &tenor,
        Arc::new(ConstantNotional::new(1_000_000.0)),
        Arc::new(ForwardRateIndex::new(0.0, 0.5).unwrap()),
        PeriodFlags::default().with_notional_flow(true),
    )
    .unwrap()
}

/// Benchmark leg present value at t = 0.
fn bench_leg_present_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("leg_present_value");
    let leg = ten_year_semi_annual_leg();

    for paths in [1_000, 10_000, 100_000] {
        let model = FlatRateModel::new(0.02, paths).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(paths), &model, |b, model| {
            b.iter(|| leg.present_value(black_box(0.0), model).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the forward cash-flow estimator over one exposure step.
fn bench_leg_forward_cash_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("leg_forward_cash_flow");
    let leg = ten_year_semi_annual_leg();

    for paths in [1_000, 100_000] {
        let model = FlatRateModel::new(0.02, paths).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(paths), &model, |b, model| {
            b.iter(|| {
                leg.forward_cash_flow(black_box(2.0), black_box(2.5), model)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_leg_present_value, bench_leg_forward_cash_flow);
criterion_main!(benches);
