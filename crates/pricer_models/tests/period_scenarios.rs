//! Valuation scenarios for cash-flow periods and zero-coupon bonds.

mod common;

use std::sync::Arc;

use common::{assert_paths_close, reference_period, PathwiseModel};
use pricer_core::traits::{MonteCarloProduct, SimulationModel};
use pricer_core::types::{PathVector, PricingError};
use pricer_models::instruments::rates::{
    ConstantNotional, FixedCoupon, Period, PeriodFlags, ZeroCouponBond,
};
use pricer_models::models::FlatRateModel;

fn flat_three_percent() -> PathwiseModel {
    PathwiseModel::new(vec![0.03; 5], vec![0.0; 5])
}

#[test]
fn test_receiver_coupon_on_every_path() {
    let period = reference_period(PeriodFlags::default());
    let value = period.present_value(0.0, &flat_three_percent()).unwrap();

    assert_eq!(value.len(), 5);
    assert_paths_close(&value, &[15_000.0; 5], 1e-9);
}

#[test]
fn test_payer_with_notional_exchange_on_every_path() {
    let flags = PeriodFlags::default()
        .with_notional_flow(true)
        .with_payer(true);
    let period = reference_period(flags);
    let value = period.present_value(0.0, &flat_three_percent()).unwrap();

    assert_paths_close(&value, &[-15_000.0; 5], 1e-6);
}

#[test]
fn test_zero_at_or_after_payment_date() {
    let period = reference_period(PeriodFlags::default().with_notional_flow(true));
    let model = flat_three_percent();
    for t in [1.5, 1.75, 10.0] {
        assert_eq!(period.present_value(t, &model).unwrap(), PathVector::zero());
    }
}

#[test]
fn test_no_flows_is_identically_zero() {
    let flags = PeriodFlags::default().with_coupon_flow(false);
    let period = reference_period(flags);
    let model = PathwiseModel::new(vec![0.01, 0.02, 0.05], vec![0.01, 0.03, 0.02]);
    for t in [0.0, 0.5, 1.0, 1.25, 1.49] {
        let value = period.present_value(t, &model).unwrap();
        assert!(value.iter().all(|&v| v == 0.0), "non-zero value at t = {}", t);
    }
}

#[test]
fn test_accrual_exclusion_boundaries() {
    let period = reference_period(PeriodFlags::default().with_exclude_accrued_interest(true));
    let model = flat_three_percent();

    // Full coupon at the period start
    let at_start = period.present_value(1.0, &model).unwrap();
    assert_paths_close(&at_start, &[15_000.0; 5], 1e-9);

    // Half accrued halfway through
    let halfway = period.present_value(1.25, &model).unwrap();
    assert_paths_close(&halfway, &[7_500.0; 5], 1e-9);
}

#[test]
fn test_accrual_exclusion_lifts_at_period_end_with_later_payment() {
    let period = Period::builder()
        .period_start(1.0)
        .period_end(1.5)
        .payment_date(1.6)
        .notional(Arc::new(ConstantNotional::new(1_000_000.0)))
        .index(Arc::new(FixedCoupon::new(0.03)))
        .exclude_accrued_interest(true)
        .build()
        .unwrap();
    let model = flat_three_percent();

    // Accrual is complete once the period has ended; the unpaid coupon is
    // valued in full until payment.
    let at_end = period.present_value(1.5, &model).unwrap();
    assert_paths_close(&at_end, &[15_000.0; 5], 1e-9);

    let just_before_end = period.present_value(1.5 - 1e-9, &model).unwrap();
    assert_paths_close(&just_before_end, &[0.0; 5], 1e-3);
}

#[test]
fn test_pathwise_discounting_and_rebasing() {
    let model = PathwiseModel::new(vec![0.02, 0.04], vec![0.1, 0.2]);
    let period = reference_period(PeriodFlags::default());

    // coupon_i * N / N_i(1.5) * N_i(0.5)
    let value = period.present_value(0.5, &model).unwrap();
    let expected: Vec<f64> = [(0.02, 0.1), (0.04, 0.2)]
        .iter()
        .map(|&(l, g)| l * 0.5 * 1_000_000.0 / (1.0 + 1.5 * g) * (1.0 + 0.5 * g))
        .collect();
    assert_paths_close(&value, &expected, 1e-8);
}

#[test]
fn test_model_query_failure_propagates() {
    let model = flat_three_percent().with_horizon(1.2);
    let period = reference_period(PeriodFlags::default());

    let err = period.present_value(0.0, &model).unwrap_err();
    assert!(matches!(err, PricingError::ModelQuery { .. }));
}

#[test]
fn test_zero_coupon_bond_unit_payoff_at_maturity() {
    let model = PathwiseModel::new(vec![0.01, 0.05, -0.002], vec![0.0; 3]);
    let bond = ZeroCouponBond::new(3.0);

    let at_maturity = bond.present_value(3.0, &model).unwrap();
    assert_paths_close(&at_maturity, &[1.0; 3], 1e-15);

    let after = bond.present_value(3.5, &model).unwrap();
    assert_eq!(after, PathVector::zero());
}

#[test]
fn test_zero_coupon_bond_price_under_flat_model() {
    let model = FlatRateModel::new(0.025, 16).unwrap();
    let bond = ZeroCouponBond::new(4.0);

    let price = bond.price(&model).unwrap();
    assert!((price - (-0.1_f64).exp()).abs() < 1e-12);
    assert_eq!(model.number_of_paths(), 16);
}
