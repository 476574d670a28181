//! Shared fixtures for pricer_models integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pricer_core::traits::SimulationModel;
use pricer_core::types::{PathVector, PricingError};
use pricer_models::instruments::rates::{ConstantNotional, ForwardRateIndex, Period, PeriodFlags};

/// Model with per-path data:
/// - `N_i(t) = 1 + growth_i * t`
/// - `L_i(fixing; S, T) = forward_i + drift * fixing`
pub struct PathwiseModel {
    pub forward: PathVector,
    pub growth: PathVector,
    pub drift: f64,
    pub horizon: f64,
}

impl PathwiseModel {
    pub fn new(forward: Vec<f64>, growth: Vec<f64>) -> Self {
        Self {
            forward: PathVector::from_vec(forward).unwrap(),
            growth: PathVector::from_vec(growth).unwrap(),
            drift: 0.0,
            horizon: f64::INFINITY,
        }
    }

    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    fn check(&self, time: f64) -> Result<(), PricingError> {
        if time > self.horizon {
            return Err(PricingError::model_query(time, "beyond horizon"));
        }
        Ok(())
    }
}

impl SimulationModel for PathwiseModel {
    fn number_of_paths(&self) -> usize {
        self.forward.len().max(self.growth.len())
    }

    fn numeraire(&self, time: f64) -> Result<PathVector, PricingError> {
        self.check(time)?;
        Ok(&self.growth * time + 1.0)
    }

    fn forward_rate(
        &self,
        fixing_time: f64,
        period_start: f64,
        period_end: f64,
    ) -> Result<PathVector, PricingError> {
        self.check(fixing_time)?;
        self.check(period_start)?;
        self.check(period_end)?;
        Ok(&self.forward + self.drift * fixing_time)
    }
}

/// The reference period: start 1.0, end 1.5, fixing 1.0, payment 1.5,
/// notional 1,000,000, dcf 0.5, six-month forward rate index.
pub fn reference_period(flags: PeriodFlags) -> Period {
    Period::builder()
        .period_start(1.0)
        .period_end(1.5)
        .fixing_date(1.0)
        .payment_date(1.5)
        .notional(Arc::new(ConstantNotional::new(1_000_000.0)))
        .index(Arc::new(ForwardRateIndex::new(0.0, 0.5).unwrap()))
        .day_count_fraction(0.5)
        .flags(flags)
        .build()
        .unwrap()
}

pub fn assert_paths_close(actual: &PathVector, expected: &[f64], tolerance: f64) {
    for (i, &e) in expected.iter().enumerate() {
        let a = actual.get(i);
        assert!(
            (a - e).abs() <= tolerance,
            "path {}: expected {}, got {}",
            i,
            e,
            a
        );
    }
}
