//! Swap leg: an ordered sequence of periods valued as one product.

use std::sync::Arc;

use pricer_core::traits::{CashFlowEstimator, MonteCarloProduct, SimulationModel};
use pricer_core::types::{PathVector, PricingError};

use super::index::CouponIndex;
use super::notional::Notional;
use super::period::{Period, PeriodFlags};
use crate::instruments::InstrumentError;

/// A swap leg made of consecutive periods.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pricer_core::traits::MonteCarloProduct;
/// use pricer_models::instruments::rates::{ConstantNotional, FixedCoupon, PeriodFlags, SwapLeg};
/// use pricer_models::models::FlatRateModel;
///
/// let leg = SwapLeg::from_tenor(
///     &[0.0, 0.5, 1.0],
///     Arc::new(ConstantNotional::new(100.0)),
///     Arc::new(FixedCoupon::new(0.04)),
///     PeriodFlags::default(),
/// )
/// .unwrap();
///
/// let model = FlatRateModel::new(0.0, 1).unwrap();
/// let value = leg.present_value(0.0, &model).unwrap();
/// assert!((value.get(0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct SwapLeg {
    periods: Vec<Period>,
}

impl SwapLeg {
    /// Creates a leg from explicit periods.
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Builds one period per consecutive pair of `tenor` times.
    ///
    /// Each period fixes at its start, pays at its end and accrues
    /// `end - start`. `flags` apply to every period.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidSchedule`] if `tenor` has fewer than
    /// two points or is not strictly increasing.
    pub fn from_tenor(
        tenor: &[f64],
        notional: Arc<dyn Notional>,
        index: Arc<dyn CouponIndex>,
        flags: PeriodFlags,
    ) -> Result<Self, InstrumentError> {
        if tenor.len() < 2 {
            return Err(InstrumentError::InvalidSchedule {
                message: format!("tenor needs at least two points, got {}", tenor.len()),
            });
        }
        if tenor.windows(2).any(|w| w[1] <= w[0]) {
            return Err(InstrumentError::InvalidSchedule {
                message: "tenor times must be strictly increasing".to_string(),
            });
        }

        let periods = tenor
            .windows(2)
            .map(|w| {
                Period::builder()
                    .period_start(w[0])
                    .period_end(w[1])
                    .fixing_date(w[0])
                    .payment_date(w[1])
                    .notional(Arc::clone(&notional))
                    .index(Arc::clone(&index))
                    .flags(flags)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { periods })
    }

    /// The periods of the leg.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if the leg has no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Last payment date, or `None` for an empty leg.
    pub fn maturity(&self) -> Option<f64> {
        self.periods
            .iter()
            .map(Period::payment_date)
            .reduce(f64::max)
    }
}

impl MonteCarloProduct for SwapLeg {
    fn present_value(
        &self,
        evaluation_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        let mut values = PathVector::zero();
        for period in &self.periods {
            values = values.try_add(&period.present_value(evaluation_time, model)?)?;
        }
        Ok(values)
    }
}

impl CashFlowEstimator for SwapLeg {
    fn forward_cash_flow(
        &self,
        initial_time: f64,
        final_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        let mut values = PathVector::zero();
        for period in &self.periods {
            let flow = period.forward_cash_flow(initial_time, final_time, model)?;
            values = values.try_add(&flow)?;
        }
        Ok(values)
    }
}
