//! Coupon indices.
//!
//! An index determines the rate a period's coupon pays. It can be queried in
//! two modes:
//!
//! - [`CouponIndex::fixing_value`]: the rate as fixed on the fixing date.
//! - [`CouponIndex::fixing_value_at`]: the rate as it appears from an
//!   evaluation time's vantage point, read off the simulated path rather
//!   than taken as a conditional expectation.
//!
//! The first mode feeds the present value of a period; the second feeds the
//! forward cash-flow estimator.

use std::fmt::Debug;

use pricer_core::traits::SimulationModel;
use pricer_core::types::{PathVector, PricingError};

use crate::instruments::InstrumentError;

/// Rate index used for coupon calculation.
pub trait CouponIndex: Debug + Send + Sync {
    /// Index value as fixed on `fixing_date`.
    fn fixing_value(
        &self,
        fixing_date: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;

    /// Index value for the fixing on `fixing_date` as observed on the path
    /// at `evaluation_time`.
    fn fixing_value_at(
        &self,
        evaluation_time: f64,
        fixing_date: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;
}

/// Forward rate index (LIBOR style) on the model's forward curve.
///
/// The accrual period of the rate fixed at `t` is
/// `[t + period_start_offset, t + period_start_offset + period_length]`.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::rates::{CouponIndex, ForwardRateIndex};
/// use pricer_models::models::FlatRateModel;
///
/// let index = ForwardRateIndex::new(0.0, 0.5).unwrap();
/// let model = FlatRateModel::new(0.0, 1).unwrap();
///
/// let rate = index.fixing_value(1.0, &model).unwrap();
/// assert_eq!(rate.get(0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForwardRateIndex {
    period_start_offset: f64,
    period_length: f64,
}

impl ForwardRateIndex {
    /// Creates a forward rate index.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidParameter`] if `period_length` is
    /// not positive or either argument is not finite.
    pub fn new(period_start_offset: f64, period_length: f64) -> Result<Self, InstrumentError> {
        if !period_start_offset.is_finite() || !period_length.is_finite() || period_length <= 0.0 {
            return Err(InstrumentError::InvalidParameter {
                message: format!(
                    "forward rate index needs a finite offset and positive length, got ({}, {})",
                    period_start_offset, period_length
                ),
            });
        }
        Ok(Self {
            period_start_offset,
            period_length,
        })
    }

    /// Offset from fixing to the start of the rate's accrual period.
    #[inline]
    pub fn period_start_offset(&self) -> f64 {
        self.period_start_offset
    }

    /// Length of the rate's accrual period.
    #[inline]
    pub fn period_length(&self) -> f64 {
        self.period_length
    }

    fn accrual_period(&self, fixing_date: f64) -> (f64, f64) {
        let start = fixing_date + self.period_start_offset;
        (start, start + self.period_length)
    }
}

impl CouponIndex for ForwardRateIndex {
    fn fixing_value(
        &self,
        fixing_date: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        let (start, end) = self.accrual_period(fixing_date);
        model.forward_rate(fixing_date, start, end)
    }

    fn fixing_value_at(
        &self,
        evaluation_time: f64,
        fixing_date: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        if evaluation_time >= fixing_date {
            // Already fixed: the realised value on the path.
            return self.fixing_value(fixing_date, model);
        }
        let (start, end) = self.accrual_period(fixing_date);
        model.forward_rate(evaluation_time, start, end)
    }
}

/// Fixed coupon rate.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::rates::{CouponIndex, FixedCoupon};
/// use pricer_models::models::FlatRateModel;
///
/// let coupon = FixedCoupon::new(0.03);
/// let model = FlatRateModel::new(0.01, 1).unwrap();
/// assert_eq!(coupon.fixing_value(2.0, &model).unwrap().get(0), 0.03);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedCoupon {
    rate: f64,
}

impl FixedCoupon {
    /// Creates a fixed coupon paying `rate`.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// The fixed rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl CouponIndex for FixedCoupon {
    fn fixing_value(
        &self,
        _fixing_date: f64,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(PathVector::constant(self.rate))
    }

    fn fixing_value_at(
        &self,
        _evaluation_time: f64,
        _fixing_date: f64,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(PathVector::constant(self.rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Forward rate equals the fixing time, so the query time is observable.
    struct FixingTimeModel;

    impl SimulationModel for FixingTimeModel {
        fn number_of_paths(&self) -> usize {
            1
        }

        fn numeraire(&self, _time: f64) -> Result<PathVector, PricingError> {
            Ok(PathVector::constant(1.0))
        }

        fn forward_rate(
            &self,
            fixing_time: f64,
            _period_start: f64,
            _period_end: f64,
        ) -> Result<PathVector, PricingError> {
            Ok(PathVector::constant(fixing_time))
        }
    }

    #[test]
    fn test_forward_index_rejects_non_positive_length() {
        assert!(ForwardRateIndex::new(0.0, 0.0).is_err());
        assert!(ForwardRateIndex::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_fixing_value_queries_at_fixing_date() {
        let index = ForwardRateIndex::new(0.0, 0.25).unwrap();
        assert_relative_eq!(index.fixing_value(1.5, &FixingTimeModel).unwrap().get(0), 1.5);
    }

    #[test]
    fn test_fixing_value_at_after_fixing_uses_realised_fixing() {
        let index = ForwardRateIndex::new(0.0, 0.25).unwrap();
        let value = index.fixing_value_at(3.0, 1.5, &FixingTimeModel).unwrap();
        assert_relative_eq!(value.get(0), 1.5);
    }

    #[test]
    fn test_fixing_value_at_before_fixing_uses_vantage_point() {
        let index = ForwardRateIndex::new(0.0, 0.25).unwrap();
        let value = index.fixing_value_at(0.5, 1.5, &FixingTimeModel).unwrap();
        assert_relative_eq!(value.get(0), 0.5);
    }

    #[test]
    fn test_modes_coincide_at_fixing_date() {
        let index = ForwardRateIndex::new(0.0, 0.25).unwrap();
        let fixed = index.fixing_value(1.0, &FixingTimeModel).unwrap();
        let observed = index.fixing_value_at(1.0, 1.0, &FixingTimeModel).unwrap();
        assert_eq!(fixed, observed);
    }

    #[test]
    fn test_fixed_coupon_is_constant() {
        let coupon = FixedCoupon::new(0.04);
        assert_eq!(coupon.rate(), 0.04);
        assert_eq!(coupon.fixing_value_at(0.0, 1.0, &FixingTimeModel).unwrap().get(0), 0.04);
    }
}
