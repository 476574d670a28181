//! Cash-flow period: a single coupon and notional exchange generator.
//!
//! A [`Period`] combines a notional, a coupon index, period/fixing/payment
//! dates and flow flags. It is valued in two independent ways:
//!
//! - [`MonteCarloProduct::present_value`]: the pathwise value of the flows
//!   after an evaluation time, rebased with the numeraire at that time. The
//!   coupon uses the index value as fixed on the fixing date.
//! - [`CashFlowEstimator::forward_cash_flow`]: the American Monte Carlo
//!   estimator of the value known at an initial time, built from the flows
//!   realised up to a final time and rebased with the numeraire at the
//!   initial time. The coupon is read off the path at the final time.
//!
//! All dates are year fractions from a common origin.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pricer_core::traits::MonteCarloProduct;
//! use pricer_models::instruments::rates::{ConstantNotional, FixedCoupon, Period};
//! use pricer_models::models::FlatRateModel;
//!
//! let period = Period::builder()
//!     .period_start(1.0)
//!     .period_end(1.5)
//!     .fixing_date(1.0)
//!     .payment_date(1.5)
//!     .notional(Arc::new(ConstantNotional::new(1_000_000.0)))
//!     .index(Arc::new(FixedCoupon::new(0.03)))
//!     .day_count_fraction(0.5)
//!     .build()
//!     .unwrap();
//!
//! let model = FlatRateModel::new(0.0, 1).unwrap();
//! let value = period.present_value(0.0, &model).unwrap();
//! assert!((value.get(0) - 15_000.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::sync::Arc;

use pricer_core::traits::{CashFlowEstimator, MonteCarloProduct, SimulationModel};
use pricer_core::types::{PathVector, PricingError};
use tracing::{debug, trace};

use super::index::CouponIndex;
use super::notional::Notional;
use crate::instruments::InstrumentError;

/// Flow flags of a period.
///
/// The default is a receiver period paying the coupon only, valued dirty
/// (accrued interest included).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodFlags {
    /// Pay the coupon.
    pub coupon_flow: bool,
    /// Exchange notional: outflow at period start, inflow at period end.
    pub notional_flow: bool,
    /// Pay away all flows (negative sign).
    pub payer: bool,
    /// Exclude accrued interest from the coupon (clean valuation).
    pub exclude_accrued_interest: bool,
}

impl Default for PeriodFlags {
    fn default() -> Self {
        Self {
            coupon_flow: true,
            notional_flow: false,
            payer: false,
            exclude_accrued_interest: false,
        }
    }
}

impl PeriodFlags {
    /// Sets the coupon flow flag.
    pub fn with_coupon_flow(mut self, coupon_flow: bool) -> Self {
        self.coupon_flow = coupon_flow;
        self
    }

    /// Sets the notional exchange flag.
    pub fn with_notional_flow(mut self, notional_flow: bool) -> Self {
        self.notional_flow = notional_flow;
        self
    }

    /// Sets the payer flag.
    pub fn with_payer(mut self, payer: bool) -> Self {
        self.payer = payer;
        self
    }

    /// Sets the accrued interest exclusion flag.
    pub fn with_exclude_accrued_interest(mut self, exclude: bool) -> Self {
        self.exclude_accrued_interest = exclude;
        self
    }
}

/// A single cash-flow period.
///
/// Construct with [`Period::builder`]. Immutable once built; the notional
/// and index are shared by reference.
#[derive(Clone, Debug)]
pub struct Period {
    period_start: f64,
    period_end: f64,
    fixing_date: f64,
    payment_date: f64,
    notional: Arc<dyn Notional>,
    index: Arc<dyn CouponIndex>,
    day_count_fraction: f64,
    flags: PeriodFlags,
}

impl Period {
    /// Creates a new period builder.
    #[inline]
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    /// Start of the accrual period.
    #[inline]
    pub fn period_start(&self) -> f64 {
        self.period_start
    }

    /// End of the accrual period.
    #[inline]
    pub fn period_end(&self) -> f64 {
        self.period_end
    }

    /// Fixing date of the coupon index.
    #[inline]
    pub fn fixing_date(&self) -> f64 {
        self.fixing_date
    }

    /// Payment date of the coupon.
    #[inline]
    pub fn payment_date(&self) -> f64 {
        self.payment_date
    }

    /// Day count fraction applied to the index value.
    #[inline]
    pub fn day_count_fraction(&self) -> f64 {
        self.day_count_fraction
    }

    /// The shared notional.
    #[inline]
    pub fn notional(&self) -> &Arc<dyn Notional> {
        &self.notional
    }

    /// The shared coupon index.
    #[inline]
    pub fn index(&self) -> &Arc<dyn CouponIndex> {
        &self.index
    }

    /// Flow flags.
    #[inline]
    pub fn flags(&self) -> PeriodFlags {
        self.flags
    }

    /// Coupon rate times day count fraction, with the index as fixed on the
    /// fixing date. Not multiplied by the notional, not discounted.
    pub fn coupon(&self, model: &dyn SimulationModel) -> Result<PathVector, PricingError> {
        Ok(self.index.fixing_value(self.fixing_date, model)? * self.day_count_fraction)
    }

    /// Coupon rate times day count fraction, with the index as observed on
    /// the path at `evaluation_time`. Not multiplied by the notional, not
    /// discounted.
    pub fn coupon_at(
        &self,
        evaluation_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        let rate = self
            .index
            .fixing_value_at(evaluation_time, self.fixing_date, model)?;
        Ok(rate * self.day_count_fraction)
    }

    /// Share of the coupon not yet accrued at `time`.
    ///
    /// `(period_end - time) / (period_end - period_start)` for `time` in
    /// `[period_start, period_end)`, and 1 otherwise. The full coupon is
    /// kept at the period start and again once the period has ended.
    pub fn non_accrued_ratio(&self, time: f64) -> f64 {
        let length = self.period_end - self.period_start;
        if length > 0.0 && time >= self.period_start && time < self.period_end {
            (self.period_end - time) / length
        } else {
            1.0
        }
    }

    /// Present value with an explicit fixing time.
    ///
    /// Periods carry their own fixing date, so `fixing_time` is ignored and
    /// this is identical to [`MonteCarloProduct::present_value`].
    pub fn present_value_with_fixing(
        &self,
        evaluation_time: f64,
        _fixing_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        self.present_value(evaluation_time, model)
    }

    fn apply_accrual_exclusion(&self, coupon_value: PathVector, time: f64) -> PathVector {
        if self.flags.exclude_accrued_interest {
            coupon_value * self.non_accrued_ratio(time)
        } else {
            coupon_value
        }
    }

    fn apply_direction(&self, values: PathVector) -> PathVector {
        if self.flags.payer {
            -values
        } else {
            values
        }
    }
}

impl MonteCarloProduct for Period {
    fn present_value(
        &self,
        evaluation_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        if evaluation_time >= self.payment_date {
            return Ok(PathVector::zero());
        }

        let notional_at_start = self.notional.value_at_start(self, model)?;
        let numeraire_at_evaluation = model.numeraire(evaluation_time)?;
        let numeraire_at_payment = model.numeraire(self.payment_date)?;

        // Numeraire relative value of the coupon
        let mut values = if self.flags.coupon_flow {
            let coupon = self.coupon(model)?;
            let coupon_value = &(&coupon * &notional_at_start) / &numeraire_at_payment;
            self.apply_accrual_exclusion(coupon_value, evaluation_time)
        } else {
            PathVector::zero()
        };

        if self.flags.notional_flow {
            let notional_at_end = self.notional.value_at_end(self, model)?;

            if self.period_start > evaluation_time {
                let numeraire_at_start = model.numeraire(self.period_start)?;
                values = values.sub_ratio(&notional_at_start, &numeraire_at_start);
            }

            if self.period_end > evaluation_time {
                let numeraire_at_end = model.numeraire(self.period_end)?;
                values = values.add_ratio(&notional_at_end, &numeraire_at_end);
            }
        }

        let values = self.apply_direction(values) * &numeraire_at_evaluation;

        trace!(
            evaluation_time,
            payment_date = self.payment_date,
            paths = values.len(),
            "period present value"
        );
        Ok(values)
    }
}

impl CashFlowEstimator for Period {
    fn forward_cash_flow(
        &self,
        initial_time: f64,
        final_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        let values = if initial_time >= self.payment_date || final_time < self.payment_date {
            // Payment outside the window: only the final notional exchange
            // can have happened by `final_time`.
            if self.flags.notional_flow && final_time >= self.period_end {
                let notional_at_end = self.notional.value_at_end(self, model)?;
                let numeraire_at_end = model.numeraire(self.period_end)?;
                PathVector::zero().add_ratio(&notional_at_end, &numeraire_at_end)
            } else {
                return Ok(PathVector::zero());
            }
        } else {
            let notional_at_start = self.notional.value_at_start(self, model)?;
            let numeraire_at_payment = model.numeraire(self.payment_date)?;

            let mut values = if self.flags.coupon_flow {
                let coupon = self.coupon_at(final_time, model)?;
                let coupon_value = &(&coupon * &notional_at_start) / &numeraire_at_payment;
                self.apply_accrual_exclusion(coupon_value, final_time)
            } else {
                PathVector::zero()
            };

            if self.flags.notional_flow && final_time >= self.period_end {
                let notional_at_end = self.notional.value_at_end(self, model)?;
                let numeraire_at_end = model.numeraire(self.period_end)?;
                values = values.add_ratio(&notional_at_end, &numeraire_at_end);
            }
            values
        };

        // Rebase with the numeraire at the initial time, not the final time.
        let numeraire_at_initial = model.numeraire(initial_time)?;
        let values = self.apply_direction(values) * &numeraire_at_initial;

        trace!(
            initial_time,
            final_time,
            payment_date = self.payment_date,
            "period forward cash flow"
        );
        Ok(values)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period [start={}, end={}, fixing={}, payment={}, dcf={}, couponFlow={}, notionalFlow={}, payer={}, excludeAccruedInterest={}]",
            self.period_start,
            self.period_end,
            self.fixing_date,
            self.payment_date,
            self.day_count_fraction,
            self.flags.coupon_flow,
            self.flags.notional_flow,
            self.flags.payer,
            self.flags.exclude_accrued_interest,
        )
    }
}

/// Builder for [`Period`].
///
/// Validates date ordering at build time. When no day count fraction is
/// given, `period_end - period_start` is used.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pricer_models::instruments::rates::{ConstantNotional, ForwardRateIndex, Period};
///
/// let result = Period::builder()
///     .period_start(2.0)
///     .period_end(1.0)
///     .fixing_date(2.0)
///     .payment_date(2.0)
///     .notional(Arc::new(ConstantNotional::new(1.0)))
///     .index(Arc::new(ForwardRateIndex::new(0.0, 1.0).unwrap()))
///     .build();
///
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PeriodBuilder {
    period_start: Option<f64>,
    period_end: Option<f64>,
    fixing_date: Option<f64>,
    payment_date: Option<f64>,
    notional: Option<Arc<dyn Notional>>,
    index: Option<Arc<dyn CouponIndex>>,
    day_count_fraction: Option<f64>,
    flags: PeriodFlags,
}

impl PeriodBuilder {
    /// Sets the period start.
    #[inline]
    pub fn period_start(mut self, period_start: f64) -> Self {
        self.period_start = Some(period_start);
        self
    }

    /// Sets the period end.
    #[inline]
    pub fn period_end(mut self, period_end: f64) -> Self {
        self.period_end = Some(period_end);
        self
    }

    /// Sets the fixing date. Defaults to the period start.
    #[inline]
    pub fn fixing_date(mut self, fixing_date: f64) -> Self {
        self.fixing_date = Some(fixing_date);
        self
    }

    /// Sets the payment date. Defaults to the period end.
    #[inline]
    pub fn payment_date(mut self, payment_date: f64) -> Self {
        self.payment_date = Some(payment_date);
        self
    }

    /// Sets the shared notional.
    #[inline]
    pub fn notional(mut self, notional: Arc<dyn Notional>) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the shared coupon index.
    #[inline]
    pub fn index(mut self, index: Arc<dyn CouponIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the day count fraction.
    #[inline]
    pub fn day_count_fraction(mut self, day_count_fraction: f64) -> Self {
        self.day_count_fraction = Some(day_count_fraction);
        self
    }

    /// Sets all flow flags at once.
    #[inline]
    pub fn flags(mut self, flags: PeriodFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the coupon flow flag.
    #[inline]
    pub fn coupon_flow(mut self, coupon_flow: bool) -> Self {
        self.flags.coupon_flow = coupon_flow;
        self
    }

    /// Sets the notional exchange flag.
    #[inline]
    pub fn notional_flow(mut self, notional_flow: bool) -> Self {
        self.flags.notional_flow = notional_flow;
        self
    }

    /// Sets the payer flag.
    #[inline]
    pub fn payer(mut self, payer: bool) -> Self {
        self.flags.payer = payer;
        self
    }

    /// Sets the accrued interest exclusion flag.
    #[inline]
    pub fn exclude_accrued_interest(mut self, exclude: bool) -> Self {
        self.flags.exclude_accrued_interest = exclude;
        self
    }

    /// Builds the period.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError`] if a required field is missing, a time is
    /// not finite, `period_start > period_end`, or
    /// `payment_date < period_end`.
    pub fn build(self) -> Result<Period, InstrumentError> {
        let result = self.validate();
        if let Err(err) = &result {
            debug!(error = %err, "rejected period");
        }
        result
    }

    fn validate(self) -> Result<Period, InstrumentError> {
        let period_start = self
            .period_start
            .ok_or(InstrumentError::MissingField("period_start"))?;
        let period_end = self
            .period_end
            .ok_or(InstrumentError::MissingField("period_end"))?;
        let fixing_date = self.fixing_date.unwrap_or(period_start);
        let payment_date = self.payment_date.unwrap_or(period_end);
        let notional = self
            .notional
            .ok_or(InstrumentError::MissingField("notional"))?;
        let index = self.index.ok_or(InstrumentError::MissingField("index"))?;
        let day_count_fraction = self
            .day_count_fraction
            .unwrap_or(period_end - period_start);

        for (field, value) in [
            ("period_start", period_start),
            ("period_end", period_end),
            ("fixing_date", fixing_date),
            ("payment_date", payment_date),
            ("day_count_fraction", day_count_fraction),
        ] {
            if !value.is_finite() {
                return Err(InstrumentError::NonFiniteTime { field, value });
            }
        }

        if period_start > period_end {
            return Err(InstrumentError::InvalidPeriodOrdering {
                start: period_start,
                end: period_end,
            });
        }
        if payment_date < period_end {
            return Err(InstrumentError::PaymentBeforePeriodEnd {
                end: period_end,
                payment: payment_date,
            });
        }

        Ok(Period {
            period_start,
            period_end,
            fixing_date,
            payment_date,
            notional,
            index,
            day_count_fraction,
            flags: self.flags,
        })
    }
}
