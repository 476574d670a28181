//! Notionals referenced by cash-flow periods.
//!
//! A notional is built once per product and shared read-only by every
//! period that references it, typically as `Arc<dyn Notional>`.
//!
//! - [`ConstantNotional`]: the same amount at every period start and end
//! - [`AmortizingNotional`]: a piecewise-constant schedule of amounts
//!
//! Both query operations receive the period and the model, so that
//! path-dependent notionals can be added behind the same contract.

use std::fmt::Debug;

use pricer_core::traits::SimulationModel;
use pricer_core::types::{PathVector, PricingError};

use super::period::Period;
use crate::instruments::InstrumentError;

/// Notional amount applied to a period's coupon and exchange flows.
pub trait Notional: Debug + Send + Sync {
    /// Currency label, if one was assigned.
    fn currency(&self) -> Option<&str>;

    /// Notional in force at the start of `period`.
    fn value_at_start(
        &self,
        period: &Period,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;

    /// Notional in force at the end of `period`.
    fn value_at_end(
        &self,
        period: &Period,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;
}

/// A constant, non-stochastic notional.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::rates::{ConstantNotional, Notional};
///
/// let notional = ConstantNotional::with_currency(1_000_000.0, "EUR");
/// assert_eq!(notional.amount(), 1_000_000.0);
/// assert_eq!(notional.currency(), Some("EUR"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantNotional {
    currency: Option<String>,
    value: PathVector,
}

impl ConstantNotional {
    /// Creates a constant notional without a currency label.
    pub fn new(amount: f64) -> Self {
        Self {
            currency: None,
            value: PathVector::constant(amount),
        }
    }

    /// Creates a constant notional with a currency label.
    pub fn with_currency(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            value: PathVector::constant(amount),
        }
    }

    /// The notional amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.value.get(0)
    }
}

impl Notional for ConstantNotional {
    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn value_at_start(
        &self,
        _period: &Period,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(self.value.clone())
    }

    fn value_at_end(
        &self,
        _period: &Period,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(self.value.clone())
    }
}

/// A deterministic notional following a step schedule.
///
/// Each step `(time, amount)` sets the notional from `time` onwards until
/// the next step. Times before the first step use the first amount.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::rates::AmortizingNotional;
///
/// let notional = AmortizingNotional::new(vec![
///     (0.0, 1_000_000.0),
///     (1.0, 750_000.0),
///     (2.0, 500_000.0),
/// ])
/// .unwrap();
///
/// assert_eq!(notional.amount_at(0.5), 1_000_000.0);
/// assert_eq!(notional.amount_at(1.0), 750_000.0);
/// assert_eq!(notional.amount_at(5.0), 500_000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AmortizingNotional {
    currency: Option<String>,
    steps: Vec<(f64, f64)>,
}

impl AmortizingNotional {
    /// Creates an amortizing notional from `(time, amount)` steps.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidSchedule`] if `steps` is empty or
    /// its times are not strictly increasing and finite.
    pub fn new(steps: Vec<(f64, f64)>) -> Result<Self, InstrumentError> {
        if steps.is_empty() {
            return Err(InstrumentError::InvalidSchedule {
                message: "amortization schedule is empty".to_string(),
            });
        }
        if steps.iter().any(|(t, a)| !t.is_finite() || !a.is_finite()) {
            return Err(InstrumentError::InvalidSchedule {
                message: "amortization schedule holds a non-finite entry".to_string(),
            });
        }
        if steps.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(InstrumentError::InvalidSchedule {
                message: "amortization times must be strictly increasing".to_string(),
            });
        }
        Ok(Self {
            currency: None,
            steps,
        })
    }

    /// Assigns a currency label.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Amount in force at `time`.
    pub fn amount_at(&self, time: f64) -> f64 {
        let idx = self.steps.partition_point(|(t, _)| *t <= time);
        self.steps[idx.saturating_sub(1)].1
    }

    /// The `(time, amount)` steps.
    pub fn steps(&self) -> &[(f64, f64)] {
        &self.steps
    }
}

impl Notional for AmortizingNotional {
    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn value_at_start(
        &self,
        period: &Period,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(PathVector::constant(self.amount_at(period.period_start())))
    }

    fn value_at_end(
        &self,
        period: &Period,
        _model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        Ok(PathVector::constant(self.amount_at(period.period_end())))
    }
}
