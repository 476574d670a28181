//! Deterministic flat-rate model.
//!
//! With a constant continuously compounded short rate `r`:
//! ```text
//! N(t)          = exp(r t)
//! L(t; S, T)    = (exp(r (T - S)) - 1) / (T - S)
//! ```
//! The forward rate does not depend on the fixing time, so fixed and
//! path-observed coupons coincide.

use pricer_core::traits::SimulationModel;
use pricer_core::types::{PathVector, PricingError};

/// Flat-rate model broadcasting deterministic values to every path.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::SimulationModel;
/// use pricer_models::models::FlatRateModel;
///
/// let model = FlatRateModel::new(0.03, 100).unwrap().with_horizon(10.0);
/// assert_eq!(model.numeraire(1.0).unwrap().len(), 100);
/// assert!(model.numeraire(11.0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FlatRateModel {
    rate: f64,
    number_of_paths: usize,
    horizon: Option<f64>,
}

impl FlatRateModel {
    /// Creates a flat-rate model with `number_of_paths` identical paths.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `rate` is not finite or
    /// `number_of_paths` is zero.
    pub fn new(rate: f64, number_of_paths: usize) -> Result<Self, PricingError> {
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "flat rate must be finite, got {}",
                rate
            )));
        }
        if number_of_paths == 0 {
            return Err(PricingError::InvalidInput(
                "number of paths must be positive".to_string(),
            ));
        }
        Ok(Self {
            rate,
            number_of_paths,
            horizon: None,
        })
    }

    /// Limits queries to `[0, horizon]`.
    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// The flat short rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn check_time(&self, time: f64) -> Result<(), PricingError> {
        if !time.is_finite() || time < 0.0 {
            return Err(PricingError::model_query(time, "time outside model domain"));
        }
        match self.horizon {
            Some(horizon) if time > horizon => Err(PricingError::model_query(
                time,
                format!("beyond simulated horizon {}", horizon),
            )),
            _ => Ok(()),
        }
    }

    fn broadcast(&self, value: f64) -> Result<PathVector, PricingError> {
        Ok(PathVector::filled(self.number_of_paths, value)?)
    }
}

impl SimulationModel for FlatRateModel {
    fn number_of_paths(&self) -> usize {
        self.number_of_paths
    }

    fn numeraire(&self, time: f64) -> Result<PathVector, PricingError> {
        self.check_time(time)?;
        self.broadcast((self.rate * time).exp())
    }

    fn forward_rate(
        &self,
        fixing_time: f64,
        period_start: f64,
        period_end: f64,
    ) -> Result<PathVector, PricingError> {
        self.check_time(fixing_time)?;
        self.check_time(period_start)?;
        self.check_time(period_end)?;

        let length = period_end - period_start;
        let rate = if length.abs() < f64::EPSILON {
            self.rate
        } else {
            ((self.rate * length).exp() - 1.0) / length
        };
        self.broadcast(rate)
    }
}
