//! Contract between products and the Monte Carlo simulation model.
//!
//! Products query the model on demand each time a value is requested and
//! retain nothing afterwards. Implementations must therefore be safe for
//! concurrent read access; the `Send + Sync` bound makes that explicit.

use crate::types::{PathVector, PricingError};

/// A simulated interest rate model, as seen by the products it values.
///
/// Both queries return one value per simulated path, or a degenerate
/// vector when the quantity is deterministic.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::SimulationModel;
/// use pricer_core::types::{PathVector, PricingError};
///
/// /// Zero rates, unit numeraire.
/// struct ZeroRateModel;
///
/// impl SimulationModel for ZeroRateModel {
///     fn number_of_paths(&self) -> usize {
///         1
///     }
///
///     fn numeraire(&self, _time: f64) -> Result<PathVector, PricingError> {
///         Ok(PathVector::constant(1.0))
///     }
///
///     fn forward_rate(
///         &self,
///         _fixing_time: f64,
///         _period_start: f64,
///         _period_end: f64,
///     ) -> Result<PathVector, PricingError> {
///         Ok(PathVector::zero())
///     }
/// }
///
/// let model = ZeroRateModel;
/// assert_eq!(model.numeraire(5.0).unwrap().get(0), 1.0);
/// ```
pub trait SimulationModel: Send + Sync {
    /// Number of simulated paths.
    fn number_of_paths(&self) -> usize;

    /// Numeraire value at `time` on every path.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ModelQuery`] if `time` lies outside the
    /// simulated horizon.
    fn numeraire(&self, time: f64) -> Result<PathVector, PricingError>;

    /// Simple forward rate for `[period_start, period_end]` as simulated at
    /// `fixing_time`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ModelQuery`] if any of the times lies
    /// outside the simulated horizon.
    fn forward_rate(
        &self,
        fixing_time: f64,
        period_start: f64,
        period_end: f64,
    ) -> Result<PathVector, PricingError>;
}
