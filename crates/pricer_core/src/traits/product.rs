//! Traits for products valued under a [`SimulationModel`].
//!
//! Two distinct valuation modes exist and are kept as separate traits:
//! - [`MonteCarloProduct`]: pathwise value rebased to an evaluation time
//! - [`CashFlowEstimator`]: raw forward cash-flow sample used as a
//!   regression target for exposure estimation

use super::simulation::SimulationModel;
use crate::types::{PathVector, PricingError};

/// A product with a pathwise present value.
pub trait MonteCarloProduct {
    /// Pathwise value of all cash flows after `evaluation_time`, rebased
    /// with the numeraire at `evaluation_time`.
    ///
    /// The result is not expectation-collapsed: averaging it across paths
    /// yields the price.
    ///
    /// # Errors
    ///
    /// Propagates any model or index query failure.
    fn present_value(
        &self,
        evaluation_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;

    /// Risk-neutral price at time zero: the path average of
    /// [`present_value`](Self::present_value) at `0.0`.
    fn price(&self, model: &dyn SimulationModel) -> Result<f64, PricingError> {
        Ok(self.present_value(0.0, model)?.average())
    }
}

/// A product exposing the American Monte Carlo forward cash-flow estimator.
pub trait CashFlowEstimator {
    /// Pathwise sample of the value known at `initial_time`, built from
    /// information available at `final_time >= initial_time` and rebased
    /// with the numeraire at `initial_time`.
    ///
    /// # Errors
    ///
    /// Propagates any model or index query failure.
    fn forward_cash_flow(
        &self,
        initial_time: f64,
        final_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError>;
}
