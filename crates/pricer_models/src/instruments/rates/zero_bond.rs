//! Zero-coupon bond on the model's forward rate curve.
//!
//! The value at `t` uses only the forward rate `L(t; t, T)` as simulated at
//! `t`, so it is measurable at the evaluation time. This makes the bond the
//! minimal check that forward rates and the numeraire compose consistently.

use std::fmt;

use pricer_core::traits::{MonteCarloProduct, SimulationModel};
use pricer_core::types::{PathVector, PricingError};
use tracing::trace;

/// Zero-coupon bond paying 1 at maturity.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::MonteCarloProduct;
/// use pricer_models::instruments::rates::ZeroCouponBond;
/// use pricer_models::models::FlatRateModel;
///
/// let bond = ZeroCouponBond::new(5.0);
/// let model = FlatRateModel::new(0.02, 1).unwrap();
///
/// let at_maturity = bond.present_value(5.0, &model).unwrap();
/// assert!((at_maturity.get(0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroCouponBond {
    maturity: f64,
}

impl ZeroCouponBond {
    /// Creates a zero-coupon bond maturing at `maturity`.
    pub fn new(maturity: f64) -> Self {
        Self { maturity }
    }

    /// Maturity time.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

impl MonteCarloProduct for ZeroCouponBond {
    fn present_value(
        &self,
        evaluation_time: f64,
        model: &dyn SimulationModel,
    ) -> Result<PathVector, PricingError> {
        if evaluation_time > self.maturity {
            return Ok(PathVector::zero());
        }

        let forward_rate = model.forward_rate(evaluation_time, evaluation_time, self.maturity)?;
        let values = (forward_rate * (self.maturity - evaluation_time) + 1.0).invert();

        trace!(evaluation_time, maturity = self.maturity, "zero-coupon bond present value");
        Ok(values)
    }
}

impl fmt::Display for ZeroCouponBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZeroCouponBond [maturity={}]", self.maturity)
    }
}
