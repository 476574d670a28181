//! SIMM trade specification.

use std::collections::BTreeSet;

use tracing::warn;

use super::{IrCurveSpec, TradeId, TradeSpecError};
use crate::simm::{ProductClass, Qualifier, RiskClass, SimmCoordinate};

/// Trade-level descriptors for SIMM initial margin simulation.
///
/// Sensitivity keys are assigned after construction. All keys of a
/// well-formed specification share one product class.
///
/// # Examples
///
/// ```
/// use pricer_xva::simm::{ProductClass, RiskClass, SimmCoordinate};
/// use pricer_xva::tradespec::{IrCurveSpec, SimmTradeSpecification};
///
/// let mut spec = SimmTradeSpecification::new(1_000_000.0, 10.0, IrCurveSpec::new("EUR", "Libor6m"))
///     .with_trade_id("SWAP-001");
///
/// spec.set_sensitivity_keys([
///     SimmCoordinate::new(ProductClass::RatesFx, RiskClass::InterestRate, "EUR"),
///     SimmCoordinate::new(ProductClass::RatesFx, RiskClass::Fx, "EUR"),
/// ]);
///
/// assert_eq!(spec.product_class().unwrap(), ProductClass::RatesFx);
/// assert_eq!(spec.risk_classes().len(), 2);
/// assert_eq!(spec.risk_factors().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimmTradeSpecification {
    trade_id: TradeId,
    notional: f64,
    maturity: f64,
    ir_curve: IrCurveSpec,
    sensitivity_keys: BTreeSet<SimmCoordinate>,
}

impl SimmTradeSpecification {
    /// Creates a specification with no sensitivity keys and an empty trade ID.
    pub fn new(notional: f64, maturity: f64, ir_curve: IrCurveSpec) -> Self {
        Self {
            trade_id: TradeId::default(),
            notional,
            maturity,
            ir_curve,
            sensitivity_keys: BTreeSet::new(),
        }
    }

    /// Assigns a trade identifier.
    pub fn with_trade_id(mut self, trade_id: impl Into<TradeId>) -> Self {
        self.trade_id = trade_id.into();
        self
    }

    /// Replaces the sensitivity keys. Duplicates collapse.
    pub fn set_sensitivity_keys(&mut self, keys: impl IntoIterator<Item = SimmCoordinate>) {
        self.sensitivity_keys = keys.into_iter().collect();
    }

    /// Trade notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Maximum remaining time to maturity, in years.
    #[inline]
    pub fn max_time_to_maturity(&self) -> f64 {
        self.maturity
    }

    /// Curve the trade is sensitive to.
    #[inline]
    pub fn ir_curve(&self) -> &IrCurveSpec {
        &self.ir_curve
    }

    /// Trade identifier, empty unless assigned.
    #[inline]
    pub fn trade_id(&self) -> &TradeId {
        &self.trade_id
    }

    /// Sensitivity keys in force at `evaluation_time`.
    ///
    /// The key set is static over the trade's life, so the evaluation time
    /// does not filter it.
    pub fn sensitivity_keys(&self, _evaluation_time: f64) -> &BTreeSet<SimmCoordinate> {
        &self.sensitivity_keys
    }

    /// The single product class shared by all sensitivity keys.
    ///
    /// # Errors
    ///
    /// - [`TradeSpecError::EmptySensitivities`] if no keys are assigned
    /// - [`TradeSpecError::MixedProductClass`] if keys span several classes
    pub fn product_class(&self) -> Result<ProductClass, TradeSpecError> {
        let mut classes = self.sensitivity_keys.iter().map(SimmCoordinate::product_class);
        let first = classes
            .next()
            .ok_or_else(|| TradeSpecError::EmptySensitivities {
                trade_id: self.trade_id.to_string(),
            })?;

        if let Some(other) = classes.find(|class| *class != first) {
            warn!(
                trade_id = %self.trade_id,
                %first,
                %other,
                "sensitivity keys span several product classes"
            );
            return Err(TradeSpecError::MixedProductClass {
                trade_id: self.trade_id.to_string(),
                first,
                other,
            });
        }
        Ok(first)
    }

    /// Distinct risk classes across all sensitivity keys.
    pub fn risk_classes(&self) -> BTreeSet<RiskClass> {
        self.sensitivity_keys
            .iter()
            .map(SimmCoordinate::risk_class)
            .collect()
    }

    /// Distinct risk factor qualifiers across all sensitivity keys.
    pub fn risk_factors(&self) -> BTreeSet<Qualifier> {
        self.sensitivity_keys
            .iter()
            .map(|key| key.qualifier().clone())
            .collect()
    }
}
