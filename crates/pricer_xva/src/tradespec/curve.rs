//! Interest rate curve descriptor.

use std::fmt;

/// Identifies the interest rate curve a trade is sensitive to.
///
/// # Examples
///
/// ```
/// use pricer_xva::tradespec::IrCurveSpec;
///
/// let curve = IrCurveSpec::new("EUR", "Libor6m");
/// assert_eq!(curve.currency(), "EUR");
/// assert_eq!(curve.to_string(), "EUR-Libor6m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrCurveSpec {
    currency: String,
    tenor_label: String,
}

impl IrCurveSpec {
    /// Creates a curve descriptor.
    pub fn new(currency: impl Into<String>, tenor_label: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            tenor_label: tenor_label.into(),
        }
    }

    /// Curve currency.
    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Index tenor label, e.g. `OIS` or `Libor6m`.
    #[inline]
    pub fn tenor_label(&self) -> &str {
        &self.tenor_label
    }
}

impl fmt::Display for IrCurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.currency, self.tenor_label)
    }
}
