//! Trade specification errors.

use thiserror::Error;

use crate::simm::ProductClass;

/// Errors raised when classifying a trade specification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeSpecError {
    /// No sensitivity keys are attached to the trade.
    #[error("Trade {trade_id:?} has no sensitivity keys")]
    EmptySensitivities {
        /// Trade identifier (may be empty)
        trade_id: String,
    },

    /// Sensitivity keys span more than one product class.
    #[error("Trade {trade_id:?} mixes product classes {first} and {other}")]
    MixedProductClass {
        /// Trade identifier (may be empty)
        trade_id: String,
        /// First product class encountered
        first: ProductClass,
        /// A conflicting product class
        other: ProductClass,
    },
}
