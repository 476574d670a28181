//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Failures surfaced by valuation and model queries
//! - `PathVectorError`: Incompatible or empty path vectors

use thiserror::Error;

/// Categorised valuation errors.
///
/// Model-query failures are propagated unchanged to the caller of a
/// valuation; nothing in the pricing layer converts them into zero values.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::ModelQuery {
///     time: 31.0,
///     reason: "beyond simulated horizon 30".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Model query failed at t = 31: beyond simulated horizon 30"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The simulation model or an index could not produce a value.
    #[error("Model query failed at t = {time}: {reason}")]
    ModelQuery {
        /// Requested time
        time: f64,
        /// Description of the failure
        reason: String,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A product or data contract precondition does not hold.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Path vectors could not be combined.
    #[error(transparent)]
    PathVector(#[from] PathVectorError),
}

impl PricingError {
    /// Convenience constructor for [`PricingError::ModelQuery`].
    pub fn model_query(time: f64, reason: impl Into<String>) -> Self {
        PricingError::ModelQuery {
            time,
            reason: reason.into(),
        }
    }
}

/// Path vector construction and combination errors.
///
/// # Examples
/// ```
/// use pricer_core::types::PathVectorError;
///
/// let err = PathVectorError::LengthMismatch { left: 100, right: 50 };
/// assert!(format!("{}", err).contains("100 vs 50"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathVectorError {
    /// Two non-degenerate vectors with different path counts.
    #[error("Path count mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Path count of the left operand
        left: usize,
        /// Path count of the right operand
        right: usize,
    },

    /// A vector must hold at least one value.
    #[error("Path vector must hold at least one value")]
    Empty,
}
