//! Instrument error types.
//!
//! This module provides structured error handling for period, notional
//! and leg construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument construction errors.
///
/// Construction validates the date ordering a period relies on, so that a
/// malformed period fails at build time rather than producing a misleading
/// value later.
///
/// # Variants
/// - `InvalidPeriodOrdering`: `period_start > period_end`
/// - `PaymentBeforePeriodEnd`: `payment_date < period_end`
/// - `NonFiniteTime`: a date is NaN or infinite
/// - `MissingField`: a required builder field was not set
/// - `InvalidSchedule`: a notional or tenor schedule is malformed
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidPeriodOrdering { start: 2.0, end: 1.5 };
/// assert_eq!(format!("{}", err), "Invalid period: start 2 after end 1.5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Period start lies after period end.
    #[error("Invalid period: start {start} after end {end}")]
    InvalidPeriodOrdering {
        /// Period start
        start: f64,
        /// Period end
        end: f64,
    },

    /// Payment date lies before period end.
    #[error("Invalid period: payment {payment} before end {end}")]
    PaymentBeforePeriodEnd {
        /// Period end
        end: f64,
        /// Payment date
        payment: f64,
    },

    /// A time is NaN or infinite.
    #[error("Non-finite time for {field}: {value}")]
    NonFiniteTime {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A required builder field was not supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A schedule is empty or not strictly increasing.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the schedule error
        message: String,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidPeriodOrdering { .. }
            | InstrumentError::PaymentBeforePeriodEnd { .. } => {
                PricingError::PreconditionViolation(err.to_string())
            }
            InstrumentError::NonFiniteTime { .. }
            | InstrumentError::MissingField(_)
            | InstrumentError::InvalidSchedule { .. } => PricingError::InvalidInput(err.to_string()),
            InstrumentError::InvalidParameter { message } => PricingError::InvalidInput(message),
        }
    }
}
