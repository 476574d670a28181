//! Core value and error types.
//!
//! This module provides:
//! - `path_vector`: The per-path value vector every valuation produces
//! - `error`: Structured error types for valuation and path vector operations
//!
//! # Re-exports
//!
//! - [`PathVector`] from `path_vector`
//! - [`PricingError`], [`PathVectorError`] from `error`

pub mod error;
pub mod path_vector;

pub use error::{PathVectorError, PricingError};
pub use path_vector::{PathVector, PARALLEL_THRESHOLD};
