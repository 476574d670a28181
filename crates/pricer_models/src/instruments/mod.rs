//! Financial instrument definitions.
//!
//! This module provides the products valued by the American Monte Carlo
//! layer, together with their construction errors.
//!
//! # Asset Class Modules
//!
//! - [`rates`]: Interest rate cash-flow products (periods, legs, bonds)

mod error;
pub mod rates;

pub use error::InstrumentError;
