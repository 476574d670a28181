//! SIMM sensitivity coordinates.
//!
//! A [`SimmCoordinate`] tags a sensitivity with the product class, risk
//! class and risk factor qualifier used by downstream initial margin
//! aggregation. This crate only carries the classification; bucketing and
//! aggregation live elsewhere.

mod coordinate;

pub use coordinate::{ClassificationError, ProductClass, Qualifier, RiskClass, SimmCoordinate};
