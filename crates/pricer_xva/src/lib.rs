//! # Pricer XVA (L4: Application)
//!
//! Trade-level descriptors for initial margin simulation.
//!
//! This crate provides:
//! - SIMM product classes, risk classes and sensitivity coordinates
//! - Trade specifications aggregating the coordinates of one trade
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_xva (L4)              │
//! ├─────────────────────────────────────────┤
//! │  simm/       - ProductClass, RiskClass, │
//! │                Qualifier, SimmCoordinate│
//! │  tradespec/  - SimmTradeSpecification,  │
//! │                IrCurveSpec, TradeId     │
//! └─────────────────────────────────────────┘
//!          ↓ consumed alongside
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Periods, legs and zero-coupon bonds    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_xva::simm::{ProductClass, RiskClass, SimmCoordinate};
//! use pricer_xva::tradespec::{IrCurveSpec, SimmTradeSpecification};
//!
//! let mut spec = SimmTradeSpecification::new(
//!     1_000_000.0,
//!     5.0,
//!     IrCurveSpec::new("EUR", "OIS"),
//! );
//! spec.set_sensitivity_keys([
//!     SimmCoordinate::new(ProductClass::RatesFx, RiskClass::InterestRate, "EUR")
//!         .with_bucket("1")
//!         .with_labels("5y", "OIS"),
//! ]);
//!
//! assert_eq!(spec.product_class().unwrap(), ProductClass::RatesFx);
//! ```

#![deny(missing_docs)]

pub mod simm;
pub mod tradespec;
