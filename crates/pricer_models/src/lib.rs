//! # Pricer Models (L2: Business Logic)
//!
//! Interest rate cash-flow products for American Monte Carlo valuation.
//!
//! This crate provides:
//! - Notionals, coupon indices, cash-flow periods and swap legs
//! - A zero-coupon bond on the model's forward curve
//! - Pathwise present values and forward cash-flow estimators for each
//! - A deterministic flat-rate model for convention checks
//!
//! ## Design Principles
//!
//! - **Two valuation modes** kept as separate traits: present value and
//!   forward cash-flow estimator
//! - **Shared, immutable components**: notionals and indices are
//!   `Arc<dyn ...>` shared by periods
//! - **Builder pattern** for validated construction with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod models;
