//! # pricer_core: Foundation for American Monte Carlo Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Per-path value vectors with a closed arithmetic (`types::path_vector`)
//! - The simulation model contract products are valued against (`traits::simulation`)
//! - Product and forward cash-flow estimator traits (`traits::product`)
//! - Error types: `PricingError`, `PathVectorError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - rayon: Parallel elementwise arithmetic on large path vectors
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::PathVector;
//!
//! let numeraire = PathVector::from_vec(vec![1.02, 1.03, 1.01]).unwrap();
//! let cash_flow = PathVector::constant(100.0);
//!
//! // Numeraire-relative value of a fixed cash flow
//! let relative = PathVector::zero().add_ratio(&cash_flow, &numeraire);
//! assert_eq!(relative.len(), 3);
//! assert!((relative.get(0) - 100.0 / 1.02).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
