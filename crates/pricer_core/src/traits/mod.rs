//! Core traits for simulation models and Monte Carlo products.
//!
//! This module defines the seams between layers:
//! - Simulation model queries (`SimulationModel` trait)
//! - Pathwise valuation (`MonteCarloProduct` trait)
//! - Forward cash-flow estimation (`CashFlowEstimator` trait)
//!
//! Products receive the model as `&dyn SimulationModel` so that notionals
//! and indices can be shared as trait objects across periods.

pub mod product;
pub mod simulation;

pub use product::{CashFlowEstimator, MonteCarloProduct};
pub use simulation::SimulationModel;
