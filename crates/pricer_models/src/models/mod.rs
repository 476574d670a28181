//! Simulation models.
//!
//! Path generation is provided by an external simulation engine through the
//! [`SimulationModel`](pricer_core::traits::SimulationModel) trait. This
//! module only carries deterministic models used to validate the measure
//! change conventions of the products:
//! - [`FlatRateModel`]: flat continuously compounded short rate

mod flat;

pub use flat::FlatRateModel;
