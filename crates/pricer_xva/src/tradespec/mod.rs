//! Trade specifications for SIMM initial margin.
//!
//! A [`SimmTradeSpecification`] captures what initial margin simulation
//! needs to know about a trade: notional, remaining maturity, the discount
//! curve it is sensitive to, and the set of [`SimmCoordinate`]s it carries
//! sensitivities on.
//!
//! [`SimmCoordinate`]: crate::simm::SimmCoordinate

mod curve;
mod error;
mod ids;
mod trade_spec;

pub use curve::IrCurveSpec;
pub use error::TradeSpecError;
pub use ids::TradeId;
pub use trade_spec::SimmTradeSpecification;
