//! Interest rate cash-flow products.
//!
//! This module provides the building blocks of rates products valued under
//! a simulated interest rate model:
//! - [`Notional`]: notional trait with [`ConstantNotional`] and
//!   [`AmortizingNotional`]
//! - [`CouponIndex`]: coupon index trait with [`ForwardRateIndex`] and
//!   [`FixedCoupon`]
//! - [`Period`]: a single coupon/notional-exchange period
//! - [`SwapLeg`]: a sequence of periods
//! - [`ZeroCouponBond`]: zero-coupon bond on the forward curve
//!
//! # Architecture
//!
//! Notionals and indices are shared across periods as `Arc<dyn ...>`
//! trait objects; periods only read them. Every product queries the
//! [`SimulationModel`](pricer_core::traits::SimulationModel) on demand and
//! caches nothing.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pricer_core::traits::{CashFlowEstimator, MonteCarloProduct};
//! use pricer_models::instruments::rates::{
//!     ConstantNotional, ForwardRateIndex, PeriodFlags, SwapLeg,
//! };
//! use pricer_models::models::FlatRateModel;
//!
//! let float_leg = SwapLeg::from_tenor(
//!     &[0.5, 1.0, 1.5, 2.0],
//!     Arc::new(ConstantNotional::with_currency(1_000_000.0, "EUR")),
//!     Arc::new(ForwardRateIndex::new(0.0, 0.5).unwrap()),
//!     PeriodFlags::default().with_notional_flow(true),
//! )
//! .unwrap();
//!
//! let model = FlatRateModel::new(0.02, 1_000).unwrap();
//!
//! // A forward-starting floating leg with notional exchange prices at par.
//! let value = float_leg.present_value(0.0, &model).unwrap();
//! assert!(value.average().abs() < 1e-6);
//!
//! // Raw regression target for the exposure at t = 0.5
//! let target = float_leg.forward_cash_flow(0.5, 1.0, &model).unwrap();
//! assert_eq!(target.len(), 1_000);
//! ```

mod index;
mod leg;
mod notional;
mod period;
mod zero_bond;

pub use index::{CouponIndex, FixedCoupon, ForwardRateIndex};
pub use leg::SwapLeg;
pub use notional::{AmortizingNotional, ConstantNotional, Notional};
pub use period::{Period, PeriodBuilder, PeriodFlags};
pub use zero_bond::ZeroCouponBond;
