//! Fundamental domain value types used throughout the AMM engine.
//!
//! This module contains the core value types that model the multi-tier
//! pool domain: liquidity depths, sqrt-price state, fee retention
//! factors, trade directions, and swap specifications/results. All
//! scalar types use newtypes with validated constructors to enforce
//! invariants.

mod liquidity;
mod price;
mod sqrt_gamma;
mod sqrt_price;
mod swap_direction;
mod swap_result;
mod swap_spec;

pub use liquidity::Liquidity;
pub use price::Price;
pub use sqrt_gamma::SqrtGamma;
pub use sqrt_price::SqrtPrice;
pub use swap_direction::{SwapDirection, TokenSide};
pub use swap_result::SwapResult;
pub use swap_spec::SwapSpec;
