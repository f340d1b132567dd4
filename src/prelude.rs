//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use strata_amm::prelude::*;
//! ```

pub use crate::config::TieredPoolConfig;
pub use crate::domain::{
    Liquidity, Price, SqrtGamma, SqrtPrice, SwapDirection, SwapResult, SwapSpec, TokenSide,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{allocate, Allocation, TierSnapshot};
pub use crate::pools::{Tier, TieredPool};
