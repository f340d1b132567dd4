//! Stateful pool implementation.
//!
//! The [`TieredPool`] owns the mutable per-tier state (liquidity depth,
//! sqrt price, fee retention, fee growth accumulators) and sequences the
//! swap pipeline: allocation → fee deduction → price update → output
//! computation → fee-growth bookkeeping → result assembly.

mod tiered;

#[cfg(test)]
mod proptest_properties;

pub use tiered::{Tier, TieredPool};
