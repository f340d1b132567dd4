//! Unified error types for the Strata AMM engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers. Every error is synchronous and local: the engine has no
//! background tasks, so nothing surfaces asynchronously, and no error
//! leaves the pool in a partially mutated state.

use thiserror::Error;

/// Convenience alias for `Result<T, AmmError>`.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Unified error enum for all pool, math, and configuration failures.
///
/// Variants carry a static context string describing which invariant was
/// violated. Retrying a failed operation is never meaningful — the
/// arithmetic is deterministic — so callers recover only by correcting
/// the offending argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// An amount argument violated its invariant (non-positive, NaN, …).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A price value was non-positive or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A liquidity value was non-positive or not finite.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// A fee retention factor fell outside the permitted `(0, 1]` range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A pool configuration failed structural validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The requested swap shape is not supported by this engine.
    #[error("unsupported swap: {0}")]
    UnsupportedSwap(&'static str),

    /// A tier index was outside the pool's tier range.
    #[error("tier index {index} out of range for pool with {tier_count} tiers")]
    TierOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of tiers in the pool.
        tier_count: usize,
    },

    /// The cross-tier allocation loop could not produce a feasible split.
    #[error("allocation failed: {0}")]
    AllocationFailed(&'static str),
}
