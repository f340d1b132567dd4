//! Configuration for multi-tier full-range pools.

use crate::domain::{Liquidity, SqrtGamma, SqrtPrice};
use crate::error::AmmError;

/// Configuration for a multi-tier full-range pool.
///
/// Defines the immutable construction parameters: one liquidity depth
/// and one fee retention factor per tier, plus the uniform sqrt price
/// every tier starts at. The two per-tier vectors are index-aligned —
/// tier *i* is described by `liquidity()[i]` and `sqrt_gamma()[i]` — and
/// the tier count is fixed for the pool's lifetime.
///
/// # Validation
///
/// - At least one tier must be configured.
/// - The `liquidity` and `sqrt_gamma` vectors must have equal length.
/// - Value-range invariants (positive liquidity, retention factor in
///   `(0, 1]`, positive price) are enforced by the domain newtypes, so a
///   config holding them is structurally sound by construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TieredPoolConfig {
    liquidity: Vec<Liquidity>,
    sqrt_gamma: Vec<SqrtGamma>,
    initial_sqrt_price: SqrtPrice,
}

impl TieredPoolConfig {
    /// Creates a new `TieredPoolConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if no tier is configured or
    ///   the per-tier vectors disagree in length.
    pub fn new(
        liquidity: Vec<Liquidity>,
        sqrt_gamma: Vec<SqrtGamma>,
        initial_sqrt_price: SqrtPrice,
    ) -> Result<Self, AmmError> {
        let config = Self {
            liquidity,
            sqrt_gamma,
            initial_sqrt_price,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if no tier is configured or
    ///   the per-tier vectors disagree in length.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.liquidity.is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "pool requires at least one tier",
            ));
        }
        if self.liquidity.len() != self.sqrt_gamma.len() {
            return Err(AmmError::InvalidConfiguration(
                "liquidity and sqrt_gamma vectors must have equal length",
            ));
        }
        Ok(())
    }

    /// Returns the number of configured tiers.
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.liquidity.len()
    }

    /// Returns the per-tier liquidity depths.
    #[must_use]
    pub fn liquidity(&self) -> &[Liquidity] {
        &self.liquidity
    }

    /// Returns the per-tier fee retention factors.
    #[must_use]
    pub fn sqrt_gamma(&self) -> &[SqrtGamma] {
        &self.sqrt_gamma
    }

    /// Returns the uniform starting sqrt price.
    #[must_use]
    pub const fn initial_sqrt_price(&self) -> SqrtPrice {
        self.initial_sqrt_price
    }
}
