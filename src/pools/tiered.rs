//! Multi-tier full-range pool implementation.
//!
//! One pool manages a single trading pair split into parallel tiers.
//! Every tier holds full-range liquidity at its own depth and fee rate
//! and tracks its own sqrt price; a swap routes across all tiers at once
//! using the allocation solver, so the tiers behave as one market with
//! minimal total price impact.
//!
//! # Swap Algorithm (exact-input)
//!
//! 1. Split the input across tiers ([`crate::math::allocate`]).
//! 2. Per routed tier, deduct its fee: `net = gross × gamma`.
//! 3. Per routed tier, move the sqrt price by the net input.
//! 4. Per routed tier, derive the output owed from the price move.
//! 5. Commit prices and credit `fee / liquidity` to the sold-token fee
//!    growth accumulator.
//!
//! Steps 1–4 are staged against a snapshot; nothing is written until
//! every tier's update has been computed, so a failed swap leaves the
//! pool exactly as it was.

use tracing::debug;

use crate::config::TieredPoolConfig;
use crate::domain::{
    Liquidity, Price, SqrtGamma, SqrtPrice, SwapDirection, SwapResult, SwapSpec, TokenSide,
};
use crate::error::AmmError;
use crate::math::{allocate, amount_delta, sqrt_price_after_input, TierSnapshot};

/// State of a single liquidity tier.
///
/// `liquidity` and `sqrt_gamma` are fixed at construction; `sqrt_price`
/// moves with every swap routed through the tier, and the fee growth
/// accumulators record cumulative fees per unit of liquidity for each
/// token (the figure liquidity-provider reward accounting consumes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    liquidity: Liquidity,
    sqrt_price: SqrtPrice,
    sqrt_gamma: SqrtGamma,
    fee_growth_token0: f64,
    fee_growth_token1: f64,
}

impl Tier {
    /// Returns the tier's virtual liquidity depth.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the tier's current sqrt price.
    #[must_use]
    pub const fn sqrt_price(&self) -> SqrtPrice {
        self.sqrt_price
    }

    /// Returns the tier's fee retention factor.
    #[must_use]
    pub const fn sqrt_gamma(&self) -> SqrtGamma {
        self.sqrt_gamma
    }

    /// Returns cumulative token0 fees per unit of liquidity.
    #[must_use]
    pub const fn fee_growth_token0(&self) -> f64 {
        self.fee_growth_token0
    }

    /// Returns cumulative token1 fees per unit of liquidity.
    #[must_use]
    pub const fn fee_growth_token1(&self) -> f64 {
        self.fee_growth_token1
    }

    /// Returns the fee growth accumulator for the given token side.
    #[must_use]
    pub const fn fee_growth(&self, side: TokenSide) -> f64 {
        match side {
            TokenSide::Token0 => self.fee_growth_token0,
            TokenSide::Token1 => self.fee_growth_token1,
        }
    }

    /// Returns the tier's execution price `(√P)²`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the square overflows.
    pub fn price(&self) -> crate::error::Result<Price> {
        self.sqrt_price.price()
    }

    fn snapshot(&self) -> TierSnapshot {
        TierSnapshot {
            liquidity: self.liquidity,
            sqrt_price: self.sqrt_price,
            sqrt_gamma: self.sqrt_gamma,
        }
    }
}

/// A multi-tier full-range AMM pool.
///
/// Created from a [`TieredPoolConfig`] via [`TieredPool::from_config`].
/// The pool validates the configuration on construction and is
/// immediately ready for swaps. The tier count and per-tier fee rates
/// never change afterwards; only sqrt prices and fee growth accumulators
/// move, and only through [`TieredPool::swap`].
///
/// The pool is a plain in-memory object with no interior mutability: a
/// multi-threaded host must wrap it in its own mutual exclusion, since
/// two overlapping swaps would interleave their read-modify-write of the
/// tier state.
///
/// # Example
///
/// ```
/// use strata_amm::config::TieredPoolConfig;
/// use strata_amm::domain::{Liquidity, SqrtGamma, SqrtPrice, SwapDirection, SwapSpec};
/// use strata_amm::pools::TieredPool;
///
/// let config = TieredPoolConfig::new(
///     vec![
///         Liquidity::new(10_000.0).expect("valid"),
///         Liquidity::new(10_000.0).expect("valid"),
///     ],
///     vec![
///         SqrtGamma::new(0.9985).expect("valid"),
///         SqrtGamma::new(0.9997).expect("valid"),
///     ],
///     SqrtPrice::new(1.0).expect("valid"),
/// )
/// .expect("valid config");
///
/// let mut pool = TieredPool::from_config(&config).expect("pool created");
/// let spec = SwapSpec::exact_in(1_000.0).expect("positive amount");
/// let result = pool.swap(spec, SwapDirection::SellToken0).expect("swap ok");
///
/// assert!(result.amount_out() > 0.0);
/// assert!(result.fee_amount() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TieredPool {
    tiers: Vec<Tier>,
}

impl TieredPool {
    /// Creates a new pool from the given configuration.
    ///
    /// Every tier starts at the config's uniform sqrt price with zeroed
    /// fee growth.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`TieredPoolConfig::validate`].
    pub fn from_config(config: &TieredPoolConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let sqrt_price = config.initial_sqrt_price();
        let tiers = config
            .liquidity()
            .iter()
            .zip(config.sqrt_gamma())
            .map(|(&liquidity, &sqrt_gamma)| Tier {
                liquidity,
                sqrt_price,
                sqrt_gamma,
                fee_growth_token0: 0.0,
                fee_growth_token1: 0.0,
            })
            .collect();
        Ok(Self { tiers })
    }

    /// Returns the number of tiers.
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Returns the tier states, index-aligned with the construction
    /// config and every [`SwapResult`] breakdown.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Returns tier `index`'s execution price.
    ///
    /// # Errors
    ///
    /// - [`AmmError::TierOutOfRange`] if `index` is not a valid tier.
    /// - [`AmmError::InvalidPrice`] if the square overflows.
    pub fn price(&self, index: usize) -> crate::error::Result<Price> {
        let tier = self.tiers.get(index).ok_or(AmmError::TierOutOfRange {
            index,
            tier_count: self.tiers.len(),
        })?;
        tier.price()
    }

    /// Returns the liquidity-weighted blended price across all tiers.
    ///
    /// A display/oracle figure only — the swap math never reads it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the weighted sum overflows.
    pub fn combined_price(&self) -> crate::error::Result<Price> {
        let mut weighted = 0.0;
        let mut total_liquidity = 0.0;
        for tier in &self.tiers {
            weighted += tier.price()?.get() * tier.liquidity.get();
            total_liquidity += tier.liquidity.get();
        }
        Price::new(weighted / total_liquidity)
    }

    /// Executes an exact-input swap routed across all tiers.
    ///
    /// The input is split by the allocation solver; each routed tier
    /// charges its own fee, moves its own price, and pays out its share
    /// of the output. Tiers excluded from the split are untouched —
    /// their price and fee growth are exactly as before the call.
    ///
    /// Fee growth is credited on the sold token's accumulator: the fee
    /// is retained in the token the pool receives.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedSwap`] for an exact-output spec; this
    ///   engine prices exact-input orders only.
    /// - [`AmmError::InvalidPrice`] if a tier's updated price would
    ///   leave the representable positive range.
    /// - [`AmmError::AllocationFailed`] if the split cannot be computed.
    ///
    /// On any error the pool state is unchanged.
    pub fn swap(
        &mut self,
        spec: SwapSpec,
        direction: SwapDirection,
    ) -> crate::error::Result<SwapResult> {
        let SwapSpec::ExactIn { amount_in } = spec else {
            return Err(AmmError::UnsupportedSwap(
                "exact-output orders are not supported",
            ));
        };

        let snapshots: Vec<TierSnapshot> = self.tiers.iter().map(Tier::snapshot).collect();
        let allocation = allocate(&snapshots, direction, amount_in)?;

        let tier_count = self.tiers.len();
        let mut amounts_in = vec![0.0; tier_count];
        let mut amounts_out = vec![0.0; tier_count];
        let mut fee_amounts = vec![0.0; tier_count];
        let mut next_prices: Vec<Option<SqrtPrice>> = vec![None; tier_count];

        // Stage every tier's update before committing anything.
        for (index, tier) in self.tiers.iter().enumerate() {
            let gross = allocation.amounts()[index];
            if !allocation.is_active(index) || gross == 0.0 {
                // A tier with no share experiences no trade.
                continue;
            }
            let net = gross * tier.sqrt_gamma.gamma();
            let next = sqrt_price_after_input(direction, tier.sqrt_price, tier.liquidity, net)?;
            // Post-trade price first, so the delta is the magnitude the
            // pool pays out. Dust-sized moves can round a hair below
            // zero; the payout is clamped, never negative.
            let out = amount_delta(direction.output_side(), next, tier.sqrt_price, tier.liquidity)
                .max(0.0);
            amounts_in[index] = gross;
            amounts_out[index] = out;
            fee_amounts[index] = gross - net;
            next_prices[index] = Some(next);
        }

        let total_in: f64 = amounts_in.iter().sum();
        let total_out: f64 = amounts_out.iter().sum();
        let total_fee: f64 = fee_amounts.iter().sum();
        let result = SwapResult::new(
            total_in,
            total_out,
            total_fee,
            amounts_in,
            amounts_out,
            fee_amounts,
        )?;

        // Commit: prices and sold-token fee growth, routed tiers only.
        for (index, tier) in self.tiers.iter_mut().enumerate() {
            let Some(next) = next_prices[index] else {
                continue;
            };
            tier.sqrt_price = next;
            let growth = result.tier_fee_amounts()[index] / tier.liquidity.get();
            match direction.input_side() {
                TokenSide::Token0 => tier.fee_growth_token0 += growth,
                TokenSide::Token1 => tier.fee_growth_token1 += growth,
            }
        }

        debug!(
            %direction,
            amount_in = result.amount_in(),
            amount_out = result.amount_out(),
            fee = result.fee_amount(),
            active_tiers = allocation.active_count(),
            "swap executed"
        );
        Ok(result)
    }
}
