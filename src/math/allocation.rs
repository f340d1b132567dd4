//! Optimal split of one input amount across the pool's tiers.
//!
//! The split equalizes the marginal price impact of every routed tier
//! (the Lagrange-multiplier optimum for this family of price-impact
//! functions) while keeping every per-tier amount non-negative. The
//! closed form can assign a negative amount to a tier whose fee makes it
//! uneconomical at the given trade size; such tiers are excluded and the
//! closed form is re-solved over the remainder until the split is
//! feasible.

use tracing::trace;

use crate::domain::{Liquidity, SqrtGamma, SqrtPrice, SwapDirection};
use crate::error::AmmError;

/// Read-only view of one tier's pricing state, as consumed by
/// [`allocate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSnapshot {
    /// The tier's virtual liquidity depth.
    pub liquidity: Liquidity,
    /// The tier's current sqrt price.
    pub sqrt_price: SqrtPrice,
    /// The tier's fee retention factor.
    pub sqrt_gamma: SqrtGamma,
}

/// A feasible split of the total input across tiers.
///
/// Index-aligned with the snapshot slice passed to [`allocate`]: tier
/// *i*'s share is `amounts()[i]`, and `active()[i]` records whether the
/// tier participates in the trade. Excluded tiers carry exactly `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    amounts: Vec<f64>,
    active: Vec<bool>,
}

impl Allocation {
    /// Returns the input amount assigned to each tier.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Returns the per-tier participation mask.
    #[must_use]
    pub fn active(&self) -> &[bool] {
        &self.active
    }

    /// Returns `true` if tier `index` participates in the trade.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of tiers participating in the trade.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }
}

/// Splits `total_input` of the sold token across `tiers` so that every
/// routed tier ends at the same marginal price impact.
///
/// Each pass solves the closed form over the currently active set
///
/// ```text
/// alloc[i] = weight[i] · (total_input + Σ reserve[j]) / Σ weight[j] − reserve[i]
/// ```
///
/// where `weight[i] = L[i] / √gamma[i]` and `reserve[i]` is the tier's
/// fee-adjusted virtual reserve of the sold token. Tiers assigned a
/// negative amount are deactivated and the form is re-solved; the active
/// set shrinks strictly on every non-terminal pass, so at most
/// `tiers.len()` passes run. The active allocations always sum to
/// exactly `total_input`, so at least one tier survives every pass.
///
/// A `total_input` of zero is legal and resolves to an all-zero split.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `total_input` is negative or not
///   finite.
/// - [`AmmError::AllocationFailed`] if `tiers` is empty, or if the loop
///   exhausts its pass bound without a feasible split (possible only if
///   the snapshots violate their own invariants).
pub fn allocate(
    tiers: &[TierSnapshot],
    direction: SwapDirection,
    total_input: f64,
) -> crate::error::Result<Allocation> {
    if !total_input.is_finite() || total_input < 0.0 {
        return Err(AmmError::InvalidQuantity(
            "allocation input must be finite and non-negative",
        ));
    }
    if tiers.is_empty() {
        return Err(AmmError::AllocationFailed("no tiers to allocate across"));
    }

    let tier_count = tiers.len();
    let mut weights = Vec::with_capacity(tier_count);
    let mut reserves = Vec::with_capacity(tier_count);
    for tier in tiers {
        let liquidity = tier.liquidity.get();
        let sqrt_price = tier.sqrt_price.get();
        let gamma = tier.sqrt_gamma.gamma();
        weights.push(liquidity / tier.sqrt_gamma.get());
        // Effective virtual reserve of the sold token, fee-adjusted.
        let reserve = if direction.is_sell_token0() {
            (liquidity / sqrt_price) / gamma
        } else {
            (liquidity * sqrt_price) / gamma
        };
        reserves.push(reserve);
    }

    let mut active = vec![true; tier_count];
    let mut amounts = vec![0.0; tier_count];

    for pass in 0..tier_count {
        let mut weight_sum = 0.0;
        let mut reserve_sum = 0.0;
        for i in 0..tier_count {
            if active[i] {
                weight_sum += weights[i];
                reserve_sum += reserves[i];
            }
        }
        if weight_sum <= 0.0 {
            return Err(AmmError::AllocationFailed(
                "active tier weights sum to zero",
            ));
        }

        let mut feasible = true;
        let mut survivors = 0usize;
        for i in 0..tier_count {
            if !active[i] {
                continue;
            }
            amounts[i] = weights[i] * (total_input + reserve_sum) / weight_sum - reserves[i];
            if amounts[i] < 0.0 {
                feasible = false;
            } else {
                survivors += 1;
            }
        }
        trace!(
            pass,
            active_tiers = active.iter().filter(|&&a| a).count(),
            feasible,
            "allocation pass"
        );

        // In exact arithmetic the active allocations sum to total_input
        // ≥ 0, so a pass can never turn every allocation negative; when
        // rounding produces one anyway the negatives sit at the noise
        // level and are clamped instead of evicted.
        if feasible || survivors == 0 {
            for i in 0..tier_count {
                if !active[i] || amounts[i] < 0.0 {
                    amounts[i] = 0.0;
                }
            }
            return Ok(Allocation { amounts, active });
        }

        for i in 0..tier_count {
            if active[i] && amounts[i] < 0.0 {
                active[i] = false;
                amounts[i] = 0.0;
            }
        }
    }

    Err(AmmError::AllocationFailed(
        "split did not converge within the tier-count pass bound",
    ))
}
