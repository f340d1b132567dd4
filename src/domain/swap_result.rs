//! Outcome of a swap routed across the pool's tiers.

use core::fmt;

use super::Price;
use crate::error::AmmError;

/// The outcome of a swap, with aggregate figures and the per-tier
/// breakdown.
///
/// The vectors are index-aligned with the pool's tiers: a tier that was
/// excluded from routing carries `0.0` in all three. Aggregates are the
/// sums of their vectors, and `fee_bps` is the blended fee rate actually
/// paid (`fee_amount / amount_in × 10 000`), which lands between the fee
/// rates of the routed tiers.
///
/// # Invariants
///
/// - `amount_in ≥ 0`; `amount_out ≥ 0`; `0 ≤ fee_amount < amount_in`
///   whenever `amount_in > 0` (an all-zero result is legal — it reports
///   a swap whose input was too small to move any tier).
/// - All per-tier entries are finite and non-negative.
/// - The three breakdown vectors have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwapResult {
    amount_in: f64,
    amount_out: f64,
    fee_amount: f64,
    fee_bps: f64,
    tier_amounts_in: Vec<f64>,
    tier_amounts_out: Vec<f64>,
    tier_fee_amounts: Vec<f64>,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants, deriving the
    /// blended `fee_bps` from the aggregate figures.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if any aggregate violates
    /// its invariant, if a per-tier entry is negative or non-finite, or
    /// if the breakdown vectors disagree in length.
    pub fn new(
        amount_in: f64,
        amount_out: f64,
        fee_amount: f64,
        tier_amounts_in: Vec<f64>,
        tier_amounts_out: Vec<f64>,
        tier_fee_amounts: Vec<f64>,
    ) -> crate::error::Result<Self> {
        if !amount_in.is_finite() || amount_in < 0.0 {
            return Err(AmmError::InvalidQuantity("amount_in must be non-negative"));
        }
        if !amount_out.is_finite() || amount_out < 0.0 {
            return Err(AmmError::InvalidQuantity("amount_out must be non-negative"));
        }
        if !fee_amount.is_finite() || fee_amount < 0.0 {
            return Err(AmmError::InvalidQuantity("fee must be non-negative"));
        }
        if fee_amount >= amount_in && amount_in > 0.0 {
            return Err(AmmError::InvalidQuantity("fee must be less than amount_in"));
        }
        if fee_amount > 0.0 && amount_in == 0.0 {
            return Err(AmmError::InvalidQuantity("fee cannot exceed a zero input"));
        }
        if tier_amounts_in.len() != tier_amounts_out.len()
            || tier_amounts_in.len() != tier_fee_amounts.len()
        {
            return Err(AmmError::InvalidQuantity(
                "per-tier breakdown vectors must share one length",
            ));
        }
        let per_tier = tier_amounts_in
            .iter()
            .chain(&tier_amounts_out)
            .chain(&tier_fee_amounts);
        for &value in per_tier {
            if !value.is_finite() || value < 0.0 {
                return Err(AmmError::InvalidQuantity(
                    "per-tier entries must be finite and non-negative",
                ));
            }
        }

        let fee_bps = if amount_in > 0.0 {
            fee_amount / amount_in * 10_000.0
        } else {
            0.0
        };
        Ok(Self {
            amount_in,
            amount_out,
            fee_amount,
            fee_bps,
            tier_amounts_in,
            tier_amounts_out,
            tier_fee_amounts,
        })
    }

    /// Returns the total input amount taken by the pool.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the total output amount paid out by the pool.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Returns the total fee retained across all routed tiers.
    #[must_use]
    pub const fn fee_amount(&self) -> f64 {
        self.fee_amount
    }

    /// Returns the blended fee rate in basis points.
    #[must_use]
    pub const fn fee_bps(&self) -> f64 {
        self.fee_bps
    }

    /// Returns the input amount routed to each tier.
    #[must_use]
    pub fn tier_amounts_in(&self) -> &[f64] {
        &self.tier_amounts_in
    }

    /// Returns the output amount produced by each tier.
    #[must_use]
    pub fn tier_amounts_out(&self) -> &[f64] {
        &self.tier_amounts_out
    }

    /// Returns the fee retained by each tier.
    #[must_use]
    pub fn tier_fee_amounts(&self) -> &[f64] {
        &self.tier_fee_amounts
    }

    /// Computes the realized price as `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the ratio is not finite.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::new(self.amount_out / self.amount_in)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={}, out={}, fee={}, fee_bps={:.4})",
            self.amount_in, self.amount_out, self.fee_amount, self.fee_bps
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn valid() -> SwapResult {
        let Ok(r) = SwapResult::new(
            1_000.0,
            990.0,
            3.0,
            vec![600.0, 400.0],
            vec![595.0, 395.0],
            vec![1.8, 1.2],
        ) else {
            panic!("expected Ok");
        };
        r
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn valid_result() {
        let r = valid();
        assert!((r.amount_in() - 1_000.0).abs() < f64::EPSILON);
        assert!((r.amount_out() - 990.0).abs() < f64::EPSILON);
        assert!((r.fee_amount() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fee_bps_derived() {
        let r = valid();
        // 3 / 1000 * 10_000 = 30 bps
        assert!((r.fee_bps() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn all_zero_no_op_accepted() {
        // A sub-epsilon swap can collapse to an all-zero split.
        let Ok(r) = SwapResult::new(0.0, 0.0, 0.0, vec![0.0], vec![0.0], vec![0.0]) else {
            panic!("expected Ok");
        };
        assert!(r.fee_bps().abs() < f64::EPSILON);
    }

    #[test]
    fn zero_input_with_positive_fee_rejected() {
        let result = SwapResult::new(0.0, 0.0, 1.0, vec![0.0], vec![0.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_amount_in_rejected() {
        let result = SwapResult::new(-1.0, 1.0, 0.0, vec![], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_amount_out_accepted() {
        // A swap of a sub-epsilon amount legitimately produces ~0 output.
        let result = SwapResult::new(1e-300, 0.0, 0.0, vec![1e-300], vec![0.0], vec![0.0]);
        assert!(result.is_ok());
    }

    #[test]
    fn fee_at_amount_in_rejected() {
        let result = SwapResult::new(100.0, 50.0, 100.0, vec![], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_fee_rejected() {
        let result = SwapResult::new(100.0, 50.0, -1.0, vec![], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn mismatched_vector_lengths_rejected() {
        let result = SwapResult::new(100.0, 90.0, 1.0, vec![100.0], vec![90.0, 0.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_tier_entry_rejected() {
        let result = SwapResult::new(100.0, 90.0, 1.0, vec![-100.0], vec![90.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn nan_tier_entry_rejected() {
        let result = SwapResult::new(100.0, 90.0, 1.0, vec![f64::NAN], vec![90.0], vec![1.0]);
        assert!(result.is_err());
    }

    // -- Accessors ----------------------------------------------------------

    #[test]
    fn breakdown_vectors_align() {
        let r = valid();
        assert_eq!(r.tier_amounts_in().len(), 2);
        assert_eq!(r.tier_amounts_out().len(), 2);
        assert_eq!(r.tier_fee_amounts().len(), 2);
    }

    // -- effective_price ----------------------------------------------------

    #[test]
    fn effective_price_normal() {
        let r = valid();
        let Ok(p) = r.effective_price() else {
            panic!("expected Ok");
        };
        assert!((p.get() - 0.99).abs() < 1e-12);
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_contains_figures() {
        let s = format!("{}", valid());
        assert!(s.contains("1000"));
        assert!(s.contains("990"));
    }
}
