//! Swap operation specification.

use core::fmt;

use crate::error::AmmError;

/// Specifies what constraint drives a swap: either an exact input amount
/// or an exact output amount.
///
/// # Invariants
///
/// The contained amount is always finite and strictly positive.
///
/// This engine executes exact-input orders only. `ExactOut` can still be
/// constructed so that callers probing for exact-output support receive a
/// deliberate [`AmmError::UnsupportedSwap`](crate::error::AmmError) from
/// the pool instead of a silently misinterpreted order.
///
/// # Examples
///
/// ```
/// use strata_amm::domain::SwapSpec;
///
/// let spec = SwapSpec::exact_in(1_000.0);
/// assert!(spec.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SwapSpec {
    /// The caller provides an exact input amount.
    ExactIn {
        /// The fixed input amount (finite, strictly positive).
        amount_in: f64,
    },
    /// The caller requests an exact output amount.
    ExactOut {
        /// The desired output amount (finite, strictly positive).
        amount_out: f64,
    },
}

impl SwapSpec {
    /// Creates an exact-input swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is not finite or
    /// not strictly positive.
    pub fn exact_in(amount: f64) -> crate::error::Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AmmError::InvalidQuantity(
                "swap amount must be finite and strictly positive",
            ));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is not finite or
    /// not strictly positive.
    pub fn exact_out(amount: f64) -> crate::error::Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AmmError::InvalidQuantity(
                "swap amount must be finite and strictly positive",
            ));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Returns `true` if this is an exact-input specification.
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    /// Extracts the amount regardless of variant.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
