//! Execution price of the pool's trading pair.

use core::fmt;

use crate::error::AmmError;

/// Price of token0 denominated in token1, as a dimensionless ratio.
///
/// Wraps an `f64` value that must be finite and non-negative. Prices are
/// derived read-only views over tier state (`price = sqrt_price²` per
/// tier, liquidity-weighted across tiers for the blended figure); they
/// are never fed back into the swap math.
///
/// # Examples
///
/// ```
/// use strata_amm::domain::Price;
///
/// let price = Price::new(1.5);
/// assert!(price.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
