//! Square-root price representation of a tier's execution price.

use core::fmt;

use super::Price;
use crate::error::AmmError;

/// Square root of a tier's execution price.
///
/// Storing `√P` rather than `P` linearizes the curve's update formulas:
/// selling token1 moves `√P` by `Δy / L`, and selling token0 maps to a
/// single rational expression in `√P`. The wrapped `f64` must be finite
/// and strictly positive at all times; it changes only through a swap on
/// the owning tier.
///
/// # Examples
///
/// ```
/// use strata_amm::domain::SqrtPrice;
///
/// let sp = SqrtPrice::new(1.0).expect("valid sqrt price");
/// let price = sp.price().expect("squaring 1.0 stays finite");
/// assert!((price.get() - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SqrtPrice(f64);

impl SqrtPrice {
    /// Creates a new `SqrtPrice` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the value is not finite or
    /// not strictly positive.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AmmError::InvalidPrice(
                "sqrt price must be finite and strictly positive",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns the execution price `P = (√P)²`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the square overflows the
    /// `f64` range.
    pub fn price(&self) -> crate::error::Result<Price> {
        Price::new(self.0 * self.0)
    }
}

impl fmt::Display for SqrtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
