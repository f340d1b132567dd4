//! Square-root fee retention factor of a tier.

use core::fmt;

use crate::error::AmmError;

/// Basis-point scale (10 000 = 100%).
const BPS_SCALE: f64 = 10_000.0;

/// Square root of a tier's fee retention factor.
///
/// `gamma = sqrt_gamma²` is the fraction of the input amount that survives
/// the fee, so `1 − gamma` is the tier's fee rate. The wrapped `f64` must
/// lie in `(0, 1]`: a value of `1.0` means a fee-free tier, while values
/// at or below zero would make every swap consume its whole input and are
/// rejected. Immutable after pool construction.
///
/// # Examples
///
/// ```
/// use strata_amm::domain::SqrtGamma;
///
/// let sg = SqrtGamma::new(0.9985).expect("valid retention factor");
/// // 1 − 0.9985² ≈ 0.002998 → ≈ 30 bps
/// assert!((sg.fee_bps() - 29.977_5).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SqrtGamma(f64);

impl SqrtGamma {
    /// Fee-free tier: the whole input survives.
    pub const ONE: Self = Self(1.0);

    /// Creates a new `SqrtGamma` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the value is not finite or
    /// falls outside `(0, 1]`.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(AmmError::InvalidFee(
                "sqrt gamma must be finite and within (0, 1]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns the fee retention factor `gamma = (√gamma)²`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.0 * self.0
    }

    /// Returns the fee rate `1 − gamma` as a fraction of the input.
    #[must_use]
    pub fn fee_fraction(&self) -> f64 {
        1.0 - self.gamma()
    }

    /// Returns the fee rate expressed in basis points.
    #[must_use]
    pub fn fee_bps(&self) -> f64 {
        self.fee_fraction() * BPS_SCALE
    }
}

impl fmt::Display for SqrtGamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
