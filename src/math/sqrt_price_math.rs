//! Closed-form sqrt-price update and amount formulas for a single tier.
//!
//! These helpers implement the full-range constant-product relationship
//! in the sqrt-price representation, where `L` is the tier's virtual
//! liquidity:
//!
//! - selling token0: `√P1 = L·√P0 / (L + Δx·√P0)`
//! - selling token1: `√P1 = √P0 + Δy / L`
//! - token0 owed:    `Δx = L·(√Pa − √Pb) / (√Pa·√Pb)`
//! - token1 owed:    `Δy = L·(√Pb − √Pa)`
//!
//! # Functions
//!
//! - [`sqrt_price_after_input`] — the post-trade sqrt price after
//!   absorbing a fee-adjusted input amount.
//! - [`amount_delta`] — the amount of one token corresponding to a move
//!   between two sqrt prices.
//!
//! Both are pure: they read no pool state and have no side effects.

use crate::domain::{Liquidity, SqrtPrice, SwapDirection, TokenSide};
use crate::error::AmmError;

/// Computes the sqrt price a tier lands on after absorbing `amount_in`
/// of the sold token (already net of fees).
///
/// Selling token0 strictly decreases the sqrt price, asymptotically
/// approaching zero as the input grows; selling token1 strictly
/// increases it without bound.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount_in` is negative or not
///   finite.
/// - [`AmmError::InvalidPrice`] if the updated sqrt price leaves the
///   representable positive range (an input large enough to underflow
///   the price to zero, or overflow it to infinity).
///
/// # Examples
///
/// ```
/// use strata_amm::domain::{Liquidity, SqrtPrice, SwapDirection};
/// use strata_amm::math::sqrt_price_after_input;
///
/// let liq = Liquidity::new(10_000.0).expect("valid liquidity");
/// let sp = SqrtPrice::new(1.0).expect("valid sqrt price");
///
/// let down = sqrt_price_after_input(SwapDirection::SellToken0, sp, liq, 100.0)
///     .expect("valid update");
/// assert!(down < sp);
/// ```
#[must_use = "this returns the updated sqrt price and does not modify state"]
pub fn sqrt_price_after_input(
    direction: SwapDirection,
    sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    amount_in: f64,
) -> crate::error::Result<SqrtPrice> {
    if !amount_in.is_finite() || amount_in < 0.0 {
        return Err(AmmError::InvalidQuantity(
            "input amount must be finite and non-negative",
        ));
    }
    let sp = sqrt_price.get();
    let liq = liquidity.get();
    let next = match direction {
        SwapDirection::SellToken0 => (liq * sp) / (liq + amount_in * sp),
        SwapDirection::SellToken1 => sp + amount_in / liq,
    };
    SqrtPrice::new(next)
}

/// Computes the amount of `side` corresponding to a sqrt-price move from
/// `sqrt_price_a` to `sqrt_price_b` at the given liquidity.
///
/// - [`TokenSide::Token0`]: `L·(√Pa − √Pb) / (√Pa·√Pb)`
/// - [`TokenSide::Token1`]: `L·(√Pb − √Pa)`
///
/// The result is the magnitude the pool pays out. Callers must pass the
/// two sqrt prices in the order that yields a non-negative result for
/// the side actually being withdrawn; for an exact-input swap that means
/// passing the post-trade price first and the pre-trade price second.
#[must_use = "this returns the computed amount and does not modify state"]
pub fn amount_delta(
    side: TokenSide,
    sqrt_price_a: SqrtPrice,
    sqrt_price_b: SqrtPrice,
    liquidity: Liquidity,
) -> f64 {
    let a = sqrt_price_a.get();
    let b = sqrt_price_b.get();
    let liq = liquidity.get();
    match side {
        TokenSide::Token0 => liq * (a - b) / (a * b),
        TokenSide::Token1 => liq * (b - a),
    }
}
