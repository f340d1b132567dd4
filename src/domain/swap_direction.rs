//! Trade direction and token-side descriptors.

use core::fmt;

/// One side of the pool's trading pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenSide {
    /// The base token of the pair.
    Token0,
    /// The quote token of the pair.
    Token1,
}

impl TokenSide {
    /// Returns the other side of the pair.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token0 => write!(f, "token0"),
            Self::Token1 => write!(f, "token1"),
        }
    }
}

/// Direction of a swap: which token the trader sells to the pool.
///
/// Selling token0 pushes every routed tier's price down; selling token1
/// pushes it up.
///
/// # Examples
///
/// ```
/// use strata_amm::domain::{SwapDirection, TokenSide};
///
/// let dir = SwapDirection::SellToken0;
/// assert_eq!(dir.input_side(), TokenSide::Token0);
/// assert_eq!(dir.output_side(), TokenSide::Token1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SwapDirection {
    /// The trader sells token0 and receives token1.
    SellToken0,
    /// The trader sells token1 and receives token0.
    SellToken1,
}

impl SwapDirection {
    /// Returns the side of the pair the pool receives (the sold token).
    #[must_use]
    pub const fn input_side(self) -> TokenSide {
        match self {
            Self::SellToken0 => TokenSide::Token0,
            Self::SellToken1 => TokenSide::Token1,
        }
    }

    /// Returns the side of the pair the pool pays out.
    #[must_use]
    pub const fn output_side(self) -> TokenSide {
        self.input_side().opposite()
    }

    /// Returns `true` if the trader is selling token0.
    #[must_use]
    pub const fn is_sell_token0(self) -> bool {
        matches!(self, Self::SellToken0)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SellToken0 => write!(f, "sell token0"),
            Self::SellToken1 => write!(f, "sell token1"),
        }
    }
}
