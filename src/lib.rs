//! # Strata AMM
//!
//! Multi-tier full-range AMM engine: one trading pair, several parallel
//! liquidity tiers, one optimally routed swap.
//!
//! A pool holds a set of *tiers* — full-range liquidity slots that share
//! a conceptual market but each carry their own depth, fee rate, and
//! independently tracked sqrt price. An exact-input swap is split across
//! all tiers at once so that every routed tier ends at the same marginal
//! price impact (the Lagrange-multiplier optimum for this curve family),
//! with tiers that would be uneconomical at the given trade size excluded
//! by an iterative feasibility repair.
//!
//! The engine is a pure computational core: it owns the authoritative
//! in-memory state of one pool and is invoked synchronously per swap.
//! Persistence, transport, token settlement, and tier governance belong
//! to the host.
//!
//! # Quick Start
//!
//! ```rust
//! use strata_amm::config::TieredPoolConfig;
//! use strata_amm::domain::{Liquidity, SqrtGamma, SqrtPrice, SwapDirection, SwapSpec};
//! use strata_amm::pools::TieredPool;
//!
//! // Two tiers of equal depth: one at ≈30 bps, one at ≈6 bps.
//! let config = TieredPoolConfig::new(
//!     vec![
//!         Liquidity::new(10_000.0).expect("valid liquidity"),
//!         Liquidity::new(10_000.0).expect("valid liquidity"),
//!     ],
//!     vec![
//!         SqrtGamma::new(0.9985).expect("valid retention"),
//!         SqrtGamma::new(0.9997).expect("valid retention"),
//!     ],
//!     SqrtPrice::new(1.0).expect("valid price"),
//! )
//! .expect("valid config");
//!
//! let mut pool = TieredPool::from_config(&config).expect("pool created");
//!
//! // Sell 1 000 token0 across both tiers.
//! let spec = SwapSpec::exact_in(1_000.0).expect("positive amount");
//! let result = pool.swap(spec, SwapDirection::SellToken0).expect("swap ok");
//!
//! assert!(result.amount_out() > 0.0);
//! assert!(result.amount_out() < result.amount_in());
//! // The blended fee lands between the two tiers' own rates.
//! assert!(result.fee_bps() > 5.9 && result.fee_bps() < 30.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  constructs TieredPoolConfig, calls swap()
//! └──────┬───────┘
//!        │ from_config / swap
//!        ▼
//! ┌──────────────┐
//! │  TieredPool   │  per-tier state + swap orchestration
//! └──────┬───────┘
//!        │ allocate / sqrt-price algebra
//!        ▼
//! ┌──────────────┐
//! │     math      │  pure: cross-tier split, closed-form price updates
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    domain     │  Liquidity, SqrtPrice, SqrtGamma, SwapResult, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Liquidity`](domain::Liquidity), [`SqrtPrice`](domain::SqrtPrice), [`SqrtGamma`](domain::SqrtGamma), [`SwapResult`](domain::SwapResult), … |
//! | [`config`] | Declarative pool blueprint: [`TieredPoolConfig`](config::TieredPoolConfig) |
//! | [`math`] | Pure formulas: [`allocate`](math::allocate), [`sqrt_price_after_input`](math::sqrt_price_after_input), [`amount_delta`](math::amount_delta) |
//! | [`pools`] | [`TieredPool`](pools::TieredPool) — stateful pool and swap entry point |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |
//!
//! # Numeric Model
//!
//! All arithmetic is ordinary IEEE 754 `f64`. The engine targets
//! off-chain simulation and analysis; a port wanting bit-exact
//! determinism must substitute a fixed-point type across the domain,
//! math, and pool layers and re-derive its tolerance bounds.
//!
//! # Threading
//!
//! A [`TieredPool`](pools::TieredPool) has no interior synchronization.
//! Each swap is a single synchronous read-modify-write over the tier
//! arrays, so concurrent use requires external mutual exclusion.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
