//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covers the engine's core guarantees over randomized pools:
//!
//! 1. **Amount conservation** — per-tier breakdowns sum to the aggregates.
//! 2. **Non-negative allocation** — no tier is ever assigned a negative share.
//! 3. **Fee identity** — each tier's net input equals `gross × gamma`.
//! 4. **Price movement direction** — routed tiers move with the trade side.
//! 5. **Fee growth monotonicity** — accumulators never decrease.
//! 6. **Split optimality** — routed tiers end at equal fee-adjusted prices.

use proptest::prelude::*;

use crate::config::TieredPoolConfig;
use crate::domain::{Liquidity, SqrtGamma, SqrtPrice, SwapDirection, SwapSpec};
use crate::math::{allocate, TierSnapshot};
use crate::pools::TieredPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn build_pool(tiers: &[(f64, f64)], sqrt_price: f64) -> TieredPool {
    let liquidity = tiers
        .iter()
        .map(|&(liq, _)| {
            let Ok(l) = Liquidity::new(liq) else {
                panic!("valid liquidity");
            };
            l
        })
        .collect();
    let sqrt_gamma = tiers
        .iter()
        .map(|&(_, sg)| {
            let Ok(g) = SqrtGamma::new(sg) else {
                panic!("valid sqrt gamma");
            };
            g
        })
        .collect();
    let Ok(sp) = SqrtPrice::new(sqrt_price) else {
        panic!("valid sqrt price");
    };
    let Ok(cfg) = TieredPoolConfig::new(liquidity, sqrt_gamma, sp) else {
        panic!("valid config");
    };
    let Ok(pool) = TieredPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn snapshots(pool: &TieredPool) -> Vec<TierSnapshot> {
    pool.tiers()
        .iter()
        .map(|t| TierSnapshot {
            liquidity: t.liquidity(),
            sqrt_price: t.sqrt_price(),
            sqrt_gamma: t.sqrt_gamma(),
        })
        .collect()
}

fn direction(sell_token0: bool) -> SwapDirection {
    if sell_token0 {
        SwapDirection::SellToken0
    } else {
        SwapDirection::SellToken1
    }
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Per-tier (liquidity, sqrt_gamma) pairs; 1 to 4 tiers per pool.
///
/// Liquidity spans four orders of magnitude and sqrt_gamma covers fee
/// rates from 0 to ~6%, wide enough to provoke tier exclusion.
fn tier_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec(
        (1_000.0f64..=10_000_000.0, 0.97f64..=1.0),
        1..=4,
    )
}

/// Initial sqrt prices away from extremes.
fn sqrt_price_strategy() -> impl Strategy<Value = f64> {
    0.5f64..=2.0
}

/// Swap sizes from dust to pool-moving.
fn amount_strategy() -> impl Strategy<Value = f64> {
    1e-3f64..=100_000.0
}

// ---------------------------------------------------------------------------
// Property 1: Amount conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_amount_conservation(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amount in amount_strategy(),
        sell_token0 in any::<bool>(),
    ) {
        let mut pool = build_pool(&tiers, sqrt_price);
        let Ok(spec) = SwapSpec::exact_in(amount) else {
            return Ok(());
        };
        let Ok(result) = pool.swap(spec, direction(sell_token0)) else {
            return Ok(());
        };

        let in_sum: f64 = result.tier_amounts_in().iter().sum();
        let out_sum: f64 = result.tier_amounts_out().iter().sum();
        let fee_sum: f64 = result.tier_fee_amounts().iter().sum();

        let tol = 1e-9 * (1.0 + amount.abs());
        prop_assert!((in_sum - result.amount_in()).abs() < tol);
        prop_assert!((out_sum - result.amount_out()).abs() < tol);
        prop_assert!((fee_sum - result.fee_amount()).abs() < tol);
    }

    // -----------------------------------------------------------------------
    // Property 2: Non-negative allocation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_allocation_never_negative(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amount in prop::option::of(amount_strategy()),
        sell_token0 in any::<bool>(),
    ) {
        let pool = build_pool(&tiers, sqrt_price);
        // `None` exercises the zero-input edge the swap API cannot reach.
        let total = amount.unwrap_or(0.0);
        let Ok(allocation) = allocate(&snapshots(&pool), direction(sell_token0), total) else {
            return Ok(());
        };
        for &amt in allocation.amounts() {
            prop_assert!(amt >= 0.0);
        }
        prop_assert!(allocation.active_count() >= 1);
    }

    // -----------------------------------------------------------------------
    // Property 3: Fee identity per routed tier
    // -----------------------------------------------------------------------

    #[test]
    fn prop_fee_identity(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amount in amount_strategy(),
        sell_token0 in any::<bool>(),
    ) {
        let mut pool = build_pool(&tiers, sqrt_price);
        let gammas: Vec<f64> = pool
            .tiers()
            .iter()
            .map(|t| t.sqrt_gamma().gamma())
            .collect();
        let Ok(spec) = SwapSpec::exact_in(amount) else {
            return Ok(());
        };
        let Ok(result) = pool.swap(spec, direction(sell_token0)) else {
            return Ok(());
        };
        for i in 0..result.tier_amounts_in().len() {
            let gross = result.tier_amounts_in()[i];
            let fee = result.tier_fee_amounts()[i];
            let net = gross - fee;
            prop_assert!((net - gross * gammas[i]).abs() <= 1e-9 * (1.0 + gross));
        }
    }

    // -----------------------------------------------------------------------
    // Property 4: Price movement direction
    // -----------------------------------------------------------------------

    #[test]
    fn prop_price_moves_with_trade_side(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amount in 1.0f64..=100_000.0,
        sell_token0 in any::<bool>(),
    ) {
        let mut pool = build_pool(&tiers, sqrt_price);
        let before: Vec<f64> = pool.tiers().iter().map(|t| t.sqrt_price().get()).collect();
        let Ok(spec) = SwapSpec::exact_in(amount) else {
            return Ok(());
        };
        let Ok(result) = pool.swap(spec, direction(sell_token0)) else {
            return Ok(());
        };
        for (i, tier) in pool.tiers().iter().enumerate() {
            let share = result.tier_amounts_in()[i];
            if share == 0.0 {
                prop_assert!((tier.sqrt_price().get() - before[i]).abs() < f64::EPSILON);
            } else if share > 1e-6 {
                // Shares at rounding scale may not move the price by a
                // representable amount; strictness is asserted above it.
                if sell_token0 {
                    prop_assert!(tier.sqrt_price().get() < before[i]);
                } else {
                    prop_assert!(tier.sqrt_price().get() > before[i]);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Property 5: Fee growth monotonicity over swap sequences
    // -----------------------------------------------------------------------

    #[test]
    fn prop_fee_growth_monotone(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amounts in prop::collection::vec(amount_strategy(), 1..8),
        sell_token0 in any::<bool>(),
    ) {
        let mut pool = build_pool(&tiers, sqrt_price);
        let mut previous: Vec<(f64, f64)> = pool
            .tiers()
            .iter()
            .map(|t| (t.fee_growth_token0(), t.fee_growth_token1()))
            .collect();
        for (step, amount) in amounts.iter().enumerate() {
            let Ok(spec) = SwapSpec::exact_in(*amount) else {
                return Ok(());
            };
            // Alternate directions so both accumulators see traffic.
            let dir = direction(sell_token0 ^ (step % 2 == 1));
            if pool.swap(spec, dir).is_err() {
                return Ok(());
            }
            for (i, tier) in pool.tiers().iter().enumerate() {
                prop_assert!(tier.fee_growth_token0() >= previous[i].0);
                prop_assert!(tier.fee_growth_token1() >= previous[i].1);
                previous[i] = (tier.fee_growth_token0(), tier.fee_growth_token1());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Property 6: Routed tiers end at equal fee-adjusted sqrt prices
    // -----------------------------------------------------------------------

    #[test]
    fn prop_routed_tiers_equalize_marginal_price(
        tiers in tier_strategy(),
        sqrt_price in sqrt_price_strategy(),
        amount in 10.0f64..=100_000.0,
        sell_token0 in any::<bool>(),
    ) {
        let mut pool = build_pool(&tiers, sqrt_price);
        let Ok(spec) = SwapSpec::exact_in(amount) else {
            return Ok(());
        };
        let Ok(result) = pool.swap(spec, direction(sell_token0)) else {
            return Ok(());
        };
        // The optimum equalizes √P·√gamma (selling token0) or √P/√gamma
        // (selling token1) across every tier with a positive share.
        let marks: Vec<f64> = pool
            .tiers()
            .iter()
            .enumerate()
            .filter(|&(i, _)| result.tier_amounts_in()[i] > 1e-6)
            .map(|(_, t)| {
                if sell_token0 {
                    t.sqrt_price().get() * t.sqrt_gamma().get()
                } else {
                    t.sqrt_price().get() / t.sqrt_gamma().get()
                }
            })
            .collect();
        if let Some((&first, rest)) = marks.split_first() {
            for &mark in rest {
                prop_assert!((mark - first).abs() <= 1e-6 * first);
            }
        }
    }
}
