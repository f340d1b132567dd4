//! Multi-tier pool quickstart.
//!
//! Demonstrates constructing a two-tier full-range pool, executing a
//! swap routed across both tiers, and inspecting the per-tier breakdown
//! and fee growth accounting.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use strata_amm::config::TieredPoolConfig;
use strata_amm::domain::{Liquidity, SqrtGamma, SqrtPrice, SwapDirection, SwapSpec};
use strata_amm::pools::TieredPool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Strata AMM: multi-tier full-range pool ===\n");

    // ── 1. Configure two tiers sharing one market ───────────────────────
    let config = TieredPoolConfig::new(
        vec![Liquidity::new(10_000.0)?, Liquidity::new(10_000.0)?],
        vec![SqrtGamma::new(0.9985)?, SqrtGamma::new(0.9997)?],
        SqrtPrice::new(1.0)?,
    )?;

    for (i, sg) in config.sqrt_gamma().iter().enumerate() {
        println!("Tier {i}: liquidity {}, fee {:.2} bps", config.liquidity()[i], sg.fee_bps());
    }

    // ── 2. Create the pool ──────────────────────────────────────────────
    let mut pool = TieredPool::from_config(&config)?;
    println!("\nCombined price at genesis: {}", pool.combined_price()?);

    // ── 3. Sell 1 000 token0 across both tiers ──────────────────────────
    let spec = SwapSpec::exact_in(1_000.0)?;
    let result = pool.swap(spec, SwapDirection::SellToken0)?;

    println!("\n--- Swap: sell 1 000 token0 ---");
    println!("  Amount in:   {}", result.amount_in());
    println!("  Amount out:  {}", result.amount_out());
    println!("  Fee paid:    {}", result.fee_amount());
    println!("  Blended fee: {:.4} bps", result.fee_bps());
    for i in 0..pool.tier_count() {
        println!(
            "  Tier {i}: in {:.4}, out {:.4}, fee {:.6}",
            result.tier_amounts_in()[i],
            result.tier_amounts_out()[i],
            result.tier_fee_amounts()[i],
        );
    }

    // ── 4. Inspect post-trade state ─────────────────────────────────────
    println!("\nCombined price after swap: {}", pool.combined_price()?);
    for (i, tier) in pool.tiers().iter().enumerate() {
        println!(
            "  Tier {i}: price {:.8}, fee growth token0 {:.10}",
            tier.price()?,
            tier.fee_growth_token0(),
        );
    }

    // ── 5. A small order skips the expensive tier entirely ──────────────
    let result = pool.swap(SwapSpec::exact_in(5.0)?, SwapDirection::SellToken0)?;
    println!("\n--- Swap: sell 5 token0 ---");
    for i in 0..pool.tier_count() {
        println!("  Tier {i}: in {:.4}", result.tier_amounts_in()[i]);
    }
    println!("  (the high-fee tier is uneconomical at this size)");

    println!("\n=== Done ===");
    Ok(())
}
