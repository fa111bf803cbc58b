//! Property-based tests using `proptest` for pricing invariants.
//!
//! 1. **Decimal canonicalization**: rendering then re-parsing is stable.
//! 2. **Fee conservation**: sequential fee deduction never creates or
//!    loses units.
//! 3. **Balanced invariant**: `D` of a balanced stable pool is the sum.
//! 4. **Quote monotonicity**: more input never yields less output.
//! 5. **Deposit ratio**: sized deposits stay within caps and pool ratio.
//! 6. **Claimable bounds**: vested balance never exceeds recorded value.
//! 7. **Empty-pool guard**: quoting an empty pool always fails.

#![allow(clippy::panic)]

use num_bigint::BigInt;
use proptest::prelude::*;

use super::test_support::{build, constant_product_pool, cp_config, fees, stable_config};
use super::PricingEngine;
use crate::domain::{
    AccountAddress, Amount, Decimals, FeeSide, PoolId, PositionSnapshot, ScaledDecimal, UnavailableReason,
};
use crate::error::AmmError;
use crate::math::StableSwapSolver;
use crate::position::PositionAccountant;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Amplification values for stable pools in [1, 5_000].
fn amplification_strategy() -> impl Strategy<Value = u64> {
    1u64..=5_000u64
}

/// Fee rates up to 1%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=100u32
}

fn side_strategy() -> impl Strategy<Value = FeeSide> {
    prop_oneof![Just(FeeSide::X), Just(FeeSide::Y)]
}

// ---------------------------------------------------------------------------
// Property 1: Decimal canonicalization
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_decimal_render_parse_is_stable(
        int in 0u64..=1_000_000_000_000u64,
        frac in "[0-9]{0,12}",
    ) {
        let input = if frac.is_empty() { int.to_string() } else { format!("{int}.{frac}") };
        let Ok(parsed) = ScaledDecimal::parse(&input) else {
            panic!("generated decimal should parse: {input}");
        };
        let rendered = parsed.to_string();
        let Ok(reparsed) = ScaledDecimal::parse(&rendered) else {
            panic!("rendered decimal should parse: {rendered}");
        };
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(reparsed.to_string(), rendered);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Fee conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_side_fees_conserve_units(
        amount in 0u128..=u128::from(u64::MAX),
        admin in 0u32..=10_000u32,
        holder in 0u32..=10_000u32,
    ) {
        let schedule = fees(admin, 0, holder, 0, FeeSide::X);
        let (net, a, h) = schedule.deduct_side_fees(Amount::new(amount));
        prop_assert_eq!(net.get() + a.get() + h.get(), amount);
    }

    #[test]
    fn prop_quote_fees_stay_below_input(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        admin in fee_strategy(),
        lp in fee_strategy(),
        holder in fee_strategy(),
        side in side_strategy(),
    ) {
        let pool = build(&cp_config(rx, ry).with_fees(fees(admin, lp, holder, 0, side)));
        let dx = Amount::new((rx / 100).max(1));
        let Ok(q) = PricingEngine::default().quote_x_to_y(&pool, dx) else {
            panic!("quote on a live pool should succeed");
        };
        prop_assert!(q.net_input() <= q.amount_in());
        prop_assert!(q.amount_out() <= q.curve_output());
        prop_assert!(q.amount_out() < pool.y());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Balanced invariant
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_balanced_d_is_sum(
        reserve in reserve_strategy(),
        amp in amplification_strategy(),
    ) {
        let r = BigInt::from(reserve);
        let Ok(d) = StableSwapSolver::default().compute_d(&r, &r, amp) else {
            panic!("default solver never errors");
        };
        prop_assert!(d.converged());
        prop_assert_eq!(d.into_value(), BigInt::from(reserve * 2));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Quote monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_constant_product_monotone(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        a in 1u128..=1_000_000_000u128,
        b in 1u128..=1_000_000_000u128,
        lp in fee_strategy(),
        side in side_strategy(),
    ) {
        let pool = build(&cp_config(rx, ry).with_fees(fees(5, lp, 5, 0, side)));
        let engine = PricingEngine::default();
        let (small, large) = (a.min(b), a.max(b));
        let (Ok(qs), Ok(ql)) = (
            engine.quote_x_to_y(&pool, Amount::new(small)),
            engine.quote_x_to_y(&pool, Amount::new(large)),
        ) else {
            panic!("quotes on a live pool should succeed");
        };
        prop_assert!(qs.amount_out() <= ql.amount_out());
    }

    #[test]
    fn prop_stable_monotone(
        reserve in reserve_strategy(),
        amp in amplification_strategy(),
        fraction in 1u128..=1_000u128,
    ) {
        let pool = build(&stable_config(reserve, reserve, amp));
        let engine = PricingEngine::default();
        let small = (reserve * fraction / 10_000).max(1);
        let large = small * 2 + 1_000;
        let (Ok(qs), Ok(ql)) = (
            engine.quote_y_to_x(&pool, Amount::new(small)),
            engine.quote_y_to_x(&pool, Amount::new(large)),
        ) else {
            panic!("quotes on a live pool should succeed");
        };
        prop_assert!(
            qs.amount_out() < ql.amount_out(),
            "small={} -> {}, large={} -> {}",
            small, qs.amount_out(), large, ql.amount_out()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Deposit ratio
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_respects_caps_and_ratio(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        x_max in 1u128..=1_000_000_000_000u128,
        y_max in 1u128..=1_000_000_000_000u128,
    ) {
        let pool = constant_product_pool(rx, ry);
        let Ok((x, y)) = PricingEngine::default()
            .deposit_amounts(&pool, Amount::new(x_max), Amount::new(y_max))
        else {
            panic!("caps within u64 should size a deposit");
        };
        prop_assert!(x.get() <= x_max);
        prop_assert!(y.get() <= y_max);
        // Truncation keeps x / y within one reserve unit of rx / ry.
        let skew = (x.get() * ry).abs_diff(y.get() * rx);
        prop_assert!(skew < rx.max(ry), "skew {} for x={} y={}", skew, x, y);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Claimable bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_claimable_within_value(
        value in 0u128..=u128::from(u64::MAX),
        whole in 0u8..=2u8,
        frac in "[0-9]{0,9}",
    ) {
        let Ok(r) = ScaledDecimal::parse(&format!("{whole}.{frac}")) else {
            panic!("generated ratio should parse");
        };
        let position = PositionSnapshot::new(
            AccountAddress::from_bytes([1u8; 32]),
            PoolId::from_bytes([2u8; 32]),
            Amount::new(value),
        )
        .partial(r);
        prop_assert!(PositionAccountant.claimable_balance(&position).get() <= value);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Empty-pool guard
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_pool_never_quotes(
        reserve in 0u128..=1_000_000u128,
        x_side_empty in any::<bool>(),
        amount in 1u128..=1_000_000u128,
        amp in prop::option::of(amplification_strategy()),
    ) {
        let (rx, ry) = if x_side_empty { (0, reserve) } else { (reserve, 0) };
        let pool = match amp {
            Some(a) => build(&stable_config(rx, ry, a)),
            None => constant_product_pool(rx, ry),
        };
        let engine = PricingEngine::default();
        prop_assert_eq!(
            engine.quote_x_to_y(&pool, Amount::new(amount)),
            Err(AmmError::PoolUnavailable(UnavailableReason::Empty))
        );
        prop_assert_eq!(engine.spot_price(&pool, Decimals::ZERO, Decimals::ZERO), 0.0);
    }
}
