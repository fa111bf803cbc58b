//! Swap quotes, the fee pipeline, and slippage bounds.
//!
//! # Fee order
//!
//! ```text
//! 1. fee side == input side:  input  -= admin;  input  -= holder
//! 2. always:                  input  -= lp
//! 3. output = curve(input)
//! 4. fee side == output side: output -= admin;  output -= holder
//! ```
//!
//! Each fee is `amount · bps / 10_000` on the running remainder, truncated.

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::{debug, trace};

use super::PricingEngine;
use crate::domain::{
    Amount, CurveKind, PoolSnapshot, Rounding, SwapDirection, SwapQuote, TokenAddress,
    UnavailableReason,
};
use crate::error::AmmError;

/// Fixed-point precision of the slippage factor.
const SLIPPAGE_PRECISION: f64 = 1e9;

impl PricingEngine {
    /// Quotes selling `dx` of X for Y.
    ///
    /// # Errors
    ///
    /// See [`quote`](Self::quote).
    pub fn quote_x_to_y(&self, pool: &PoolSnapshot, dx: Amount) -> Result<SwapQuote, AmmError> {
        self.quote(pool, SwapDirection::Forward, dx)
    }

    /// Quotes selling `dy` of Y for X.
    ///
    /// # Errors
    ///
    /// See [`quote`](Self::quote).
    pub fn quote_y_to_x(&self, pool: &PoolSnapshot, dy: Amount) -> Result<SwapQuote, AmmError> {
        self.quote(pool, SwapDirection::Reverse, dy)
    }

    /// Quotes selling `amount` of `from` for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolUnavailable`] with
    /// [`UnavailableReason::Unknown`] if the pool does not trade this pair,
    /// otherwise see [`quote`](Self::quote).
    pub fn quote_route(
        &self,
        pool: &PoolSnapshot,
        from: TokenAddress,
        to: TokenAddress,
        amount: Amount,
    ) -> Result<SwapQuote, AmmError> {
        let direction = self.swap_direction(pool, from, to)?;
        self.quote(pool, direction, amount)
    }

    /// Previews a swap exactly as settlement would execute it.
    ///
    /// A frozen pool can still be quoted; callers that intend to execute
    /// should check [`is_available_for_swap`](Self::is_available_for_swap).
    /// A quote whose output is zero is returned as not executable rather
    /// than as an error.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero or exceeds
    ///   `u64::MAX`.
    /// - [`AmmError::PoolUnavailable`] with [`UnavailableReason::Empty`] if
    ///   either reserve is zero.
    /// - [`AmmError::NewtonRaphsonNonConvergence`] under a strict solver.
    pub fn quote(
        &self,
        pool: &PoolSnapshot,
        direction: SwapDirection,
        amount: Amount,
    ) -> Result<SwapQuote, AmmError> {
        if amount.is_zero() {
            debug!(pool = %pool.id(), "rejected quote for zero amount");
            return Err(AmmError::InvalidQuantity("swap amount must be positive"));
        }
        if let Err(e) = amount.validate_on_chain() {
            debug!(pool = %pool.id(), %amount, "rejected quote above on-chain bound");
            return Err(e);
        }
        if pool.is_empty() {
            debug!(pool = %pool.id(), "rejected quote on empty pool");
            return Err(AmmError::PoolUnavailable(UnavailableReason::Empty));
        }

        let fees = pool.fees();
        let on_input = fees.side().is_input_of(direction);

        let (after_side, mut admin_fee, mut holder_fee) = if on_input {
            fees.deduct_side_fees(amount)
        } else {
            (amount, Amount::ZERO, Amount::ZERO)
        };
        let (net_input, lp_fee) = fees.lp().deduct_from(after_side);

        let curve_output = self.curve_output(pool, direction, net_input)?;

        let amount_out = if on_input {
            curve_output
        } else {
            let (net, admin, holder) = fees.deduct_side_fees(curve_output);
            admin_fee = admin;
            holder_fee = holder;
            net
        };

        trace!(
            pool = %pool.id(),
            ?direction,
            amount_in = %amount,
            %admin_fee,
            %holder_fee,
            %lp_fee,
            %net_input,
            %curve_output,
            %amount_out,
            "swap quoted"
        );

        Ok(SwapQuote::new(
            direction,
            amount,
            admin_fee,
            holder_fee,
            lp_fee,
            on_input,
            net_input,
            curve_output,
            amount_out,
        ))
    }

    /// Output of the pool curve for a net input, clamped at zero.
    fn curve_output(
        &self,
        pool: &PoolSnapshot,
        direction: SwapDirection,
        net_input: Amount,
    ) -> Result<Amount, AmmError> {
        if net_input.is_zero() {
            return Ok(Amount::ZERO);
        }
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::Forward => (pool.x(), pool.y()),
            SwapDirection::Reverse => (pool.y(), pool.x()),
        };

        match pool.curve() {
            CurveKind::ConstantProduct => {
                let denominator = reserve_in
                    .checked_add(&net_input)
                    .ok_or(AmmError::Overflow("constant product denominator"))?;
                reserve_out
                    .mul_div(&net_input, &denominator, Rounding::Down)
                    .ok_or(AmmError::Overflow("constant product output"))
            }
            CurveKind::Stable(params) => {
                let (scale_in, scale_out) = match direction {
                    SwapDirection::Forward => (params.x_scale(), params.y_scale()),
                    SwapDirection::Reverse => (params.y_scale(), params.x_scale()),
                };
                let outcome = self.solver().compute_y_scaled(
                    &net_input.to_bigint(),
                    &reserve_in.to_bigint(),
                    &reserve_out.to_bigint(),
                    params.amplification(),
                    &BigInt::from(scale_in),
                    &BigInt::from(scale_out),
                )?;
                if !outcome.value().is_positive() {
                    return Ok(Amount::ZERO);
                }
                Amount::from_bigint(outcome.value()).ok_or(AmmError::Overflow("stable output"))
            }
        }
    }

    /// Lowest acceptable output for `amount` under a slippage tolerance:
    /// `amount · floor((1 − slippage) · 10⁹) / 10⁹`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] unless `slippage` is a finite
    /// number within `0.0..=1.0`.
    pub fn min_output_amount(amount: Amount, slippage: f64) -> Result<Amount, AmmError> {
        if !slippage.is_finite() || !(0.0..=1.0).contains(&slippage) {
            return Err(AmmError::InvalidQuantity(
                "slippage must be a finite number within 0..=1",
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let factor = ((1.0 - slippage) * SLIPPAGE_PRECISION).floor() as u128;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let precision = Amount::new(SLIPPAGE_PRECISION as u128);
        amount
            .mul_div(&Amount::new(factor), &precision, Rounding::Down)
            .ok_or(AmmError::Overflow("minimum output"))
    }

    /// Minimum output for selling `dx` of X under `slippage`.
    ///
    /// # Errors
    ///
    /// Any error of [`quote`](Self::quote) or
    /// [`min_output_amount`](Self::min_output_amount).
    pub fn quote_x_to_y_min_output(
        &self,
        pool: &PoolSnapshot,
        dx: Amount,
        slippage: f64,
    ) -> Result<Amount, AmmError> {
        let quote = self.quote_x_to_y(pool, dx)?;
        Self::min_output_amount(quote.amount_out(), slippage)
    }

    /// Minimum output for selling `dy` of Y under `slippage`.
    ///
    /// # Errors
    ///
    /// Any error of [`quote`](Self::quote) or
    /// [`min_output_amount`](Self::min_output_amount).
    pub fn quote_y_to_x_min_output(
        &self,
        pool: &PoolSnapshot,
        dy: Amount,
        slippage: f64,
    ) -> Result<Amount, AmmError> {
        let quote = self.quote_y_to_x(pool, dy)?;
        Self::min_output_amount(quote.amount_out(), slippage)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{PricingConfig, SolverConfig};
    use crate::domain::{FeeSide, StableParams};
    use crate::pricing::test_support::{
        addr, build, constant_product_pool, cp_config, fees, stable_config, stable_pool,
    };

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    // -- input validation ---------------------------------------------------

    #[test]
    fn zero_amount_rejected() {
        let pool = constant_product_pool(1_000, 1_000);
        assert!(matches!(
            engine().quote_x_to_y(&pool, Amount::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn amount_above_u64_rejected() {
        let pool = constant_product_pool(1_000, 1_000);
        let over = Amount::new(u128::from(u64::MAX) + 1);
        assert!(matches!(
            engine().quote_y_to_x(&pool, over),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn empty_pool_rejected() {
        let pool = constant_product_pool(0, 1_000);
        assert_eq!(
            engine().quote_x_to_y(&pool, Amount::new(10)),
            Err(AmmError::PoolUnavailable(UnavailableReason::Empty))
        );
    }

    #[test]
    fn frozen_pool_can_still_be_quoted() {
        let pool = build(&cp_config(1_000, 1_000).with_frozen(true));
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out(), Amount::new(90));
    }

    // -- constant product ---------------------------------------------------

    #[test]
    fn constant_product_reference_trade() {
        let pool = constant_product_pool(1_000, 1_000);
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.curve_output(), Amount::new(90));
        assert_eq!(q.amount_out(), Amount::new(90));
        assert!(q.is_executable());
    }

    #[test]
    fn dust_trade_is_not_executable() {
        let pool = constant_product_pool(1_000_000, 10);
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out(), Amount::ZERO);
        assert!(!q.is_executable());
    }

    #[test]
    fn route_resolves_direction() {
        let pool = constant_product_pool(1_000, 4_000);
        let Ok(q) = engine().quote_route(&pool, addr(2), addr(1), Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.direction(), SwapDirection::Reverse);
        // 1000 · 400 / 4400
        assert_eq!(q.amount_out(), Amount::new(90));
        assert_eq!(
            engine().quote_route(&pool, addr(1), addr(9), Amount::new(1)),
            Err(AmmError::PoolUnavailable(UnavailableReason::Unknown))
        );
    }

    // -- fee pipeline -------------------------------------------------------

    #[test]
    fn input_side_fees_truncate_sequentially() {
        let pool = build(&cp_config(1_000_000, 1_000_000).with_fees(fees(100, 30, 100, 0, FeeSide::X)));
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert!(q.side_fees_on_input());
        assert_eq!(q.admin_fee(), Amount::new(100));
        assert_eq!(q.holder_fee(), Amount::new(99));
        assert_eq!(q.lp_fee(), Amount::new(29));
        assert_eq!(q.net_input(), Amount::new(9_772));
        assert_eq!(q.amount_out(), Amount::new(9_677));
    }

    #[test]
    fn reference_fee_order_on_small_pool() {
        // 1000 → admin 10 → holder 0 → lp 4 (990 · 50 bp = 4.95)
        let pool = build(&cp_config(1_000, 1_000).with_fees(fees(100, 50, 0, 0, FeeSide::X)));
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.admin_fee(), Amount::new(10));
        assert_eq!(q.holder_fee(), Amount::ZERO);
        assert_eq!(q.lp_fee(), Amount::new(4));
        assert_eq!(q.net_input(), Amount::new(986));
        // 1000 · 986 / 1986
        assert_eq!(q.amount_out(), Amount::new(496));

        // with a 100 bp holder fee: 990 → holder 9 (9.9) → lp 4 (4.905)
        let pool = build(&cp_config(1_000, 1_000).with_fees(fees(100, 50, 100, 0, FeeSide::X)));
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.admin_fee(), Amount::new(10));
        assert_eq!(q.holder_fee(), Amount::new(9));
        assert_eq!(q.lp_fee(), Amount::new(4));
        assert_eq!(q.net_input(), Amount::new(977));
        // 1000 · 977 / 1977
        assert_eq!(q.amount_out(), Amount::new(494));
    }

    #[test]
    fn output_side_fees_apply_after_curve() {
        let pool = build(&cp_config(1_000_000, 1_000_000).with_fees(fees(100, 30, 100, 0, FeeSide::Y)));
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert!(!q.side_fees_on_input());
        assert_eq!(q.lp_fee(), Amount::new(30));
        assert_eq!(q.net_input(), Amount::new(9_970));
        assert_eq!(q.curve_output(), Amount::new(9_871));
        assert_eq!(q.admin_fee(), Amount::new(98));
        assert_eq!(q.holder_fee(), Amount::new(97));
        assert_eq!(q.amount_out(), Amount::new(9_676));
    }

    #[test]
    fn reverse_trade_pays_side_fees_on_output_when_side_is_x() {
        let pool = build(&cp_config(1_000_000, 1_000_000).with_fees(fees(100, 30, 100, 0, FeeSide::X)));
        let Ok(q) = engine().quote_y_to_x(&pool, Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert!(!q.side_fees_on_input());
        assert_eq!(q.amount_out(), Amount::new(9_676));
    }

    // -- stable curve -------------------------------------------------------

    #[test]
    fn stable_trade_at_peg_is_near_par() {
        let pool = stable_pool(1_000_000, 1_000_000, 100);
        let Ok(fwd) = engine().quote_x_to_y(&pool, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let Ok(rev) = engine().quote_y_to_x(&pool, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(fwd.amount_out(), Amount::new(999));
        assert_eq!(rev.amount_out(), Amount::new(999));
    }

    #[test]
    fn stable_beats_constant_product_near_peg() {
        let stable = stable_pool(1_000_000, 1_000_000, 100);
        let cp = constant_product_pool(1_000_000, 1_000_000);
        let dx = Amount::new(100_000);
        let (Ok(s), Ok(c)) = (engine().quote_x_to_y(&stable, dx), engine().quote_x_to_y(&cp, dx))
        else {
            panic!("expected Ok");
        };
        assert!(s.amount_out() > c.amount_out());
    }

    #[test]
    fn stable_scale_factors_bridge_precisions() {
        // X has 6 decimals, Y has 9: x_scale = 1000 lifts X onto Y's precision.
        let Ok(params) = StableParams::new(100, 1_000, 1) else {
            panic!("expected valid params");
        };
        let Ok(cfg) = crate::config::PoolConfig::new(
            crate::domain::PoolId::from_bytes([1u8; 32]),
            crate::pricing::test_support::pair(),
            CurveKind::Stable(params),
            Amount::new(1_000_000_000),
            Amount::new(1_000_000_000_000),
            Amount::new(1),
        ) else {
            panic!("expected Ok");
        };
        let pool = build(&cfg);
        let Ok(q) = engine().quote_x_to_y(&pool, Amount::new(1_000_000)) else {
            panic!("expected Ok");
        };
        assert!(
            q.amount_out() > Amount::new(990_000_000) && q.amount_out() < Amount::new(1_000_000_000),
            "out = {}",
            q.amount_out()
        );
    }

    #[test]
    fn strict_solver_propagates_non_convergence() {
        let Ok(solver) = SolverConfig::new(1, 0, true) else {
            panic!("expected Ok");
        };
        let Ok(cfg) = PricingConfig::new(solver, None) else {
            panic!("expected Ok");
        };
        let strict = PricingEngine::new(cfg);
        let pool = build(&stable_config(1_000_000, 10_000, 10));
        assert!(matches!(
            strict.quote_x_to_y(&pool, Amount::new(1_000)),
            Err(AmmError::NewtonRaphsonNonConvergence(_))
        ));
    }

    // -- slippage -----------------------------------------------------------

    #[test]
    fn min_output_applies_tolerance() {
        assert_eq!(
            PricingEngine::min_output_amount(Amount::new(1_000), 0.5),
            Ok(Amount::new(500))
        );
        assert_eq!(
            PricingEngine::min_output_amount(Amount::new(1_000), 0.0),
            Ok(Amount::new(1_000))
        );
        assert_eq!(
            PricingEngine::min_output_amount(Amount::new(1_000), 1.0),
            Ok(Amount::ZERO)
        );
        assert_eq!(
            PricingEngine::min_output_amount(Amount::new(999), 0.25),
            Ok(Amount::new(749))
        );
    }

    #[test]
    fn min_output_floors_tolerance_factor() {
        // (1 − 0.9) · 1e9 is 99_999_999.99… in f64; the factor floors to
        // 99_999_999 rather than rounding up to 100_000_000.
        assert_eq!(
            PricingEngine::min_output_amount(Amount::new(1_000_000_000), 0.9),
            Ok(Amount::new(99_999_999))
        );
    }

    #[test]
    fn min_output_rejects_bad_slippage() {
        for s in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    PricingEngine::min_output_amount(Amount::new(1), s),
                    Err(AmmError::InvalidQuantity(_))
                ),
                "slippage {s}"
            );
        }
    }

    #[test]
    fn quote_min_output_composes() {
        let pool = constant_product_pool(1_000, 1_000);
        assert_eq!(
            engine().quote_x_to_y_min_output(&pool, Amount::new(100), 0.5),
            Ok(Amount::new(45))
        );
        assert_eq!(
            engine().quote_y_to_x_min_output(&pool, Amount::new(100), 0.0),
            Ok(Amount::new(90))
        );
    }
}
