//! Proportional deposits and LP redemptions.

use tracing::trace;

use super::PricingEngine;
use crate::domain::{Amount, PoolSnapshot, Rounding};
use crate::error::AmmError;

impl PricingEngine {
    /// X needed alongside `y_in` to keep the pool ratio: `x · y_in / y`.
    ///
    /// Zero for a pool without Y reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `y_in` exceeds `u64::MAX`.
    /// - [`AmmError::Overflow`] if the product does not fit in `u128`.
    pub fn deposit_x_for_y(&self, pool: &PoolSnapshot, y_in: Amount) -> Result<Amount, AmmError> {
        let y_in = y_in.validate_on_chain()?;
        if pool.y().is_zero() {
            return Ok(Amount::ZERO);
        }
        pool.x()
            .mul_div(&y_in, &pool.y(), Rounding::Down)
            .ok_or(AmmError::Overflow("deposit x for y"))
    }

    /// Y needed alongside `x_in` to keep the pool ratio: `x_in · y / x`.
    ///
    /// Zero for a pool without X reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `x_in` exceeds `u64::MAX`.
    /// - [`AmmError::Overflow`] if the product does not fit in `u128`.
    pub fn deposit_y_for_x(&self, pool: &PoolSnapshot, x_in: Amount) -> Result<Amount, AmmError> {
        let x_in = x_in.validate_on_chain()?;
        if pool.x().is_zero() {
            return Ok(Amount::ZERO);
        }
        x_in.mul_div(&pool.y(), &pool.x(), Rounding::Down)
            .ok_or(AmmError::Overflow("deposit y for x"))
    }

    /// Largest `(x, y)` deposit within the caps `x_max`, `y_max` that
    /// keeps the pool ratio.
    ///
    /// If matching all of `y_max` would need more X than `x_max`, X is the
    /// binding side; otherwise Y is. Returns `(0, 0)` when either cap is
    /// zero or the pool is empty.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if either cap exceeds `u64::MAX`.
    /// - [`AmmError::Overflow`] if a ratio product does not fit in `u128`.
    pub fn deposit_amounts(
        &self,
        pool: &PoolSnapshot,
        x_max: Amount,
        y_max: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let x_max = x_max.validate_on_chain()?;
        let y_max = y_max.validate_on_chain()?;
        if x_max.is_zero() || y_max.is_zero() || pool.is_empty() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }

        let x_for_y_max = self.deposit_x_for_y(pool, y_max)?;
        let (x, y) = if x_for_y_max > x_max {
            (x_max, self.deposit_y_for_x(pool, x_max)?.min(y_max))
        } else {
            (x_for_y_max.min(x_max), y_max)
        };
        trace!(pool = %pool.id(), %x_max, %y_max, %x, %y, "deposit sized");
        Ok((x, y))
    }

    /// Tokens returned for redeeming `lp_amount` LP tokens, after the
    /// withdraw fee: `lp · x / supply` and `lp · y / supply`, each reduced
    /// by its truncated withdraw-fee share.
    ///
    /// The per-side fee deduction is an assumed settlement formula: pool
    /// state carries a withdraw fee rate but no redemption computation
    /// that applies it, so treat the fee part as an estimate.
    ///
    /// Returns `(0, 0)` when the LP supply is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `lp_amount` exceeds the
    /// outstanding supply.
    pub fn withdraw_amounts(
        &self,
        pool: &PoolSnapshot,
        lp_amount: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let supply = pool.lp_supply();
        if supply.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }
        if lp_amount > supply {
            return Err(AmmError::InvalidQuantity(
                "lp amount exceeds outstanding supply",
            ));
        }

        let share = |reserve: Amount| {
            lp_amount
                .mul_div(&reserve, &supply, Rounding::Down)
                .ok_or(AmmError::Overflow("withdraw share"))
        };
        let withdraw_fee = pool.fees().withdraw();
        let (x, _) = withdraw_fee.deduct_from(share(pool.x())?);
        let (y, _) = withdraw_fee.deduct_from(share(pool.y())?);
        Ok((x, y))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::FeeSide;
    use crate::pricing::test_support::{build, constant_product_pool, cp_config, fees, LP_SUPPLY};

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    // -- deposits -----------------------------------------------------------

    #[test]
    fn helpers_follow_pool_ratio() {
        let pool = constant_product_pool(1_000, 4_000);
        assert_eq!(engine().deposit_x_for_y(&pool, Amount::new(400)), Ok(Amount::new(100)));
        assert_eq!(engine().deposit_y_for_x(&pool, Amount::new(100)), Ok(Amount::new(400)));
    }

    #[test]
    fn helpers_on_empty_side_are_zero() {
        let pool = constant_product_pool(1_000, 0);
        assert_eq!(engine().deposit_x_for_y(&pool, Amount::new(400)), Ok(Amount::ZERO));
        let pool = constant_product_pool(0, 1_000);
        assert_eq!(engine().deposit_y_for_x(&pool, Amount::new(400)), Ok(Amount::ZERO));
    }

    #[test]
    fn x_is_binding() {
        // matching 1000 Y needs 250 X, more than the 100 X cap
        let pool = constant_product_pool(1_000, 4_000);
        assert_eq!(
            engine().deposit_amounts(&pool, Amount::new(100), Amount::new(1_000)),
            Ok((Amount::new(100), Amount::new(400)))
        );
    }

    #[test]
    fn y_is_binding() {
        let pool = constant_product_pool(1_000, 4_000);
        assert_eq!(
            engine().deposit_amounts(&pool, Amount::new(1_000), Amount::new(400)),
            Ok((Amount::new(100), Amount::new(400)))
        );
    }

    #[test]
    fn zero_cap_or_empty_pool_deposits_nothing() {
        let pool = constant_product_pool(1_000, 4_000);
        let nothing = Ok((Amount::ZERO, Amount::ZERO));
        assert_eq!(engine().deposit_amounts(&pool, Amount::ZERO, Amount::new(5)), nothing);
        assert_eq!(engine().deposit_amounts(&pool, Amount::new(5), Amount::ZERO), nothing);
        let empty = constant_product_pool(0, 0);
        assert_eq!(
            engine().deposit_amounts(&empty, Amount::new(5), Amount::new(5)),
            nothing
        );
    }

    #[test]
    fn deposit_truncates() {
        let pool = constant_product_pool(3, 7);
        // 7 · 2 / 3 = 4.67 → 4
        assert_eq!(
            engine().deposit_amounts(&pool, Amount::new(2), Amount::new(100)),
            Ok((Amount::new(2), Amount::new(4)))
        );
    }

    #[test]
    fn cap_above_u64_rejected() {
        // x = 2^63, y = 1
        let pool = constant_product_pool(1u128 << 63, 1);
        assert!(matches!(
            engine().deposit_amounts(&pool, Amount::new(1_000), Amount::new(u128::MAX)),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            engine().deposit_amounts(&pool, Amount::new(u128::from(u64::MAX) + 1), Amount::new(1)),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            engine().deposit_x_for_y(&pool, Amount::new(u128::MAX)),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            engine().deposit_y_for_x(&pool, Amount::new(u128::MAX)),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn largest_on_chain_caps_keep_ratio() {
        let pool = constant_product_pool(1u128 << 63, 1);
        let max = Amount::new(u128::from(u64::MAX));
        // Matching u64::MAX of Y needs 2^63 · (2^64 − 1) X, far above the
        // X cap, so X binds and Y follows the ratio.
        assert_eq!(
            engine().deposit_amounts(&pool, Amount::new(1_000), max),
            Ok((Amount::new(1_000), Amount::ZERO))
        );
        assert_eq!(
            engine().deposit_amounts(&pool, max, Amount::new(1)),
            Ok((Amount::new(1u128 << 63), Amount::new(1)))
        );
    }

    // -- withdrawals --------------------------------------------------------

    #[test]
    fn proportional_withdraw() {
        let pool = constant_product_pool(1_000, 4_000);
        let half = Amount::new(LP_SUPPLY / 2);
        assert_eq!(
            engine().withdraw_amounts(&pool, half),
            Ok((Amount::new(500), Amount::new(2_000)))
        );
    }

    #[test]
    fn withdraw_fee_is_deducted_per_side() {
        let pool = build(&cp_config(1_000_000, 2_000_000).with_fees(fees(0, 0, 0, 50, FeeSide::X)));
        let Ok((x, y)) = engine().withdraw_amounts(&pool, Amount::new(LP_SUPPLY)) else {
            panic!("expected Ok");
        };
        assert_eq!(x, Amount::new(995_000));
        assert_eq!(y, Amount::new(1_990_000));
    }

    #[test]
    fn withdraw_more_than_supply_rejected() {
        let pool = constant_product_pool(1_000, 4_000);
        assert!(matches!(
            engine().withdraw_amounts(&pool, Amount::new(LP_SUPPLY + 1)),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn zero_supply_withdraws_nothing() {
        let Ok(cfg) = crate::config::PoolConfig::new(
            crate::domain::PoolId::from_bytes([1u8; 32]),
            crate::pricing::test_support::pair(),
            crate::domain::CurveKind::ConstantProduct,
            Amount::new(10),
            Amount::new(10),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let pool = build(&cfg);
        assert_eq!(
            engine().withdraw_amounts(&pool, Amount::new(5)),
            Ok((Amount::ZERO, Amount::ZERO))
        );
    }
}
