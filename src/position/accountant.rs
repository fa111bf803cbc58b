//! Claimable balances and pool shares of LP positions.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::domain::{
    Amount, PoolSnapshot, PositionSnapshot, Rounding, ScaledDecimal, ValuePerToken, Vesting,
};
use crate::error::AmmError;
use crate::math::pow10;

/// Stateless calculator over [`PositionSnapshot`]s.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{AccountAddress, Amount, PoolId, PositionSnapshot, ScaledDecimal};
/// use hydra_pricing::position::PositionAccountant;
///
/// let pos = PositionSnapshot::new(
///     AccountAddress::from_bytes([3u8; 32]),
///     PoolId::from_bytes([7u8; 32]),
///     Amount::new(1_000),
/// );
/// let accountant = PositionAccountant;
/// let vested = accountant.with_partial_ratio(&pos, ScaledDecimal::parse("0.25").expect("valid"));
///
/// assert_eq!(accountant.claimable_balance(&pos), Amount::new(1_000));
/// assert_eq!(accountant.claimable_balance(&vested), Amount::new(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionAccountant;

impl PositionAccountant {
    /// Portion of the recorded value that is claimable now.
    ///
    /// Fully vested positions return their whole value; partial ones
    /// return `value · ratio`, truncated and clamped to `[0, value]`.
    #[must_use]
    pub fn claimable_balance(&self, position: &PositionSnapshot) -> Amount {
        let value = position.value();
        let Vesting::Partial(ratio) = position.vesting() else {
            return value;
        };
        let Some(denominator) = pow10(ratio.scale()).to_biguint() else {
            return Amount::ZERO;
        };
        let scaled = BigUint::from(value.get()) * ratio.value() / denominator;
        scaled.to_u128().map_or(value, |v| Amount::new(v).min(value))
    }

    /// A copy of `position` vested at `ratio`; `position` is untouched.
    #[must_use]
    pub fn with_partial_ratio(
        &self,
        position: &PositionSnapshot,
        ratio: ScaledDecimal,
    ) -> PositionSnapshot {
        position.partial(ratio)
    }

    /// Fraction of the LP supply the claimable balance represents.
    /// Display only; `0.0` when the supply is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolMismatch`] if `pool` is not the position's
    /// pool.
    pub fn share_ratio(
        &self,
        position: &PositionSnapshot,
        pool: &PoolSnapshot,
    ) -> Result<f64, AmmError> {
        ensure_same_pool(position, pool)?;
        let supply = pool.lp_supply();
        if supply.is_zero() {
            return Ok(0.0);
        }
        Ok(self.claimable_balance(position).to_f64_lossy() / supply.to_f64_lossy())
    }

    /// Coin amounts the claimable balance redeems for at current reserves:
    /// `claimable · x / supply` and `claimable · y / supply`, truncated.
    /// `(0, 0)` when the supply is zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolMismatch`] if `pool` is not the position's pool.
    /// - [`AmmError::Overflow`] if a share does not fit in `u128`.
    pub fn share_coin_amounts(
        &self,
        position: &PositionSnapshot,
        pool: &PoolSnapshot,
    ) -> Result<(Amount, Amount), AmmError> {
        ensure_same_pool(position, pool)?;
        let supply = pool.lp_supply();
        if supply.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }
        let balance = self.claimable_balance(position);
        let share = |reserve: Amount| {
            balance
                .mul_div(&reserve, &supply, Rounding::Down)
                .ok_or(AmmError::Overflow("position share"))
        };
        Ok((share(pool.x())?, share(pool.y())?))
    }

    /// Mining reward accrued since the position's last settlement: the
    /// growth of the pool accumulator times the claimable balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolMismatch`] if `pool` is not the position's
    /// pool.
    pub fn pending_mining_reward(
        &self,
        position: &PositionSnapshot,
        pool: &PoolSnapshot,
    ) -> Result<BigUint, AmmError> {
        ensure_same_pool(position, pool)?;
        Ok(ValuePerToken::diff(
            &pool.mining().accumulator(),
            &position.mining_snapshot(),
            self.claimable_balance(position).get(),
        ))
    }
}

fn ensure_same_pool(position: &PositionSnapshot, pool: &PoolSnapshot) -> Result<(), AmmError> {
    if position.pool_id() == pool.id() {
        Ok(())
    } else {
        Err(AmmError::PoolMismatch)
    }
}
