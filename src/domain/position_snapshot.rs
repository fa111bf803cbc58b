//! An LP position as seen by its owner.

use super::{AccountAddress, Amount, PoolId, ScaledDecimal, ValuePerToken};

/// How much of a position's recorded value is currently claimable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Vesting {
    /// The whole value is claimable.
    #[default]
    FullyVested,
    /// Only `value · ratio` is claimable; ratios above one are read as one.
    Partial(ScaledDecimal),
}

/// A snapshot of one liquidity position.
///
/// The position refers to its pool by [`PoolId`]; operations that need
/// the pool reserves take the [`PoolSnapshot`](super::PoolSnapshot)
/// separately and check the id.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{AccountAddress, Amount, PoolId, PositionSnapshot, ScaledDecimal, Vesting};
///
/// let pos = PositionSnapshot::new(
///     AccountAddress::from_bytes([3u8; 32]),
///     PoolId::from_bytes([7u8; 32]),
///     Amount::new(1_000),
/// );
/// let half = ScaledDecimal::parse("0.5").expect("valid decimal");
/// let vesting = pos.partial(half.clone());
///
/// assert_eq!(*pos.vesting(), Vesting::FullyVested);
/// assert_eq!(*vesting.vesting(), Vesting::Partial(half));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionSnapshot {
    owner: AccountAddress,
    pool_id: PoolId,
    value: Amount,
    pool_x: Amount,
    pool_y: Amount,
    mining_snapshot: ValuePerToken,
    start_epoch: u64,
    end_epoch: u64,
    boost_multiplier: u64,
    vesting: Vesting,
}

impl PositionSnapshot {
    /// Creates a fully vested position with no deposit history.
    #[must_use]
    pub const fn new(owner: AccountAddress, pool_id: PoolId, value: Amount) -> Self {
        Self {
            owner,
            pool_id,
            value,
            pool_x: Amount::ZERO,
            pool_y: Amount::ZERO,
            mining_snapshot: ValuePerToken::ZERO,
            start_epoch: 0,
            end_epoch: 0,
            boost_multiplier: 1,
            vesting: Vesting::FullyVested,
        }
    }

    /// Records the pool reserves observed at deposit time.
    #[must_use]
    pub const fn with_deposit_reserves(mut self, pool_x: Amount, pool_y: Amount) -> Self {
        self.pool_x = pool_x;
        self.pool_y = pool_y;
        self
    }

    /// Records the pool mining accumulator at the last settlement.
    #[must_use]
    pub const fn with_mining_snapshot(mut self, snapshot: ValuePerToken) -> Self {
        self.mining_snapshot = snapshot;
        self
    }

    /// Sets the lock window and its reward boost.
    #[must_use]
    pub const fn with_lock(mut self, start_epoch: u64, end_epoch: u64, boost_multiplier: u64) -> Self {
        self.start_epoch = start_epoch;
        self.end_epoch = end_epoch;
        self.boost_multiplier = boost_multiplier;
        self
    }

    /// Returns a copy of this position with a partial vesting ratio.
    /// `self` is left untouched.
    #[must_use]
    pub fn partial(&self, ratio: ScaledDecimal) -> Self {
        Self {
            vesting: Vesting::Partial(ratio),
            ..self.clone()
        }
    }

    /// Owner account.
    #[must_use]
    pub const fn owner(&self) -> AccountAddress {
        self.owner
    }

    /// Pool the position belongs to.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Recorded LP value.
    #[must_use]
    pub const fn value(&self) -> Amount {
        self.value
    }

    /// X reserve at deposit time.
    #[must_use]
    pub const fn pool_x(&self) -> Amount {
        self.pool_x
    }

    /// Y reserve at deposit time.
    #[must_use]
    pub const fn pool_y(&self) -> Amount {
        self.pool_y
    }

    /// Mining accumulator at the last settlement.
    #[must_use]
    pub const fn mining_snapshot(&self) -> ValuePerToken {
        self.mining_snapshot
    }

    /// First epoch of the lock.
    #[must_use]
    pub const fn start_epoch(&self) -> u64 {
        self.start_epoch
    }

    /// Last epoch of the lock.
    #[must_use]
    pub const fn end_epoch(&self) -> u64 {
        self.end_epoch
    }

    /// Reward boost for the lock duration.
    #[must_use]
    pub const fn boost_multiplier(&self) -> u64 {
        self.boost_multiplier
    }

    /// Vesting state.
    #[must_use]
    pub const fn vesting(&self) -> &Vesting {
        &self.vesting
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn position() -> PositionSnapshot {
        PositionSnapshot::new(
            AccountAddress::from_bytes([1u8; 32]),
            PoolId::from_bytes([2u8; 32]),
            Amount::new(500),
        )
    }

    #[test]
    fn defaults() {
        let p = position();
        assert_eq!(p.value(), Amount::new(500));
        assert_eq!(p.boost_multiplier(), 1);
        assert!(p.mining_snapshot().is_zero_state());
        assert_eq!(*p.vesting(), Vesting::FullyVested);
    }

    #[test]
    fn partial_leaves_original_untouched() {
        let p = position()
            .with_deposit_reserves(Amount::new(10), Amount::new(20))
            .with_lock(5, 35, 3);
        let Ok(ratio) = ScaledDecimal::parse("0.25") else {
            panic!("expected valid decimal");
        };
        let q = p.partial(ratio.clone());

        assert_eq!(*p.vesting(), Vesting::FullyVested);
        assert_eq!(*q.vesting(), Vesting::Partial(ratio));
        assert_eq!(q.pool_x(), Amount::new(10));
        assert_eq!(q.pool_y(), Amount::new(20));
        assert_eq!((q.start_epoch(), q.end_epoch()), (5, 35));
        assert_eq!(q.owner(), p.owner());
        assert_eq!(q.pool_id(), p.pool_id());
    }
}
