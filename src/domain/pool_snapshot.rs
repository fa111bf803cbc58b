//! Immutable view of a pool's on-chain state.

use super::{Amount, CurveKind, FeeSchedule, PoolId, TokenPair, ValuePerToken};
use crate::config::PoolConfig;
use crate::error::AmmError;
use crate::traits::FromConfig;

/// Traded amounts per side: lifetime totals plus the last two epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TradeVolume {
    total_x: Amount,
    total_y: Amount,
    last_epoch_x: Amount,
    last_epoch_y: Amount,
    current_epoch_x: Amount,
    current_epoch_y: Amount,
}

impl TradeVolume {
    /// Creates a volume record with lifetime totals and empty epochs.
    #[must_use]
    pub const fn new(total_x: Amount, total_y: Amount) -> Self {
        Self {
            total_x,
            total_y,
            last_epoch_x: Amount::ZERO,
            last_epoch_y: Amount::ZERO,
            current_epoch_x: Amount::ZERO,
            current_epoch_y: Amount::ZERO,
        }
    }

    /// Sets the totals of the previous epoch.
    #[must_use]
    pub const fn with_last_epoch(mut self, x: Amount, y: Amount) -> Self {
        self.last_epoch_x = x;
        self.last_epoch_y = y;
        self
    }

    /// Sets the totals of the epoch in progress.
    #[must_use]
    pub const fn with_current_epoch(mut self, x: Amount, y: Amount) -> Self {
        self.current_epoch_x = x;
        self.current_epoch_y = y;
        self
    }

    /// Lifetime `(x, y)` totals.
    #[must_use]
    pub const fn lifetime(&self) -> (Amount, Amount) {
        (self.total_x, self.total_y)
    }

    /// Last-epoch `(x, y)` totals.
    #[must_use]
    pub const fn last_epoch(&self) -> (Amount, Amount) {
        (self.last_epoch_x, self.last_epoch_y)
    }

    /// Current-epoch `(x, y)` totals.
    #[must_use]
    pub const fn current_epoch(&self) -> (Amount, Amount) {
        (self.current_epoch_x, self.current_epoch_y)
    }

    /// Per-side maximum of the current and last epoch, an approximation of
    /// the trailing 24h volume (one epoch is one day).
    #[must_use]
    pub fn recent(&self) -> (Amount, Amount) {
        (
            self.current_epoch_x.max(self.last_epoch_x),
            self.current_epoch_y.max(self.last_epoch_y),
        )
    }
}

/// Liquidity-mining emission state of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MiningState {
    speed: u64,
    accumulator: ValuePerToken,
    last_epoch: u64,
}

impl MiningState {
    /// Creates a mining state.
    #[must_use]
    pub const fn new(speed: u64, accumulator: ValuePerToken, last_epoch: u64) -> Self {
        Self {
            speed,
            accumulator,
            last_epoch,
        }
    }

    /// Reward emitted per epoch.
    #[must_use]
    pub const fn speed(&self) -> u64 {
        self.speed
    }

    /// Reward per LP unit accumulated so far.
    #[must_use]
    pub const fn accumulator(&self) -> ValuePerToken {
        self.accumulator
    }

    /// Epoch of the last accumulator update.
    #[must_use]
    pub const fn last_epoch(&self) -> u64 {
        self.last_epoch
    }
}

/// A read-only snapshot of one two-asset pool.
///
/// Snapshots are built from a [`PoolConfig`] through [`FromConfig`], which
/// enforces the on-chain bounds. Every pricing operation is a pure function
/// of a snapshot.
///
/// # Examples
///
/// ```
/// use hydra_pricing::config::PoolConfig;
/// use hydra_pricing::domain::{Amount, CurveKind, PoolId, PoolSnapshot, TokenAddress, TokenPair};
/// use hydra_pricing::traits::FromConfig;
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct tokens");
/// let cfg = PoolConfig::new(
///     PoolId::from_bytes([7u8; 32]),
///     pair,
///     CurveKind::ConstantProduct,
///     Amount::new(1_000),
///     Amount::new(4_000),
///     Amount::new(2_000),
/// )
/// .expect("valid config");
///
/// let pool = PoolSnapshot::from_config(&cfg).expect("valid pool");
/// assert!(!pool.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolSnapshot {
    id: PoolId,
    pair: TokenPair,
    curve: CurveKind,
    x: Amount,
    y: Amount,
    lp_supply: Amount,
    frozen: bool,
    fees: FeeSchedule,
    volume: TradeVolume,
    mining: MiningState,
}

impl PoolSnapshot {
    /// Pool identity.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Token pair in pool order.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Pricing curve.
    #[must_use]
    pub const fn curve(&self) -> &CurveKind {
        &self.curve
    }

    /// Reserve of token X.
    #[must_use]
    pub const fn x(&self) -> Amount {
        self.x
    }

    /// Reserve of token Y.
    #[must_use]
    pub const fn y(&self) -> Amount {
        self.y
    }

    /// Outstanding LP token supply.
    #[must_use]
    pub const fn lp_supply(&self) -> Amount {
        self.lp_supply
    }

    /// Whether the operator froze the pool.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Fee schedule.
    #[must_use]
    pub const fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Trade volume counters.
    #[must_use]
    pub const fn volume(&self) -> &TradeVolume {
        &self.volume
    }

    /// Mining emission state.
    #[must_use]
    pub const fn mining(&self) -> &MiningState {
        &self.mining
    }

    /// `true` when either reserve is zero (the pool has no liquidity yet).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_zero() || self.y.is_zero()
    }
}

impl FromConfig<PoolConfig> for PoolSnapshot {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            id: config.id(),
            pair: *config.pair(),
            curve: *config.curve(),
            x: config.x(),
            y: config.y(),
            lp_supply: config.lp_supply(),
            frozen: config.frozen(),
            fees: *config.fees(),
            volume: *config.volume(),
            mining: *config.mining(),
        })
    }
}
