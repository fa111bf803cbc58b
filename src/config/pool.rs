//! Declarative blueprint of a pool snapshot.

use crate::domain::{Amount, CurveKind, FeeSchedule, MiningState, PoolId, TokenPair, TradeVolume};
use crate::error::AmmError;

/// Configuration a [`PoolSnapshot`](crate::domain::PoolSnapshot) is built
/// from via [`FromConfig`](crate::traits::FromConfig).
///
/// The data layer decodes on-chain pool state into a `PoolConfig`; the
/// snapshot constructor re-validates it, so a snapshot always satisfies
/// the on-chain bounds.
///
/// # Validation
///
/// - Reserves and LP supply must fit in `u64`.
/// - Every fee rate must be within `0..=10_000` bps.
/// - Stable curve parameters are non-zero by construction of
///   [`StableParams`](crate::domain::StableParams).
///
/// Zero reserves are accepted: an uninitialized pool is a valid snapshot
/// that the pricing engine reports as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
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

impl PoolConfig {
    /// Creates a fee-free, unfrozen pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if a reserve or the LP supply
    /// exceeds `u64::MAX`.
    pub fn new(
        id: PoolId,
        pair: TokenPair,
        curve: CurveKind,
        x: Amount,
        y: Amount,
        lp_supply: Amount,
    ) -> Result<Self, AmmError> {
        let config = Self {
            id,
            pair,
            curve,
            x,
            y,
            lp_supply,
            frozen: false,
            fees: FeeSchedule::ZERO,
            volume: TradeVolume::default(),
            mining: MiningState::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the fee schedule.
    #[must_use]
    pub const fn with_fees(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    /// Sets the frozen flag.
    #[must_use]
    pub const fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    /// Sets the trade volume counters.
    #[must_use]
    pub const fn with_volume(mut self, volume: TradeVolume) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the mining state.
    #[must_use]
    pub const fn with_mining(mut self, mining: MiningState) -> Self {
        self.mining = mining;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if a reserve or the LP supply
    ///   exceeds `u64::MAX`.
    /// - [`AmmError::InvalidFee`] if a fee rate exceeds 10 000 bps.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.x.validate_on_chain()?;
        self.y.validate_on_chain()?;
        self.lp_supply.validate_on_chain()?;
        self.fees.validate()
    }

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
    pub const fn x(&self) -> Amount {
        self.x
    }

    /// Reserve of token Y.
    pub const fn y(&self) -> Amount {
        self.y
    }

    /// LP token supply.
    pub const fn lp_supply(&self) -> Amount {
        self.lp_supply
    }

    /// Frozen flag.
    #[must_use]
    pub const fn frozen(&self) -> bool {
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

    /// Mining state.
    #[must_use]
    pub const fn mining(&self) -> &MiningState {
        &self.mining
    }
}
