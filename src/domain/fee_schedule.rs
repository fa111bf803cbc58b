//! Per-pool fee rates and the side they are charged on.

use super::{Amount, BasisPoints, SwapDirection};
use crate::error::AmmError;

/// Which reserve the admin and holder fees are charged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeeSide {
    /// Fees are taken in token X.
    #[default]
    X,
    /// Fees are taken in token Y.
    Y,
}

impl FeeSide {
    /// Returns `true` if a trade in `direction` pays these fees on its input.
    #[must_use]
    pub const fn is_input_of(&self, direction: SwapDirection) -> bool {
        matches!(
            (self, direction),
            (Self::X, SwapDirection::Forward) | (Self::Y, SwapDirection::Reverse)
        )
    }
}

/// Fee rates of a pool.
///
/// The LP fee is always charged on the trade input. Admin and holder fees
/// are charged on whichever side of the trade matches [`FeeSide`]: before
/// the curve when it is the input, after the curve when it is the output.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{Amount, BasisPoints, FeeSchedule, FeeSide};
///
/// let fees = FeeSchedule::new(
///     BasisPoints::new(2),
///     BasisPoints::new(25),
///     BasisPoints::new(3),
///     BasisPoints::ZERO,
///     FeeSide::X,
/// )
/// .expect("valid fees");
///
/// assert_eq!(fees.lp().apply(Amount::new(10_000), Default::default()), Amount::new(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeeSchedule {
    admin: BasisPoints,
    lp: BasisPoints,
    holder: BasisPoints,
    withdraw: BasisPoints,
    side: FeeSide,
}

impl FeeSchedule {
    /// A fee-free schedule.
    pub const ZERO: Self = Self {
        admin: BasisPoints::ZERO,
        lp: BasisPoints::ZERO,
        holder: BasisPoints::ZERO,
        withdraw: BasisPoints::ZERO,
        side: FeeSide::X,
    };

    /// Creates a fee schedule.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if any rate exceeds 10 000 bp.
    pub const fn new(
        admin: BasisPoints,
        lp: BasisPoints,
        holder: BasisPoints,
        withdraw: BasisPoints,
        side: FeeSide,
    ) -> Result<Self, AmmError> {
        let schedule = Self {
            admin,
            lp,
            holder,
            withdraw,
            side,
        };
        match schedule.validate() {
            Ok(()) => Ok(schedule),
            Err(e) => Err(e),
        }
    }

    /// Validates every rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if any rate exceeds 10 000 bp.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if !self.admin.is_valid_percent()
            || !self.lp.is_valid_percent()
            || !self.holder.is_valid_percent()
            || !self.withdraw.is_valid_percent()
        {
            return Err(AmmError::InvalidFee(
                "fee rate must be within 0..=10000 bps",
            ));
        }
        Ok(())
    }

    /// Protocol admin fee rate.
    #[must_use]
    pub const fn admin(&self) -> BasisPoints {
        self.admin
    }

    /// Liquidity-provider fee rate.
    #[must_use]
    pub const fn lp(&self) -> BasisPoints {
        self.lp
    }

    /// Token-holder fee rate.
    #[must_use]
    pub const fn holder(&self) -> BasisPoints {
        self.holder
    }

    /// Withdraw fee rate applied on LP redemption.
    #[must_use]
    pub const fn withdraw(&self) -> BasisPoints {
        self.withdraw
    }

    /// Side the admin and holder fees are charged on.
    #[must_use]
    pub const fn side(&self) -> FeeSide {
        self.side
    }

    /// Deducts the admin fee and then the holder fee from `amount`, each
    /// truncating on the running remainder.
    ///
    /// Returns `(net, admin_fee, holder_fee)`.
    #[must_use]
    pub const fn deduct_side_fees(&self, amount: Amount) -> (Amount, Amount, Amount) {
        let (after_admin, admin_fee) = self.admin.deduct_from(amount);
        let (net, holder_fee) = self.holder.deduct_from(after_admin);
        (net, admin_fee, holder_fee)
    }
}
