//! Basis-point representation for fee rates.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Denominator of a basis-point rate (10 000 bp = 100%).
pub(crate) const BPS_SCALING: u128 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed, but values above 10 000 are
/// nonsensical as fee rates. Use [`validate_fee`](Self::validate_fee) at
/// configuration boundaries.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.apply(Amount::new(10_000), Rounding::Down), Amount::new(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_SCALING as u32);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        (self.0 as u128) <= BPS_SCALING
    }

    /// Checks the rate can be used as a fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] above 10 000 bp.
    pub const fn validate_fee(self) -> crate::error::Result<Self> {
        if !self.is_valid_percent() {
            return Err(AmmError::InvalidFee("fee rate must be within 0..=10000 bps"));
        }
        Ok(self)
    }

    /// Converts to a fraction in `0.0..=1.0`. Display only.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 10_000.0
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// The amount is split as `q * 10_000 + r` so the product never needs
    /// more than `u128`; for rates up to 100% the result is exact and never
    /// exceeds `amount`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Amount {
        let bps = self.0 as u128;
        let q = amount.get() / BPS_SCALING;
        let r = amount.get() % BPS_SCALING;
        let whole = q.saturating_mul(bps);
        let rest = r * bps;
        let frac = match rounding {
            Rounding::Down => rest / BPS_SCALING,
            Rounding::Up => rest.div_ceil(BPS_SCALING),
        };
        Amount::new(whole.saturating_add(frac))
    }

    /// Splits `amount` into `(amount - fee, fee)` where the fee is the
    /// truncated basis-point share.
    pub const fn deduct_from(&self, amount: Amount) -> (Amount, Amount) {
        let fee = self.apply(amount, Rounding::Down);
        (amount.saturating_sub(&fee), fee)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
