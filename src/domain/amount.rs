//! Raw token amount in the smallest on-chain unit.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive};

use super::Rounding;
use crate::error::AmmError;

/// A raw token amount in the smallest unit of its token.
///
/// `Amount` never interprets decimals; that is the job of
/// [`Decimals`](super::Decimals) and [`ScaledDecimal`](super::ScaledDecimal).
/// The inner `u128` leaves headroom for intermediate products of two
/// on-chain (`u64`) quantities, which is why values submitted to the chain
/// must additionally pass [`validate_on_chain`](Self::validate_on_chain).
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert!(Amount::new(u128::from(u64::MAX) + 1).validate_on_chain().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest amount the settlement layer accepts (`u64::MAX`).
    pub const ON_CHAIN_MAX: Self = Self(u64::MAX as u128);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks that the amount can be submitted on-chain (`<= u64::MAX`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] when the amount is larger than
    /// [`Amount::ON_CHAIN_MAX`].
    pub const fn validate_on_chain(self) -> crate::error::Result<Self> {
        if self.0 > Self::ON_CHAIN_MAX.0 {
            return Err(AmmError::InvalidQuantity("amount exceeds u64::MAX"));
        }
        Ok(self)
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Computes `self * numerator / denominator` through a wide intermediate.
    ///
    /// This is the proportional-share primitive (`a * b / c`) used by
    /// deposits, withdrawals and position shares. Returns `None` when the
    /// denominator is zero or the result does not fit in `u128`.
    #[must_use]
    pub fn mul_div(&self, numerator: &Self, denominator: &Self, rounding: Rounding) -> Option<Self> {
        let n = BigUint::from(self.0) * BigUint::from(numerator.0);
        let d = BigUint::from(denominator.0);
        rounding.div_big(&n, &d)?.to_u128().map(Self)
    }

    /// Converts a signed big integer into an amount, mapping negative
    /// values to `None`.
    #[must_use]
    pub fn from_bigint(value: &BigInt) -> Option<Self> {
        if value.is_negative() {
            return None;
        }
        value.to_u128().map(Self)
    }

    /// Returns the amount as a big integer for exact wide arithmetic.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.0)
    }

    /// Converts to `f64`, potentially losing precision. Display only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64_lossy(&self) -> f64 {
        self.0 as f64
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
