//! Explicit rounding direction for integer division.

use num_bigint::BigUint;
use num_traits::Zero;

/// Rounding direction for division on domain types.
///
/// Settlement truncates, so every quote path in this crate uses
/// [`Rounding::Down`]; [`Rounding::Up`] exists for callers computing the
/// input needed to receive a given output.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::Rounding;
///
/// assert_eq!(Rounding::Down.div_u128(7, 2), Some(3));
/// assert_eq!(Rounding::Up.div_u128(7, 2), Some(4));
/// assert_eq!(Rounding::Up.div_u128(7, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative operands).
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Divides two `u128` values. Returns `None` when `denominator` is zero.
    #[must_use]
    pub const fn div_u128(&self, numerator: u128, denominator: u128) -> Option<u128> {
        if denominator == 0 {
            return None;
        }
        match self {
            Self::Down => Some(numerator / denominator),
            Self::Up => Some(numerator.div_ceil(denominator)),
        }
    }

    /// Divides two big unsigned integers. Returns `None` when `denominator`
    /// is zero.
    #[must_use]
    pub fn div_big(&self, numerator: &BigUint, denominator: &BigUint) -> Option<BigUint> {
        if denominator.is_zero() {
            return None;
        }
        let q = numerator / denominator;
        match self {
            Self::Down => Some(q),
            Self::Up if (numerator % denominator).is_zero() => Some(q),
            Self::Up => Some(q + 1u8),
        }
    }
}
