//! Cumulative reward-per-unit accumulator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A running `sum / amount` rate, e.g. mining reward per staked LP unit.
///
/// The ratio is never divided directly; the only way to read it is
/// [`ValuePerToken::diff`], which compares two snapshots of the same
/// accumulator with integer cross-multiplication.
///
/// The all-zero value is a distinguished "never accrued" state and is read
/// as `0 / 1`, which keeps `diff` free of division by zero.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::ValuePerToken;
/// use num_bigint::BigUint;
///
/// let then = ValuePerToken::new(10, 100); // 0.1 per unit
/// let now = ValuePerToken::new(30, 100);  // 0.3 per unit
/// assert_eq!(ValuePerToken::diff(&now, &then, 1_000), BigUint::from(200u32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValuePerToken {
    sum: u128,
    amount: u128,
}

impl ValuePerToken {
    /// The never-accrued state.
    pub const ZERO: Self = Self { sum: 0, amount: 0 };

    /// Creates a new accumulator snapshot.
    #[must_use]
    pub const fn new(sum: u128, amount: u128) -> Self {
        Self { sum, amount }
    }

    /// Returns the accumulated sum.
    #[must_use]
    pub const fn sum(&self) -> u128 {
        self.sum
    }

    /// Returns the accumulated amount.
    #[must_use]
    pub const fn amount(&self) -> u128 {
        self.amount
    }

    /// Returns `true` for the never-accrued state (`sum == 0 && amount == 0`).
    ///
    /// A snapshot with `sum == 0` and a non-zero amount is a genuine zero
    /// rate, not the sentinel.
    #[must_use]
    pub const fn is_zero_state(&self) -> bool {
        self.sum == 0 && self.amount == 0
    }

    /// Numerator and denominator with the zero state mapped to `0 / 1`.
    fn as_fraction(&self) -> (BigUint, BigUint) {
        if self.is_zero_state() {
            return (BigUint::zero(), BigUint::one());
        }
        (BigUint::from(self.sum), BigUint::from(self.amount))
    }

    /// Computes `(a.sum / a.amount - b.sum / b.amount) * multiplier` exactly,
    /// truncating once at the end.
    ///
    /// A negative difference (`b` ahead of `a`) yields zero: accrual is
    /// never reported as negative. A non-zero-state snapshot with
    /// `amount == 0` has an undefined rate and yields zero as well.
    #[must_use]
    pub fn diff(a: &Self, b: &Self, multiplier: u128) -> BigUint {
        let (s1, a1) = a.as_fraction();
        let (s2, a2) = b.as_fraction();

        let n1 = &s1 * &a2;
        let n2 = &s2 * &a1;
        let d = a1 * a2;

        if n1 < n2 || d.is_zero() {
            return BigUint::zero();
        }
        (n1 - n2) * BigUint::from(multiplier) / d
    }
}
