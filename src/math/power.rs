//! Powers of ten for decimal normalization.

use num_bigint::BigInt;
use num_traits::pow;

/// Returns `10^exp` as a big integer.
///
/// # Examples
///
/// ```
/// use hydra_pricing::math::pow10;
/// use num_bigint::BigInt;
///
/// assert_eq!(pow10(0), BigInt::from(1));
/// assert_eq!(pow10(3), BigInt::from(1_000));
/// ```
#[must_use]
pub fn pow10(exp: u32) -> BigInt {
    pow(BigInt::from(10u8), exp as usize)
}
