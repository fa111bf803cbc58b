//! Token decimal places.

use crate::error::AmmError;

/// Maximum allowed decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places between a token's raw unit and its display unit.
///
/// Valid range is `0..=18`. Construction is validated: values above 18 are
/// rejected.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.factor(), 1_000_000);
/// assert_eq!(d.step_string(), "0.000001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Returns `10^decimals` as a display-only float.
    #[must_use]
    pub fn factor_f64(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    /// Returns the smallest representable display increment, e.g.
    /// `"0.000001"` for six decimals and `"1"` for none.
    #[must_use]
    pub fn step_string(&self) -> String {
        if self.0 == 0 {
            return "1".to_owned();
        }
        format!("0.{}1", "0".repeat(usize::from(self.0) - 1))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for v in [0u8, 6, 9, 18] {
            let Ok(d) = Decimals::new(v) else {
                panic!("expected Ok for {v}");
            };
            assert_eq!(d.get(), v);
        }
    }

    #[test]
    fn invalid_nineteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::InvalidPrecision("decimals must be 0..=18"));
    }

    #[test]
    fn factor() {
        let Ok(d) = Decimals::new(9) else {
            panic!("expected Ok");
        };
        assert_eq!(d.factor(), 1_000_000_000);
        assert_eq!(Decimals::ZERO.factor(), 1);
        assert_eq!(Decimals::MAX.factor(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn factor_f64_matches_integer() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        assert!((d.factor_f64() - 1e6).abs() < f64::EPSILON);
    }

    #[test]
    fn step_string() {
        let Ok(d1) = Decimals::new(1) else {
            panic!("expected Ok");
        };
        assert_eq!(Decimals::ZERO.step_string(), "1");
        assert_eq!(d1.step_string(), "0.1");
        assert_eq!(Decimals::MAX.step_string(), "0.000000000000000001");
    }

    #[test]
    fn ordering() {
        let (Ok(d6), Ok(d9)) = (Decimals::new(6), Decimals::new(9)) else {
            panic!("expected Ok");
        };
        assert!(d6 < d9);
        assert_eq!(d6.max(d9), d9);
    }
}
