//! Exact decimal numbers backed by an arbitrary-precision integer.
//!
//! A [`ScaledDecimal`] is `value / 10^scale`. It is the bridge between
//! human-entered strings (`"1.5"`) and raw token units, and is used for
//! vesting ratios on positions. No floating point is involved anywhere
//! except the explicitly lossy [`ScaledDecimal::to_f64_lossy`].
//!
//! # Canonical form
//!
//! Parsing strips leading zeros from the integer part and trailing zeros
//! from the fractional part before the scale is measured, so `"07.50"`
//! parses to `value = 75, scale = 1`. A string that starts with two zeros
//! (`"00.5"`) is rejected; a single leading zero (`"0.5"`, `"05"`) is fine.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::{Amount, Decimals};
use crate::error::AmmError;

/// An exact non-negative decimal: `value / 10^scale`.
///
/// Immutable once constructed. Two decimals with different scales are not
/// numerically comparable through `==`; align them first with
/// [`align_to`](Self::align_to) or use [`same_magnitude`](Self::same_magnitude).
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::ScaledDecimal;
///
/// let d: ScaledDecimal = "012.3400".parse().expect("valid decimal");
/// assert_eq!(d.scale(), 2);
/// assert_eq!(d.to_string(), "12.34");
/// assert_eq!(d.to_decimal_string(true), "12.34");
///
/// let wide = d.align_to(4).expect("scale can grow");
/// assert_eq!(wide.to_decimal_string(true), "12.3400");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScaledDecimal {
    value: BigUint,
    scale: u32,
}

impl ScaledDecimal {
    /// Creates a decimal from a raw integer and a signed scale.
    ///
    /// A negative scale is clamped to zero.
    #[must_use]
    pub fn new(value: BigUint, scale: i64) -> Self {
        let scale = u32::try_from(scale.max(0)).unwrap_or(u32::MAX);
        Self { value, scale }
    }

    /// Creates a decimal from a raw integer and a non-negative scale.
    #[must_use]
    pub const fn with_scale(value: BigUint, scale: u32) -> Self {
        Self { value, scale }
    }

    /// Renders a raw token amount in display units, e.g. `1_500_000` with
    /// six decimals is `1.5`.
    #[must_use]
    pub fn from_amount(amount: Amount, decimals: Decimals) -> Self {
        Self::with_scale(BigUint::from(amount.get()), u32::from(decimals.get()))
    }

    /// Parses a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidDecimal`] if the string is not of the form
    /// `digits` or `digits.digits?`, or starts with `"00"`.
    pub fn parse(s: &str) -> crate::error::Result<Self> {
        if !is_plain_decimal(s) {
            return Err(AmmError::InvalidDecimal("expected digits with an optional fraction"));
        }
        if s.starts_with("00") {
            return Err(AmmError::InvalidDecimal("multiple leading zeros"));
        }

        let canonical = canonicalize(s);
        let (digits, scale) = match canonical.split_once('.') {
            Some((int, frac)) => (format!("{int}{frac}"), frac.len()),
            None => (canonical, 0),
        };
        let value = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or(AmmError::InvalidDecimal("digits could not be parsed"))?;
        let scale = u32::try_from(scale).map_err(|_| AmmError::InvalidDecimal("scale too large"))?;
        Ok(Self { value, scale })
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn value(&self) -> &BigUint {
        &self.value
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if the decimal is zero at any scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `true` if the scale can be raised to `target` without losing
    /// digits, i.e. `target >= scale`.
    #[must_use]
    pub const fn can_align_to(&self, target: u32) -> bool {
        self.scale <= target
    }

    /// Re-expresses the decimal at a larger scale by multiplying the raw
    /// integer by `10^(target - scale)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] when `target < scale`; a scale
    /// is never reduced.
    pub fn align_to(&self, target: u32) -> crate::error::Result<Self> {
        if !self.can_align_to(target) {
            return Err(AmmError::InvalidPrecision("cannot align to a smaller scale"));
        }
        let factor = BigUint::from(10u8).pow(target - self.scale);
        Ok(Self {
            value: &self.value * factor,
            scale: target,
        })
    }

    /// Returns `true` if both decimals denote the same number once aligned
    /// to a common scale.
    #[must_use]
    pub fn same_magnitude(&self, other: &Self) -> bool {
        let target = self.scale.max(other.scale);
        match (self.align_to(target), other.align_to(target)) {
            (Ok(a), Ok(b)) => a.value == b.value,
            _ => false,
        }
    }

    /// Converts display units into raw token units for a token with the
    /// given decimals, e.g. `"1.5"` with six decimals is `1_500_000`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPrecision`] if the decimal has more fractional
    ///   digits than the token supports.
    /// - [`AmmError::InvalidQuantity`] if the result exceeds the on-chain
    ///   maximum.
    pub fn to_amount(&self, decimals: Decimals) -> crate::error::Result<Amount> {
        let aligned = self.align_to(u32::from(decimals.get()))?;
        let raw = aligned
            .value
            .to_u128()
            .ok_or(AmmError::InvalidQuantity("amount exceeds u64::MAX"))?;
        Amount::new(raw).validate_on_chain()
    }

    /// Renders the decimal.
    ///
    /// With `pad_to_scale` the fractional part is padded with trailing zeros
    /// to exactly `scale` digits; otherwise the canonical form is returned.
    #[must_use]
    pub fn to_decimal_string(&self, pad_to_scale: bool) -> String {
        let digits = self.value.to_str_radix(10);
        if self.scale == 0 {
            return canonicalize(&digits);
        }

        let scale = self.scale as usize;
        let padded = format!("{}{digits}", "0".repeat(scale));
        let split = padded.len() - scale;
        let mut rendered = canonicalize(&format!("{}.{}", &padded[..split], &padded[split..]));

        if pad_to_scale {
            let present = match rendered.find('.') {
                Some(dot) => rendered.len() - dot - 1,
                None => {
                    rendered.push('.');
                    0
                }
            };
            rendered.push_str(&"0".repeat(scale.saturating_sub(present)));
        }
        rendered
    }

    /// Approximates the decimal as `f64`. For display only; never feed the
    /// result back into a quote.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        let v = self.value.to_f64().unwrap_or(f64::INFINITY);
        v / 10f64.powi(i32::try_from(self.scale).unwrap_or(i32::MAX))
    }
}

impl FromStr for ScaledDecimal {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string(false))
    }
}

/// `^[0-9]+$` or `^[0-9]+\.[0-9]*$`.
fn is_plain_decimal(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (s, ""),
    };
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// Strips redundant zeros and a dangling point from a numeric string.
fn canonicalize(s: &str) -> String {
    let mut t = s.trim_start_matches('0');
    if t.contains('.') {
        t = t.trim_end_matches('0');
    }
    let mut out = String::with_capacity(t.len() + 1);
    if t.starts_with('.') {
        out.push('0');
    }
    out.push_str(t);
    if out.is_empty() {
        out.push('0');
    }
    if out.ends_with('.') {
        out.pop();
    }
    out
}
