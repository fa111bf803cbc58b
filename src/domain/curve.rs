//! Pricing curve of a pool.

use crate::error::AmmError;

/// Parameters of a two-coin stable-swap curve.
///
/// `x_scale` and `y_scale` lift both reserves onto a common precision
/// before the invariant is solved, so a 6-decimal and a 9-decimal stable
/// coin can trade at par.
///
/// # Examples
///
/// ```
/// use hydra_pricing::domain::StableParams;
///
/// let params = StableParams::new(100, 1_000, 1).expect("valid params");
/// assert_eq!(params.amplification(), 100);
/// assert!(StableParams::new(0, 1, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StableParams {
    amplification: u64,
    x_scale: u64,
    y_scale: u64,
}

impl StableParams {
    /// Creates validated stable-curve parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the amplification or
    /// either scale factor is zero.
    pub const fn new(amplification: u64, x_scale: u64, y_scale: u64) -> Result<Self, AmmError> {
        if amplification == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amplification must be greater than zero",
            ));
        }
        if x_scale == 0 || y_scale == 0 {
            return Err(AmmError::InvalidConfiguration(
                "stable scale factors must be greater than zero",
            ));
        }
        Ok(Self {
            amplification,
            x_scale,
            y_scale,
        })
    }

    /// The amplification coefficient `A`.
    #[must_use]
    pub const fn amplification(&self) -> u64 {
        self.amplification
    }

    /// Multiplier applied to X amounts before solving.
    #[must_use]
    pub const fn x_scale(&self) -> u64 {
        self.x_scale
    }

    /// Multiplier applied to Y amounts before solving.
    #[must_use]
    pub const fn y_scale(&self) -> u64 {
        self.y_scale
    }
}

/// The invariant a pool prices trades with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// `x · y = k`.
    ConstantProduct,
    /// Curve-style stable swap with its parameters.
    Stable(StableParams),
}

impl CurveKind {
    /// Returns the stable parameters, if this is a stable curve.
    #[must_use]
    pub const fn stable_params(&self) -> Option<&StableParams> {
        match self {
            Self::Stable(p) => Some(p),
            Self::ConstantProduct => None,
        }
    }

    /// Returns `true` for [`CurveKind::Stable`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable(_))
    }
}
