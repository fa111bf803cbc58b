//! Engine state, pool availability, and spot prices.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use tracing::debug;

use crate::config::PricingConfig;
use crate::domain::{
    CurveKind, Decimals, PoolSnapshot, SwapDirection, TokenAddress, UnavailableReason,
};
use crate::error::AmmError;
use crate::math::{pow10, StableSwapSolver};

/// Pure pricing functions over [`PoolSnapshot`]s.
///
/// The engine holds only configuration: the solver limits and the primary
/// token used to anchor valuations. Every method is a function of its
/// arguments, so one engine can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use hydra_pricing::config::PoolConfig;
/// use hydra_pricing::domain::{Amount, CurveKind, PoolId, PoolSnapshot, TokenAddress, TokenPair};
/// use hydra_pricing::pricing::PricingEngine;
/// use hydra_pricing::traits::FromConfig;
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct tokens");
/// let cfg = PoolConfig::new(
///     PoolId::from_bytes([9u8; 32]),
///     pair,
///     CurveKind::ConstantProduct,
///     Amount::new(1_000),
///     Amount::new(1_000),
///     Amount::new(1_000),
/// )
/// .expect("valid config");
/// let pool = PoolSnapshot::from_config(&cfg).expect("valid pool");
///
/// let engine = PricingEngine::default();
/// let quote = engine.quote_x_to_y(&pool, Amount::new(100)).expect("quote");
/// assert_eq!(quote.amount_out(), Amount::new(90));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingEngine {
    config: PricingConfig,
    solver: StableSwapSolver,
}

impl PricingEngine {
    /// Creates an engine from a validated configuration.
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self {
            solver: StableSwapSolver::new(*config.solver()),
            config,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Stable-swap solver used for stable pools.
    #[must_use]
    pub const fn solver(&self) -> &StableSwapSolver {
        &self.solver
    }

    // -- availability -------------------------------------------------------

    /// Returns why the pool cannot serve swaps, or `None` if it can.
    ///
    /// A frozen pool reports [`UnavailableReason::Frozen`] even when it is
    /// also empty.
    #[must_use]
    pub const fn unavailable_reason(&self, pool: &PoolSnapshot) -> Option<UnavailableReason> {
        if pool.is_frozen() {
            Some(UnavailableReason::Frozen)
        } else if pool.is_empty() {
            Some(UnavailableReason::Empty)
        } else {
            None
        }
    }

    /// Returns `true` when the pool is neither frozen nor empty.
    #[must_use]
    pub const fn is_available_for_swap(&self, pool: &PoolSnapshot) -> bool {
        self.unavailable_reason(pool).is_none()
    }

    /// Resolves a `from → to` trade into the pool's direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolUnavailable`] with
    /// [`UnavailableReason::Unknown`] if the pool does not trade this pair.
    pub fn swap_direction(
        &self,
        pool: &PoolSnapshot,
        from: TokenAddress,
        to: TokenAddress,
    ) -> Result<SwapDirection, AmmError> {
        pool.pair()
            .direction(from, to)
            .ok_or(AmmError::PoolUnavailable(UnavailableReason::Unknown))
    }

    /// Resolves the direction and checks the pool can serve it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolUnavailable`] with the first reason that
    /// applies: unknown pair, then frozen, then empty.
    pub fn check_swap(
        &self,
        pool: &PoolSnapshot,
        from: TokenAddress,
        to: TokenAddress,
    ) -> Result<SwapDirection, AmmError> {
        let direction = self.swap_direction(pool, from, to)?;
        match self.unavailable_reason(pool) {
            Some(reason) => Err(AmmError::PoolUnavailable(reason)),
            None => Ok(direction),
        }
    }

    // -- spot price ---------------------------------------------------------

    /// Marginal price of X in units of Y, adjusted for display decimals.
    ///
    /// Display only. Returns `0.0` for an empty pool or whenever the result
    /// would not be a finite number.
    #[must_use]
    pub fn spot_price(&self, pool: &PoolSnapshot, x_decimals: Decimals, y_decimals: Decimals) -> f64 {
        if pool.is_empty() {
            return 0.0;
        }
        let price = match pool.curve() {
            CurveKind::ConstantProduct => {
                pool.y().to_f64_lossy() / pool.x().to_f64_lossy() * x_decimals.factor_f64()
                    / y_decimals.factor_f64()
            }
            CurveKind::Stable(_) => match self.spot_price_rational(pool, x_decimals, y_decimals) {
                Ok((pn, pd)) => ratio_to_f64(&pn, &pd),
                Err(e) => {
                    debug!(pool = %pool.id(), error = %e, "stable spot price unavailable");
                    0.0
                }
            },
        };
        if price.is_finite() {
            price
        } else {
            0.0
        }
    }

    /// Exact stable-curve marginal price as a `(numerator, denominator)`
    /// pair.
    ///
    /// With both reserves normalized to the larger precision (`q1` for X,
    /// `b1` for Y) and `D` the invariant of `(b1, q1)`:
    ///
    /// ```text
    /// pn = b1 · (D + 4A · (2·q1 + b1 − D))
    /// pd = q1 · (D + 4A · (2·b1 + q1 − D))
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the pool is not a stable pool.
    /// - [`AmmError::PoolUnavailable`] if the pool is empty.
    /// - [`AmmError::NewtonRaphsonNonConvergence`] under a strict solver.
    pub fn spot_price_rational(
        &self,
        pool: &PoolSnapshot,
        x_decimals: Decimals,
        y_decimals: Decimals,
    ) -> Result<(BigInt, BigInt), AmmError> {
        let Some(params) = pool.curve().stable_params() else {
            return Err(AmmError::InvalidConfiguration(
                "rational spot price requires a stable pool",
            ));
        };
        if pool.is_empty() {
            return Err(AmmError::PoolUnavailable(UnavailableReason::Empty));
        }

        let md = x_decimals.get().max(y_decimals.get());
        let q1 = pool.x().to_bigint() * pow10(u32::from(md - x_decimals.get()));
        let b1 = pool.y().to_bigint() * pow10(u32::from(md - y_decimals.get()));
        let d = self
            .solver
            .compute_d(&b1, &q1, params.amplification())?
            .into_value();

        let four_a = BigInt::from(4u8) * BigInt::from(params.amplification());
        let two = BigInt::from(2u8);
        let pn = &b1 * (&d + &four_a * (&two * &q1 + &b1 - &d));
        let pd = &q1 * (&d + &four_a * (&two * &b1 + &q1 - &d));
        Ok((pn, pd))
    }
}

/// Lossy `n / d`; `NaN` and infinities are left for the caller to filter.
fn ratio_to_f64(n: &BigInt, d: &BigInt) -> f64 {
    if d.is_zero() {
        return f64::NAN;
    }
    match (n.to_f64(), d.to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}
