//! Two-coin stable-swap invariant solver (Curve style).
//!
//! # Invariant (n = 2 tokens, leverage `Ann = 2A`)
//!
//! ```text
//! 2A · (x + y) + D = 2A · D + D³ / (4 · x · y)
//! ```
//!
//! The leverage matches the on-chain program; the `y` solve's coefficients
//! `D / 2A` and `D³ / (8A · x)` depend on it.
//!
//! # Newton iterations
//!
//! ```text
//! D_P    = D · D / (2b) · D / (2q)
//! D_next = D · (2 · D_P + 2A · S) / (D · (2A − 1) + 3 · D_P)
//!
//! c      = D · D / (2 · (x + dx)) · D / (4A)
//! b      = D / (2A) + x + dx
//! y_next = (y² + c) / (2y + b − D)
//! ```
//!
//! Every division truncates toward zero, exactly like settlement. A solve
//! stops once two consecutive iterates differ by at most the configured
//! threshold (one unit by default).

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{trace, warn};

use super::pow10;
use crate::config::SolverConfig;
use crate::domain::Decimals;
use crate::error::AmmError;

/// Result of one Newton solve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewtonOutcome {
    value: BigInt,
    iterations: u32,
    converged: bool,
}

impl NewtonOutcome {
    /// Outcome for inputs where the curve is undefined.
    fn degenerate() -> Self {
        Self {
            value: BigInt::zero(),
            iterations: 0,
            converged: true,
        }
    }

    /// The solved value (the last iterate when not converged).
    #[must_use]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// Consumes the outcome and returns the solved value.
    #[must_use]
    pub fn into_value(self) -> BigInt {
        self.value
    }

    /// Number of Newton steps taken.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether the iterates settled within the threshold.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }

    fn map_value(self, f: impl FnOnce(BigInt) -> BigInt) -> Self {
        Self {
            value: f(self.value),
            ..self
        }
    }
}

/// Newton solver for the two-coin stable-swap invariant.
///
/// # Examples
///
/// ```
/// use hydra_pricing::math::StableSwapSolver;
/// use num_bigint::BigInt;
///
/// let solver = StableSwapSolver::default();
/// let reserve = BigInt::from(1_000_000u64);
///
/// let d = solver.compute_d(&reserve, &reserve, 100).expect("solve");
/// assert_eq!(*d.value(), BigInt::from(2_000_000u64));
///
/// let dy = solver
///     .compute_y(&BigInt::from(1_000u64), &reserve, &reserve, 100)
///     .expect("solve");
/// assert!(*dy.value() > BigInt::from(990u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StableSwapSolver {
    config: SolverConfig,
}

impl StableSwapSolver {
    /// Creates a solver with the given iteration limits.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the iteration limits.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn within_threshold(&self, current: &BigInt, previous: &BigInt) -> bool {
        (current - previous).abs() <= BigInt::from(self.config.convergence_threshold())
    }

    fn finish(&self, solve: &'static str, outcome: NewtonOutcome) -> Result<NewtonOutcome, AmmError> {
        if outcome.converged {
            trace!(solve, iterations = outcome.iterations, "newton solve converged");
            return Ok(outcome);
        }
        if self.config.require_convergence() {
            return Err(AmmError::NewtonRaphsonNonConvergence(solve));
        }
        warn!(
            solve,
            iterations = outcome.iterations,
            value = %outcome.value,
            "newton solve did not converge, using last iterate"
        );
        Ok(outcome)
    }

    /// Solves the invariant `D` for balances `b` and `q`.
    ///
    /// Returns zero when either balance is zero, where the invariant is
    /// undefined.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `amp` is zero.
    /// - [`AmmError::NewtonRaphsonNonConvergence`] only when the solver is
    ///   configured to require convergence.
    pub fn compute_d(&self, b: &BigInt, q: &BigInt, amp: u64) -> Result<NewtonOutcome, AmmError> {
        ensure_amplification(amp)?;
        if b.is_zero() || q.is_zero() {
            return Ok(NewtonOutcome::degenerate());
        }

        let two = BigInt::from(2u8);
        let three = BigInt::from(3u8);
        let a = BigInt::from(amp);
        let sum = b + q;
        let leverage = &sum * &two * &a;
        let d_coeff = &two * &a - BigInt::one();
        let two_b = &two * b;
        let two_q = &two * q;

        let mut d = sum;
        let mut iterations = 0;
        let mut converged = false;
        for _ in 0..self.config.max_iterations() {
            iterations += 1;
            let mut d_prod = &d * &d / &two_b;
            d_prod = d_prod * &d / &two_q;

            let denominator = &d * &d_coeff + &three * &d_prod;
            if denominator.is_zero() {
                break;
            }
            let next = &d * (&two * &d_prod + &leverage) / denominator;
            let settled = self.within_threshold(&next, &d);
            d = next;
            if settled {
                converged = true;
                break;
            }
        }

        self.finish(
            "stable invariant D",
            NewtonOutcome {
                value: d,
                iterations,
                converged,
            },
        )
    }

    /// Solves the output of selling `dx` into a pool holding `x` of the
    /// input token and `y` of the output token.
    ///
    /// The value is `y − y' − 1` where `y'` is the post-trade balance; it
    /// may be zero or negative, meaning the trade is not executable.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `amp` is zero.
    /// - [`AmmError::NewtonRaphsonNonConvergence`] only when the solver is
    ///   configured to require convergence.
    pub fn compute_y(
        &self,
        dx: &BigInt,
        x: &BigInt,
        y: &BigInt,
        amp: u64,
    ) -> Result<NewtonOutcome, AmmError> {
        ensure_amplification(amp)?;
        let d = self.compute_d(x, y, amp)?.into_value();
        let x_new = x + dx;
        if d.is_zero() || x_new.is_zero() {
            return Ok(NewtonOutcome::degenerate());
        }

        let two = BigInt::from(2u8);
        let a = BigInt::from(amp);
        let c = &d * &d / (&two * &x_new) * &d / (BigInt::from(4u8) * &a);
        let b = &d / (&two * &a) + &x_new;

        let mut yy = d.clone();
        let mut iterations = 0;
        let mut converged = false;
        for _ in 0..self.config.max_iterations() {
            iterations += 1;
            let denominator = &two * &yy + &b - &d;
            if denominator.is_zero() {
                break;
            }
            let next = (&yy * &yy + &c) / denominator;
            let settled = self.within_threshold(&next, &yy);
            yy = next;
            if settled {
                converged = true;
                break;
            }
        }

        self.finish(
            "stable output y",
            NewtonOutcome {
                value: y - yy - BigInt::one(),
                iterations,
                converged,
            },
        )
    }

    /// Solves `y` with both balances lifted by per-token scale factors and
    /// the output brought back to raw units of the output token.
    ///
    /// # Errors
    ///
    /// Same as [`compute_y`](Self::compute_y).
    pub fn compute_y_scaled(
        &self,
        dx: &BigInt,
        x: &BigInt,
        y: &BigInt,
        amp: u64,
        x_scale: &BigInt,
        y_scale: &BigInt,
    ) -> Result<NewtonOutcome, AmmError> {
        if y_scale.is_zero() {
            return Ok(NewtonOutcome::degenerate());
        }
        let outcome = self.compute_y(&(dx * x_scale), &(x * x_scale), &(y * y_scale), amp)?;
        Ok(outcome.map_value(|v| v / y_scale))
    }

    /// [`compute_d`](Self::compute_d) with both balances first normalized to
    /// the larger of the two decimal precisions.
    ///
    /// # Errors
    ///
    /// Same as [`compute_d`](Self::compute_d).
    pub fn compute_d_decimal(
        &self,
        b: &BigInt,
        q: &BigInt,
        amp: u64,
        b_decimals: Decimals,
        q_decimals: Decimals,
    ) -> Result<NewtonOutcome, AmmError> {
        let (bs, qs) = normalization_scales(b_decimals, q_decimals);
        self.compute_d(&(b * bs), &(q * qs), amp)
    }

    /// [`compute_y`](Self::compute_y) with both balances first normalized to
    /// the larger of the two decimal precisions; the output is returned in
    /// raw units of the output token.
    ///
    /// # Errors
    ///
    /// Same as [`compute_y`](Self::compute_y).
    pub fn compute_y_decimal(
        &self,
        dx: &BigInt,
        x: &BigInt,
        y: &BigInt,
        amp: u64,
        x_decimals: Decimals,
        y_decimals: Decimals,
    ) -> Result<NewtonOutcome, AmmError> {
        let (xs, ys) = normalization_scales(x_decimals, y_decimals);
        self.compute_y_scaled(dx, x, y, amp, &xs, &ys)
    }
}

const fn ensure_amplification(amp: u64) -> Result<(), AmmError> {
    if amp == 0 {
        return Err(AmmError::InvalidConfiguration(
            "amplification must be greater than zero",
        ));
    }
    Ok(())
}

/// Multipliers that lift two precisions to the larger one.
fn normalization_scales(a: Decimals, b: Decimals) -> (BigInt, BigInt) {
    let max = a.get().max(b.get());
    (
        pow10(u32::from(max - a.get())),
        pow10(u32::from(max - b.get())),
    )
}
