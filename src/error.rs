//! Unified error types for the pricing core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! Numerical edge cases that are expected steady states (a price on an empty
//! pool, a valuation with no anchored side) are **not** errors: they surface
//! as sentinels (`0.0`, `None`) from the functions that produce them.

use thiserror::Error;

use crate::domain::UnavailableReason;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by the pricing and accounting core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A decimal string did not match the accepted grammar.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(&'static str),

    /// A trade, deposit or withdraw amount is out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A decimal precision or scale alignment is not allowed.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A fee rate is outside `0..=10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A token is not part of the pool or the pair is malformed.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The pool cannot serve the request; callers branch on the reason.
    #[error("pool unavailable: {0}")]
    PoolUnavailable(UnavailableReason),

    /// A position snapshot was paired with a snapshot of a different pool.
    #[error("position does not belong to the supplied pool")]
    PoolMismatch,

    /// Arithmetic overflow while converting a result to a bounded type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A Newton solve ran out of iterations and the caller required convergence.
    #[error("newton iteration did not converge: {0}")]
    NewtonRaphsonNonConvergence(&'static str),
}
