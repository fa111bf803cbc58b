//! Generic construction trait for building snapshots from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating validated
//! values from their configuration structs. The data layer fills a
//! [`PoolConfig`](crate::config::PoolConfig) from decoded on-chain state
//! and turns it into a [`PoolSnapshot`](crate::domain::PoolSnapshot):
//!
//! ```text
//! PoolSnapshot::from_config(&pool_config)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction. A successfully constructed value satisfies the on-chain
//! bounds:
//!
//! - Token pair has two distinct addresses
//! - Reserves and LP supply fit in `u64`
//! - Fee rates are within `0..=10_000` bps
//! - Stable curve parameters are non-zero
//!
//! There is no blanket implementation: every config pairing is explicit.

use crate::error::AmmError;

/// Generic construction trait for building a value from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the value.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolSnapshot`
pub trait FromConfig<C> {
    /// Creates a new value from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused
    /// (e.g., for logging or retry).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if an amount exceeds its on-chain
    ///   bound.
    /// - [`AmmError::InvalidFee`] if a fee rate is out of range.
    /// - [`AmmError::InvalidConfiguration`] if any other parameter is out
    ///   of range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
