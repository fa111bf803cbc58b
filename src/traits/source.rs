//! Seams to the data layer.
//!
//! The pricing core never talks to a chain. Whatever fetches and decodes
//! on-chain objects implements these traits and hands the pricing engine
//! plain snapshots. No implementation lives in this crate.

use crate::domain::{AccountAddress, PoolId, PoolSnapshot, PositionSnapshot, TokenAddress, TokenInfo};
use crate::error::AmmError;

/// Loads pool snapshots.
pub trait PoolSource {
    /// Returns the current snapshot of a pool.
    ///
    /// # Errors
    ///
    /// Implementations return any [`AmmError`] produced while building the
    /// snapshot, typically through
    /// [`FromConfig`](crate::traits::FromConfig).
    fn load_pool(&self, id: &PoolId) -> Result<PoolSnapshot, AmmError>;
}

/// Loads the positions an account owns.
pub trait PositionSource {
    /// Returns every position owned by `owner`.
    ///
    /// # Errors
    ///
    /// Implementations return any [`AmmError`] produced while decoding.
    fn load_positions(&self, owner: &AccountAddress) -> Result<Vec<PositionSnapshot>, AmmError>;
}

/// Resolves token metadata.
pub trait TokenInfoSource {
    /// Returns decimals and stable-coin metadata for `token`, or `None`
    /// if it is unknown.
    fn token_info(&self, token: &TokenAddress) -> Option<TokenInfo>;
}
