//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_pricing::prelude::*;
//! ```

pub use crate::domain::{
    AccountAddress, Amount, BasisPoints, CurveKind, Decimals, FeeSchedule, FeeSide, PoolId,
    PoolSnapshot, PositionSnapshot, Rounding, ScaledDecimal, StableParams, SwapDirection,
    SwapQuote, TokenAddress, TokenInfo, TokenPair, UnavailableReason, ValuePerToken,
};

pub use crate::traits::{FromConfig, PoolSource, PositionSource, TokenInfoSource};

pub use crate::math::StableSwapSolver;

pub use crate::config::{PoolConfig, PricingConfig, SolverConfig};

pub use crate::error::{AmmError, Result};

pub use crate::position::PositionAccountant;
pub use crate::pricing::PricingEngine;
