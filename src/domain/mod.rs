//! Fundamental domain value types of the pricing core.
//!
//! This module contains the value types the pricing engine and position
//! accountant operate on: raw amounts, fee rates, decimal metadata,
//! arbitrary-precision decimals, accumulators, identifiers, and the
//! immutable pool and position snapshots. All types use newtypes with
//! validated constructors to enforce invariants.

mod amount;
mod availability;
mod basis_points;
mod curve;
mod decimals;
mod fee_schedule;
mod identifiers;
mod pool_snapshot;
mod position_snapshot;
mod rounding;
mod scaled_decimal;
mod swap_quote;
mod token;
mod token_pair;
mod value_per_token;

pub use amount::Amount;
pub use availability::UnavailableReason;
pub use basis_points::BasisPoints;
pub use curve::{CurveKind, StableParams};
pub use decimals::Decimals;
pub use fee_schedule::{FeeSchedule, FeeSide};
pub use identifiers::{AccountAddress, PoolId, TokenAddress};
pub use pool_snapshot::{MiningState, PoolSnapshot, TradeVolume};
pub use position_snapshot::{PositionSnapshot, Vesting};
pub use rounding::Rounding;
pub use scaled_decimal::ScaledDecimal;
pub use swap_quote::SwapQuote;
pub use token::{StableCoin, TokenInfo};
pub use token_pair::{SwapDirection, TokenPair};
pub use value_per_token::ValuePerToken;
