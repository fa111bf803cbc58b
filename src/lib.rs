//! # Hydra Pricing
//!
//! Exact-integer pricing and position accounting for two-asset AMM pools.
//!
//! The crate answers read-only questions about a pool snapshot: what a swap
//! would return after fees, the marginal price, how much of each token a
//! proportional deposit needs, what an LP position redeems for, and what
//! reserves or volume are worth in fiat. It never mutates pool state and
//! never talks to a chain; callers load snapshots through the
//! [`traits::PoolSource`] seam and hand them to the [`pricing::PricingEngine`].
//!
//! Two curve families are supported:
//!
//! - **Constant product**: `x · y = k`
//! - **Stable**: the amplified two-coin invariant, solved by Newton
//!   iteration over arbitrary-precision integers
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pricing::config::PoolConfig;
//! use hydra_pricing::domain::{
//!     Amount, BasisPoints, CurveKind, FeeSchedule, FeeSide, PoolId, PoolSnapshot,
//!     TokenAddress, TokenPair,
//! };
//! use hydra_pricing::pricing::PricingEngine;
//! use hydra_pricing::traits::FromConfig;
//!
//! // 1. Describe the pool
//! let pair = TokenPair::new(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     TokenAddress::from_bytes([2u8; 32]),
//! )
//! .expect("distinct tokens");
//! let fees = FeeSchedule::new(
//!     BasisPoints::ZERO,
//!     BasisPoints::new(30), // 0.30% to LPs
//!     BasisPoints::ZERO,
//!     BasisPoints::ZERO,
//!     FeeSide::X,
//! )
//! .expect("valid fees");
//! let config = PoolConfig::new(
//!     PoolId::from_bytes([9u8; 32]),
//!     pair,
//!     CurveKind::ConstantProduct,
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//! )
//! .expect("valid config")
//! .with_fees(fees);
//!
//! // 2. Build a snapshot and quote a swap
//! let pool = PoolSnapshot::from_config(&config).expect("snapshot built");
//! let engine = PricingEngine::default();
//! let quote = engine.quote_x_to_y(&pool, Amount::new(10_000)).expect("quote");
//!
//! assert_eq!(quote.lp_fee(), Amount::new(30));
//! assert_eq!(quote.amount_out(), Amount::new(9_871));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Data layer  │  implements PoolSource / PositionSource
//! └──────┬───────┘
//!        │ PoolConfig → FromConfig
//!        ▼
//! ┌──────────────┐
//! │  Snapshots   │  PoolSnapshot, PositionSnapshot (immutable)
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐     ┌──────────────────┐
//! │PricingEngine │────▶│ StableSwapSolver │  Newton iteration on BigInt
//! └──────┬───────┘     └──────────────────┘
//!        │ SwapQuote, prices, deposits
//!        ▼
//! ┌──────────────────┐
//! │PositionAccountant│  vesting, shares, mining rewards
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`ScaledDecimal`](domain::ScaledDecimal), [`ValuePerToken`](domain::ValuePerToken), snapshots |
//! | [`config`] | Validated blueprints: [`PoolConfig`](config::PoolConfig), [`SolverConfig`](config::SolverConfig), [`PricingConfig`](config::PricingConfig) |
//! | [`math`] | [`StableSwapSolver`](math::StableSwapSolver) and big-integer helpers |
//! | [`pricing`] | [`PricingEngine`](pricing::PricingEngine): quotes, spot price, deposits, valuation |
//! | [`position`] | [`PositionAccountant`](position::PositionAccountant) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) and data-layer source traits |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod position;
pub mod prelude;
pub mod pricing;
pub mod traits;
