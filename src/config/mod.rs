//! Configuration structs.
//!
//! This module contains [`PoolConfig`], the declarative blueprint a pool
//! snapshot is built from, along with [`PricingConfig`] and
//! [`SolverConfig`], which replace any process-wide state the pricing
//! engine would otherwise depend on.

mod pool;
mod pricing;
mod solver;

pub use pool::PoolConfig;
pub use pricing::PricingConfig;
pub use solver::SolverConfig;
