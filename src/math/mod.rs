//! Exact integer math behind the pricing engine.
//!
//! This module provides [`StableSwapSolver`], the Newton solver for the
//! two-coin stable-swap invariant, and [`pow10`] for decimal
//! normalization. All arithmetic is arbitrary-precision and truncating so
//! that previews match settlement bit for bit.

mod power;
mod stable_swap;

pub use power::pow10;
pub use stable_swap::{NewtonOutcome, StableSwapSolver};
