//! Pool pricing: availability, spot prices, swap quotes, liquidity sizing
//! and valuation.
//!
//! Every operation lives on [`PricingEngine`] and is a pure function of
//! the [`PoolSnapshot`](crate::domain::PoolSnapshot) it is given. Trade
//! math is exact integer arithmetic that truncates like settlement does;
//! only spot prices and valuations are `f64`, and those are for display.
//!
//! | Curve | Output for net input `dx` |
//! |-------|---------------------------|
//! | Constant product | `y · dx / (x + dx)` |
//! | Stable | `compute_y(dx · xs, x · xs, y · ys) / ys` |

mod engine;
mod liquidity;
mod swap;
mod valuation;

#[cfg(test)]
mod proptest_properties;
#[cfg(test)]
mod test_support;

pub use engine::PricingEngine;
