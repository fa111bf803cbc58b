//! Trait abstractions at the edges of the pricing core.
//!
//! [`FromConfig`] builds validated snapshots from configuration;
//! [`PoolSource`], [`PositionSource`] and [`TokenInfoSource`] are the
//! inbound seams a data layer implements to feed snapshots in.

mod from_config;
mod source;

pub use from_config::FromConfig;
pub use source::{PoolSource, PositionSource, TokenInfoSource};
