//! Time-vested LP position accounting.
//!
//! [`PositionAccountant`] derives what a position is worth right now:
//! the claimable share of its recorded value under its vesting state, the
//! resulting fraction of the pool, and the coin amounts that fraction
//! redeems for.

mod accountant;

pub use accountant::PositionAccountant;
