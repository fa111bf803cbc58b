//! Engine-wide pricing configuration.

use super::SolverConfig;
use crate::domain::TokenAddress;
use crate::error::AmmError;

/// Configuration of a [`PricingEngine`](crate::pricing::PricingEngine).
///
/// `primary_token` is the chain's native coin, whose market price the
/// caller supplies to valuations.
///
/// # Examples
///
/// ```
/// use hydra_pricing::config::{PricingConfig, SolverConfig};
/// use hydra_pricing::domain::TokenAddress;
///
/// let native = TokenAddress::from_bytes([2u8; 32]);
/// let cfg = PricingConfig::new(SolverConfig::default(), Some(native)).expect("valid");
/// assert_eq!(cfg.primary_token(), Some(native));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PricingConfig {
    solver: SolverConfig,
    primary_token: Option<TokenAddress>,
}

impl PricingConfig {
    /// Creates a pricing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the solver configuration
    /// is invalid.
    pub fn new(solver: SolverConfig, primary_token: Option<TokenAddress>) -> Result<Self, AmmError> {
        let config = Self {
            solver,
            primary_token,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the solver configuration
    /// is invalid.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.solver.validate()
    }

    /// Solver limits.
    #[must_use]
    pub const fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// The native coin anchoring valuations, if configured.
    #[must_use]
    pub const fn primary_token(&self) -> Option<TokenAddress> {
        self.primary_token
    }
}
