//! Configuration of the stable-swap Newton solver.

use crate::error::AmmError;

/// Iteration limits for the stable-swap Newton solves.
///
/// The defaults reproduce on-chain settlement: at most 256 iterations,
/// stop when consecutive iterates differ by at most one unit, and use the
/// last iterate if the budget runs out.
///
/// # Examples
///
/// ```
/// use hydra_pricing::config::SolverConfig;
///
/// let cfg = SolverConfig::default();
/// assert_eq!(cfg.max_iterations(), 256);
/// assert!(!cfg.require_convergence());
///
/// let strict = cfg.with_require_convergence(true);
/// assert!(strict.require_convergence());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolverConfig {
    max_iterations: u32,
    convergence_threshold: u32,
    require_convergence: bool,
}

impl SolverConfig {
    /// Iteration budget used on-chain.
    pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

    /// Largest step between iterates that still counts as converged.
    pub const DEFAULT_CONVERGENCE_THRESHOLD: u32 = 1;

    /// Creates a solver configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `max_iterations` is zero.
    pub const fn new(
        max_iterations: u32,
        convergence_threshold: u32,
        require_convergence: bool,
    ) -> Result<Self, AmmError> {
        let config = Self {
            max_iterations,
            convergence_threshold,
            require_convergence,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `max_iterations` is zero.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if self.max_iterations == 0 {
            return Err(AmmError::InvalidConfiguration(
                "solver needs at least one iteration",
            ));
        }
        Ok(())
    }

    /// Returns a copy that fails instead of using a non-converged iterate.
    #[must_use]
    pub const fn with_require_convergence(mut self, require: bool) -> Self {
        self.require_convergence = require;
        self
    }

    /// Maximum Newton iterations per solve.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Convergence threshold in raw units.
    #[must_use]
    pub const fn convergence_threshold(&self) -> u32 {
        self.convergence_threshold
    }

    /// Whether a non-converged solve is an error.
    #[must_use]
    pub const fn require_convergence(&self) -> bool {
        self.require_convergence
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: Self::DEFAULT_CONVERGENCE_THRESHOLD,
            require_convergence: false,
        }
    }
}
