//! Hill climbing configuration.

use crate::error::{Error, Result};
use crate::ops::Operator;

/// Configuration for multistart hill climbing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::hillclimb::HillClimbConfig;
/// use tsp_metaheur::ops::Operator;
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(2000)
///     .with_max_no_improve(200)
///     .with_num_restarts(20)
///     .with_operator(Operator::Reverse);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Iteration budget per restart.
    pub max_iterations: usize,
    /// Consecutive non-improving iterations before a restart stops early.
    pub max_no_improve: usize,
    /// Number of independent restarts.
    pub num_restarts: usize,
    /// Neighborhood operator.
    pub operator: Operator,
    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_no_improve: 100,
            num_restarts: 20,
            operator: Operator::Swap,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    /// Sets the per-restart iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stall threshold.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the number of restarts.
    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    /// Sets the neighborhood operator.
    pub fn with_operator(mut self, op: Operator) -> Self {
        self.operator = op;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::Configuration(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.max_no_improve == 0 {
            return Err(Error::Configuration(
                "max_no_improve must be at least 1".into(),
            ));
        }
        if self.num_restarts == 0 {
            return Err(Error::Configuration(
                "num_restarts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(HillClimbConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(HillClimbConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default()
            .with_max_no_improve(0)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default()
            .with_num_restarts(0)
            .validate()
            .is_err());
    }
}
