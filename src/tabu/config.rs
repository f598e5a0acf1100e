//! Tabu search configuration.

use crate::error::{Error, Result};
use crate::ops::Operator;

/// Configuration parameters for tabu search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
/// use tsp_metaheur::ops::Operator;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(400)
///     .with_tabu_list_size(20)
///     .with_operator(Operator::Insert);
/// assert_eq!(config.tabu_list_size, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Capacity of the tabu list.
    pub tabu_list_size: usize,
    /// Neighborhood operator.
    pub operator: Operator,
    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_list_size: 10,
            operator: Operator::Swap,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_list_size(mut self, n: usize) -> Self {
        self.tabu_list_size = n;
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
        if self.tabu_list_size == 0 {
            return Err(Error::Configuration(
                "tabu_list_size must be at least 1".into(),
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
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = TabuConfig::default()
            .with_tabu_list_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(TabuConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }
}
