//! GA configuration.

use super::operators::Crossover;
use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the genetic search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_offspring_size(200)
///     .with_num_generations(1500)
///     .with_selection(Selection::Tournament(6))
///     .with_crossover(Crossover::PartiallyMatched)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of survivors kept each generation (`mu`).
    pub population_size: usize,
    /// Number of offspring produced each generation (`lambda`).
    pub offspring_size: usize,
    /// Number of generations to evolve.
    pub num_generations: usize,
    /// Probability of recombining a parent pair; otherwise the first
    /// parent is copied (`cxpb`).
    pub crossover_rate: f64,
    /// Probability of mutating an offspring, and the per-position
    /// shuffle probability inside the mutation (`mutpb`).
    pub mutation_rate: f64,
    /// Parent selection strategy.
    pub selection: Selection,
    /// Recombination strategy.
    pub crossover: Crossover,
    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_size: 200,
            num_generations: 1000,
            crossover_rate: 0.7,
            mutation_rate: 0.2,
            selection: Selection::default(),
            crossover: Crossover::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets `mu`, the number of survivors per generation.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets `lambda`, the number of offspring per generation.
    pub fn with_offspring_size(mut self, n: usize) -> Self {
        self.offspring_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::Configuration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.offspring_size == 0 {
            return Err(Error::Configuration(
                "offspring_size must be at least 1".into(),
            ));
        }
        if self.num_generations == 0 {
            return Err(Error::Configuration(
                "num_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(Error::Configuration(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::Configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(Error::Configuration(
                "tournament size must be at least 1".into(),
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
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_population_rejected() {
        assert!(GaConfig::default()
            .with_population_size(1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(GaConfig::default().with_offspring_size(0).validate().is_err());
        assert!(GaConfig::default()
            .with_num_generations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rates_outside_unit_interval_rejected() {
        assert!(GaConfig::default().with_crossover_rate(1.5).validate().is_err());
        assert!(GaConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_tournament_rejected() {
        let err = GaConfig::default()
            .with_selection(Selection::Tournament(0))
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
