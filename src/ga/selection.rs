//! Parent selection strategies.
//!
//! Both strategies assume minimization: lower cost is better.

use crate::tour::Candidate;
use rand::Rng;

/// Strategy for choosing parents from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pick `k` individuals at random, keep the cheapest.
    ///
    /// Higher `k` means stronger selection pressure.
    Tournament(usize),
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Since cost is minimized, weights use the inverse transformation
    /// `max_cost - cost + epsilon`, so the cheapest tour gets the
    /// largest share of the wheel.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty; runners guarantee `mu >= 2`.
    pub fn select<R: Rng>(&self, population: &[Candidate], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "cannot select from empty population");
        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

fn tournament<R: Rng>(population: &[Candidate], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let contender = rng.random_range(0..n);
        if population[contender].cost < population[best].cost {
            best = contender;
        }
    }
    best
}

fn roulette<R: Rng>(population: &[Candidate], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let max_cost = population
        .iter()
        .map(|c| c.cost)
        .fold(f64::NEG_INFINITY, f64::max);

    let epsilon = 1e-10;
    let weights: Vec<f64> = population
        .iter()
        .map(|c| (max_cost - c.cost + epsilon).max(epsilon))
        .collect();

    let total: f64 = weights.iter().sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
