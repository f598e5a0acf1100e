//! GA evolutionary loop execution.

use super::config::GaConfig;
use super::operators::shuffle_indexes;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Candidate};
use rand::Rng;
use tracing::debug;

/// Result of a genetic search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best tour in the final population.
    pub best_tour: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best cost after each generation, initial population included.
    pub cost_history: Vec<f64>,
}

/// Executes the mu+lambda evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic search on `matrix`.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.len();
        debug!(
            mu = config.population_size,
            lambda = config.offspring_size,
            generations = config.num_generations,
            "genetic search start"
        );

        // Initial population, sorted so index 0 is the incumbent best.
        let tours: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_tour(n, &mut rng))
            .collect();
        let mut population = evaluate_tours(matrix, tours);
        sort_by_cost(&mut population);

        let mut cost_history = Vec::with_capacity(config.num_generations + 1);
        cost_history.push(population[0].cost);

        for _ in 0..config.num_generations {
            let mut offspring = Vec::with_capacity(config.offspring_size);
            while offspring.len() < config.offspring_size {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    config
                        .crossover
                        .offspring(&population[p1].tour, &population[p2].tour, &mut rng)
                        .0
                } else {
                    population[p1].tour.clone()
                };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    shuffle_indexes(&mut child, config.mutation_rate, &mut rng);
                }

                offspring.push(child);
            }

            // mu+lambda: survivors are the best mu of parents + offspring,
            // so the incumbent best can never be lost.
            population.extend(evaluate_tours(matrix, offspring));
            sort_by_cost(&mut population);
            population.truncate(config.population_size);

            cost_history.push(population[0].cost);
        }

        let best = population.into_iter().next().expect("mu >= 2");
        debug!(
            best_cost = best.cost,
            generations = config.num_generations,
            "genetic search done"
        );

        Ok(GaResult {
            best_tour: best.tour,
            best_cost: best.cost,
            generations: config.num_generations,
            cost_history,
        })
    }
}

fn sort_by_cost(population: &mut [Candidate]) {
    population.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(std::cmp::Ordering::Equal));
}

/// Evaluates a batch of tours into candidates.
#[cfg(not(feature = "parallel"))]
fn evaluate_tours(matrix: &DistanceMatrix, tours: Vec<Vec<usize>>) -> Vec<Candidate> {
    tours
        .into_iter()
        .map(|tour| Candidate::evaluated(tour, matrix))
        .collect()
}

/// Evaluates a batch of tours into candidates, in parallel.
///
/// Batch evaluation has no iteration-order dependency, so this is the
/// one place rayon is allowed inside a run.
#[cfg(feature = "parallel")]
fn evaluate_tours(matrix: &DistanceMatrix, tours: Vec<Vec<usize>>) -> Vec<Candidate> {
    use rayon::prelude::*;
    tours
        .into_par_iter()
        .map(|tour| Candidate::evaluated(tour, matrix))
        .collect()
}
