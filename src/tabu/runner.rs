//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour.
//! 2. At each iteration:
//!    a. Sample a neighborhood of N candidates via the configured operator
//!    b. Discard candidates equal to a tabu entry
//!    c. Move to the cheapest remaining candidate, improving or not
//!    d. Record the new tour in the tabu list (FIFO, bounded)
//!    e. Update the global best if beaten
//! 3. Stop when the budget runs out or no admissible candidate remains.

use super::config::TabuConfig;
use super::list::TabuList;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::report::Termination;
use crate::tour::{random_tour, Candidate};
use tracing::debug;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best tour observed across all iterations.
    pub best_tour: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Why the search stopped.
    pub termination: Termination,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Tabu search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes tabu search on `matrix`.
    ///
    /// An exhausted neighborhood (every sampled candidate tabu) ends the
    /// run early with the best solution found so far; it is not an error.
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<TabuResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.len();
        debug!(
            max_iterations = config.max_iterations,
            tabu_list_size = config.tabu_list_size,
            operator = %config.operator,
            "tabu search start"
        );

        let mut current = random_tour(n, &mut rng);
        let mut best = Candidate::evaluated(current.clone(), matrix);

        let mut tabu = TabuList::new(config.tabu_list_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut termination = Termination::Budget;

        for _ in 0..config.max_iterations {
            // The working solution moves to the cheapest non-tabu sample,
            // improving or not; only the tabu filter constrains it.
            let mut chosen: Option<Candidate> = None;
            for neighbor in config.operator.neighborhood(&current, n, &mut rng) {
                if tabu.contains(&neighbor) {
                    continue;
                }
                let cost = matrix.cycle_cost(&neighbor);
                match &chosen {
                    Some(c) if c.cost <= cost => {}
                    _ => chosen = Some(Candidate {
                        tour: neighbor,
                        cost,
                    }),
                }
            }

            let Some(next) = chosen else {
                termination = Termination::NeighborhoodExhausted;
                break;
            };

            current = next.tour.clone();
            tabu.push(next.tour);

            if next.cost < best.cost {
                best = Candidate {
                    tour: current.clone(),
                    cost: next.cost,
                };
            }
            cost_history.push(best.cost);
        }

        debug!(
            best_cost = best.cost,
            iterations = cost_history.len(),
            ?termination,
            "tabu search done"
        );

        Ok(TabuResult {
            best_tour: best.tour,
            best_cost: best.cost,
            iterations: cost_history.len(),
            termination,
            cost_history,
        })
    }
}
