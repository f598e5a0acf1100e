//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Candidate};
use rand::Rng;
use tracing::debug;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Best tour found.
    pub best_tour: Vec<usize>,
    /// Energy (cycle cost) of the best tour.
    pub best_cost: f64,
    /// Annealing steps executed.
    pub iterations: usize,
    /// Temperature at the final step.
    pub final_temperature: f64,
    /// Accepted moves, improvements included.
    pub accepted_moves: usize,
    /// Strictly improving moves.
    pub improving_moves: usize,
    /// Best cost sampled at regular intervals.
    pub cost_history: Vec<f64>,
}

/// Executes simulated annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealer on `matrix`.
    pub fn run(matrix: &DistanceMatrix, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        debug!(
            t_max = config.t_max,
            t_min = config.t_min,
            steps = config.steps,
            operator = %config.operator,
            "annealing start"
        );

        let mut current = random_tour(matrix.len(), &mut rng);
        let mut current_cost = matrix.cycle_cost(&current);
        let mut best = Candidate {
            tour: current.clone(),
            cost: current_cost,
        };

        let mut accepted_moves = 0;
        let mut improving_moves = 0;
        let mut temperature = config.t_max;

        let history_interval = (config.steps / 100).max(1);
        let mut cost_history = vec![best.cost];

        for step in 0..config.steps {
            temperature = config
                .cooling
                .temperature(config.t_max, config.t_min, step, config.steps);

            let neighbor = config.operator.neighbor(&current, &mut rng);
            let neighbor_cost = matrix.cycle_cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            if delta < 0.0 {
                improving_moves += 1;
            }
            if metropolis(delta, temperature, &mut rng) {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best.cost {
                    best = Candidate {
                        tour: current.clone(),
                        cost: current_cost,
                    };
                }
            }

            if (step + 1) % history_interval == 0 {
                cost_history.push(best.cost);
            }
        }

        debug!(
            best_cost = best.cost,
            accepted_moves, improving_moves, "annealing done"
        );

        Ok(SaResult {
            best_tour: best.tour,
            best_cost: best.cost,
            iterations: config.steps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Metropolis acceptance: downhill moves always, uphill moves with
/// probability `exp(-delta / temperature)`.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}
