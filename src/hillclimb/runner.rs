//! Hill climbing execution loop.

use super::config::HillClimbConfig;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Candidate};
use rand::Rng;
use tracing::debug;

/// Result of a multistart hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbResult {
    /// Best tour found across all restarts.
    pub best_tour: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Restarts executed.
    pub restarts: usize,
    /// Total neighbor evaluations across all restarts.
    pub iterations: usize,
    /// Total accepted (strictly improving) moves across all restarts.
    pub accepted_moves: usize,
    /// Final cost reached by each restart, in order.
    pub restart_costs: Vec<f64>,
}

/// Executes multistart hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs the search on `matrix`.
    ///
    /// Fails fast with a configuration error before any search work; a
    /// stalled restart is a normal exit, not an error.
    pub fn run(matrix: &DistanceMatrix, config: &HillClimbConfig) -> Result<HillClimbResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        debug!(
            restarts = config.num_restarts,
            max_iterations = config.max_iterations,
            operator = %config.operator,
            "hill climbing start"
        );

        let mut best: Option<Candidate> = None;
        let mut total_iterations = 0;
        let mut accepted_moves = 0;
        let mut restart_costs = Vec::with_capacity(config.num_restarts);

        for _ in 0..config.num_restarts {
            let restart = climb(matrix, config, &mut rng);
            total_iterations += restart.iterations;
            accepted_moves += restart.accepted_costs.len() - 1;
            restart_costs.push(restart.best.cost);

            match &best {
                Some(b) if b.cost <= restart.best.cost => {}
                _ => best = Some(restart.best),
            }
        }

        let best = best.expect("num_restarts >= 1 produced a solution");
        debug!(
            best_cost = best.cost,
            iterations = total_iterations,
            "hill climbing done"
        );

        Ok(HillClimbResult {
            best_tour: best.tour,
            best_cost: best.cost,
            restarts: config.num_restarts,
            iterations: total_iterations,
            accepted_moves,
            restart_costs,
        })
    }
}

/// One restart's outcome.
struct Restart {
    best: Candidate,
    iterations: usize,
    /// Cost after each accepted move, improvement order preserved.
    accepted_costs: Vec<f64>,
}

/// A single greedy descent from a fresh random tour.
fn climb<R: Rng>(matrix: &DistanceMatrix, config: &HillClimbConfig, rng: &mut R) -> Restart {
    let mut current = random_tour(matrix.len(), rng);
    let mut current_cost = matrix.cycle_cost(&current);

    let mut accepted_costs = vec![current_cost];
    let mut no_improve = 0;
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;

        let neighbor = config.operator.neighbor(&current, rng);
        let neighbor_cost = matrix.cycle_cost(&neighbor);

        if neighbor_cost < current_cost {
            current = neighbor;
            current_cost = neighbor_cost;
            accepted_costs.push(current_cost);
            no_improve = 0;
        } else {
            no_improve += 1;
        }

        if no_improve >= config.max_no_improve {
            break;
        }
    }

    Restart {
        best: Candidate {
            tour: current,
            cost: current_cost,
        },
        iterations,
        accepted_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operator;
    use crate::tour::is_permutation;

    fn square4() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0, 1.0],
            vec![1.0, 0.0, 1.0, 10.0],
            vec![10.0, 1.0, 0.0, 1.0],
            vec![1.0, 10.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_finds_unique_optimum_on_four_cities() {
        let m = square4();
        for op in [Operator::Swap, Operator::Insert, Operator::Reverse] {
            let config = HillClimbConfig::default()
                .with_max_iterations(500)
                .with_max_no_improve(100)
                .with_num_restarts(10)
                .with_operator(op)
                .with_seed(42);

            let result = HillClimbRunner::run(&m, &config).unwrap();
            assert_eq!(result.best_cost, 4.0, "operator {op} missed the optimum");
            assert!(is_permutation(&result.best_tour, 4));
        }
    }

    #[test]
    fn test_two_cities_exact_cost() {
        let m = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
        let config = HillClimbConfig::default().with_seed(1);
        let result = HillClimbRunner::run(&m, &config).unwrap();
        assert_eq!(result.best_cost, 6.0);
    }

    #[test]
    fn test_accepted_costs_non_increasing_within_restart() {
        let m = square4();
        let config = HillClimbConfig::default()
            .with_max_iterations(200)
            .with_operator(Operator::Swap);
        let mut rng = create_rng(42);

        for _ in 0..10 {
            let restart = climb(&m, &config, &mut rng);
            for window in restart.accepted_costs.windows(2) {
                assert!(
                    window[1] < window[0],
                    "accepted costs must strictly improve: {:?}",
                    restart.accepted_costs
                );
            }
        }
    }

    #[test]
    fn test_stall_stops_restart_early() {
        let m = square4();
        let config = HillClimbConfig::default()
            .with_max_iterations(100_000)
            .with_max_no_improve(50)
            .with_num_restarts(1)
            .with_seed(42);

        let result = HillClimbRunner::run(&m, &config).unwrap();
        assert!(
            result.iterations < 100_000,
            "expected stall exit, ran {} iterations",
            result.iterations
        );
    }

    #[test]
    fn test_restart_costs_tracked_per_restart() {
        let m = square4();
        let config = HillClimbConfig::default()
            .with_num_restarts(7)
            .with_seed(42);

        let result = HillClimbRunner::run(&m, &config).unwrap();
        assert_eq!(result.restart_costs.len(), 7);
        assert_eq!(
            result.best_cost,
            result
                .restart_costs
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
        );
    }

    #[test]
    fn test_invalid_config_fails_before_search() {
        let m = square4();
        let config = HillClimbConfig::default().with_num_restarts(0);
        assert!(HillClimbRunner::run(&m, &config).is_err());
    }

    #[test]
    fn test_same_seed_reproduces_result() {
        let m = square4();
        let config = HillClimbConfig::default().with_seed(9);
        let a = HillClimbRunner::run(&m, &config).unwrap();
        let b = HillClimbRunner::run(&m, &config).unwrap();
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.restart_costs, b.restart_costs);
    }
}
