//! Metaheuristic benchmark core for the symmetric Traveling Salesman
//! Problem.
//!
//! Four search strategies share one vocabulary — tour permutations,
//! neighborhood operators, and cycle-cost evaluation — and differ only in
//! the state machine that governs move acceptance:
//!
//! - **Multistart hill climbing**: greedy descent with random restarts
//!   and stall-based early termination.
//! - **Tabu search**: steepest descent over a sampled neighborhood with
//!   bounded short-term memory forbidding revisits.
//! - **Simulated annealing**: Metropolis acceptance under a cooling
//!   schedule from `t_max` to `t_min`.
//! - **Genetic search**: mu+lambda evolution with tournament/roulette
//!   selection, OX/PMX crossover, and index-shuffle mutation.
//!
//! Each strategy is an independent, swappable runner with the same
//! contract: a read-only [`matrix::DistanceMatrix`], an immutable
//! per-run configuration, and a seedable random source go in; the best
//! tour, its cost, and run statistics come out. Runs own all of their
//! mutable state, so independent repetitions and parameter combinations
//! can execute concurrently without synchronization. Data loading,
//! result sinks, and parameter-grid enumeration belong to the caller.
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::matrix::DistanceMatrix;
//! use tsp_metaheur::ops::Operator;
//! use tsp_metaheur::sa::{SaConfig, SaRunner};
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 10.0, 1.0],
//!     vec![1.0, 0.0, 1.0, 10.0],
//!     vec![10.0, 1.0, 0.0, 1.0],
//!     vec![1.0, 10.0, 1.0, 0.0],
//! ])?;
//!
//! let config = SaConfig::default()
//!     .with_temperatures(10.0, 0.01)
//!     .with_steps(5000)
//!     .with_operator(Operator::Reverse)
//!     .with_seed(42);
//!
//! let result = SaRunner::run(&matrix, &config)?;
//! assert_eq!(result.best_cost, 4.0);
//! # Ok::<(), tsp_metaheur::error::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod greedy;
pub mod hillclimb;
pub mod matrix;
pub mod ops;
pub mod random;
pub mod report;
pub mod sa;
pub mod tabu;
pub mod tour;
