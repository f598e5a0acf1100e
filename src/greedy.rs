//! Nearest-neighbor tour construction.
//!
//! A deterministic O(N²) greedy heuristic: starting from a chosen city,
//! repeatedly move to the cheapest unvisited city. Useful as a baseline
//! against the metaheuristics and as a non-random initial solution.

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::tour::Candidate;

/// Builds a greedy tour starting from `start`.
///
/// Fails with [`Error::Validation`] when `start` is not a city id.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<Candidate> {
    let n = matrix.len();
    if start >= n {
        return Err(Error::Validation(format!(
            "start city {start} out of range 0..{n}"
        )));
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = start;
    tour.push(current);
    visited[current] = true;

    while tour.len() < n {
        let mut nearest = None;
        let mut nearest_cost = f64::INFINITY;
        for city in 0..n {
            if !visited[city] && matrix.cost(current, city) < nearest_cost {
                nearest = Some(city);
                nearest_cost = matrix.cost(current, city);
            }
        }
        // n >= 2 and at least one city is unvisited here
        current = nearest.expect("an unvisited city remains");
        tour.push(current);
        visited[current] = true;
    }

    Ok(Candidate::evaluated(tour, matrix))
}

/// Runs [`nearest_neighbor`] from every start city and keeps the cheapest
/// tour.
pub fn nearest_neighbor_best_start(matrix: &DistanceMatrix) -> Candidate {
    let mut best: Option<Candidate> = None;
    for start in 0..matrix.len() {
        let candidate =
            nearest_neighbor(matrix, start).expect("start city is always in range");
        match &best {
            Some(b) if b.cost <= candidate.cost => {}
            _ => best = Some(candidate),
        }
    }
    best.expect("matrix has at least 2 cities")
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_greedy_finds_ring_optimum() {
        let m = square4();
        let result = nearest_neighbor(&m, 0).unwrap();
        assert!(is_permutation(&result.tour, 4));
        assert_eq!(result.cost, 4.0);
    }

    #[test]
    fn test_greedy_rejects_bad_start() {
        let m = square4();
        assert!(nearest_neighbor(&m, 4).is_err());
    }

    #[test]
    fn test_best_start_never_worse_than_fixed_start() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![2.0, 0.0, 6.0, 4.0],
            vec![9.0, 6.0, 0.0, 3.0],
            vec![10.0, 4.0, 3.0, 0.0],
        ])
        .unwrap();
        let best = nearest_neighbor_best_start(&m);
        for start in 0..4 {
            let fixed = nearest_neighbor(&m, start).unwrap();
            assert!(best.cost <= fixed.cost);
        }
    }
}
