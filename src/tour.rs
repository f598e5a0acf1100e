//! Tour construction and validation.
//!
//! A tour is a `Vec<usize>` holding every city id in `0..n` exactly once,
//! interpreted as a directed cycle. Tours are only ever transformed by
//! producing fresh vectors (see [`crate::ops`]); nothing in this crate
//! mutates a tour that another component still references.

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use rand::Rng;

/// The identity ordering `[0, 1, …, n-1]`.
pub fn identity_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = identity_tour(n);
    crate::random::shuffle(&mut tour, rng);
    tour
}

/// True when `tour` contains every id in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Checks the permutation invariant, reporting the first violation.
pub(crate) fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(Error::Validation(format!(
            "tour has {} entries, expected {n}",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n {
            return Err(Error::Validation(format!(
                "city id {city} out of range 0..{n}"
            )));
        }
        if seen[city] {
            return Err(Error::Validation(format!("city id {city} appears twice")));
        }
        seen[city] = true;
    }
    Ok(())
}

/// A tour paired with its cycle cost.
///
/// The cost is computed eagerly at construction and the pair is never
/// mutated afterwards; transformed tours are wrapped into new candidates.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The visiting order.
    pub tour: Vec<usize>,
    /// Cycle cost of `tour` under the matrix it was evaluated against.
    pub cost: f64,
}

impl Candidate {
    /// Wraps a tour produced by this crate, evaluating it on `matrix`.
    pub(crate) fn evaluated(tour: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let cost = matrix.cycle_cost(&tour);
        Self { tour, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_identity_tour() {
        assert_eq!(identity_tour(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = create_rng(42);
        for n in 2..30 {
            let tour = random_tour(n, &mut rng);
            assert!(is_permutation(&tour, n), "not a permutation: {tour:?}");
        }
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        assert!(!is_permutation(&[0, 1, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(is_permutation(&[2, 0, 1], 3));
    }

    #[test]
    fn test_validate_tour_reports_out_of_range() {
        let err = validate_tour(&[0, 1, 5], 3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_candidate_carries_cost() {
        let m = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
        let c = Candidate::evaluated(vec![0, 1], &m);
        assert_eq!(c.cost, 6.0);
    }
}
