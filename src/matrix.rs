//! Distance matrix and tour cost evaluation.
//!
//! [`DistanceMatrix`] is validated once at construction and immutable for
//! the lifetime of a run, so it can be shared by reference across any
//! number of concurrent runs. Entries may be asymmetric in representation
//! (`cost(i, j)` and `cost(j, i)` are stored independently) although
//! typical inputs are symmetric.

use crate::error::{Error, Result};
use crate::tour::validate_tour;

/// Immutable N×N table of non-negative edge costs, indexed by city id.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    // row-major: cost(i, j) = data[i * n + j]
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, validating shape and entries.
    ///
    /// Fails with [`Error::Validation`] when the table is not square, has
    /// fewer than two cities, or contains a negative or non-finite entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(Error::Validation(format!(
                "distance matrix needs at least 2 cities, got {n}"
            )));
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::Validation(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &cost) in row.iter().enumerate() {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(Error::Validation(format!(
                        "cost({i}, {j}) = {cost} is not a non-negative finite number"
                    )));
                }
                data.push(cost);
            }
        }
        Ok(Self { n, data })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects matrices with fewer than 2 cities.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edge cost from city `i` to city `j`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Total cost of a tour interpreted as a directed cycle.
    ///
    /// Sums `cost(tour[i], tour[i+1])` over consecutive pairs plus the
    /// closing edge `cost(tour[n-1], tour[0])`. O(N). Fails with
    /// [`Error::Validation`] when `tour` is not a permutation of `0..n`.
    pub fn evaluate(&self, tour: &[usize]) -> Result<f64> {
        validate_tour(tour, self.n)?;
        Ok(self.cycle_cost(tour))
    }

    /// Cost of a cycle known to be a valid permutation.
    ///
    /// Hot-loop path for tours produced by this crate's own operators.
    #[inline]
    pub(crate) fn cycle_cost(&self, tour: &[usize]) -> f64 {
        debug_assert!(crate::tour::is_permutation(tour, self.n));
        let mut total = 0.0;
        for pair in tour.windows(2) {
            total += self.cost(pair[0], pair[1]);
        }
        total + self.cost(tour[self.n - 1], tour[0])
    }
}
