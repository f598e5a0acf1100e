//! Neighborhood operators over tours.
//!
//! Each operator is a pure transformation: it takes an immutable tour and
//! returns a freshly allocated one, never aliasing or mutating its input.
//! The output is always a valid permutation of the same city set.
//!
//! The operator is chosen once at configuration time from a closed set of
//! variants and invoked uniformly by every strategy; behavior is never
//! swapped after a run begins.

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Move kind used to derive a neighbor from a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operator {
    /// Exchange the cities at two distinct positions.
    Swap,
    /// Remove the city at a random position and reinsert it elsewhere.
    Insert,
    /// Reverse a segment `[start, end]` with `start < end` (2-opt style).
    Reverse,
}

impl Operator {
    /// Produces one random neighbor of `tour`.
    pub fn neighbor<R: Rng>(&self, tour: &[usize], rng: &mut R) -> Vec<usize> {
        debug_assert!(tour.len() >= 2, "tours have at least 2 cities");
        match self {
            Operator::Swap => swap_neighbor(tour, rng),
            Operator::Insert => insert_neighbor(tour, rng),
            Operator::Reverse => reverse_neighbor(tour, rng),
        }
    }

    /// Produces `count` neighbors by independent invocations of
    /// [`neighbor`](Self::neighbor).
    ///
    /// This is a stochastic sample of the neighborhood, not its
    /// enumeration: candidates may repeat and parts of the true
    /// neighborhood may go unexplored in any given iteration.
    pub fn neighborhood<R: Rng>(&self, tour: &[usize], count: usize, rng: &mut R) -> Vec<Vec<usize>> {
        (0..count).map(|_| self.neighbor(tour, rng)).collect()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Swap => "swap",
            Operator::Insert => "insert",
            Operator::Reverse => "reverse",
        };
        f.write_str(name)
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Parses an operator name; "invert" is accepted as an alias for
    /// "reverse".
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "swap" => Ok(Operator::Swap),
            "insert" => Ok(Operator::Insert),
            "reverse" | "invert" => Ok(Operator::Reverse),
            other => Err(Error::Configuration(format!(
                "unknown operator {other:?}, expected swap, insert, or reverse"
            ))),
        }
    }
}

/// Exchange the cities at two distinct random positions.
fn swap_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    let mut neighbor = tour.to_vec();
    neighbor.swap(i, j);
    neighbor
}

/// Remove the city at a random position, reinsert at a random slot.
///
/// Removal is by position, never by value: city ids are unique by the
/// permutation invariant, and the operator must not rely on
/// duplicate-tolerant removal semantics.
fn insert_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    let mut neighbor = tour.to_vec();
    let from = rng.random_range(0..n);
    let city = neighbor.remove(from);
    let to = rng.random_range(0..n);
    neighbor.insert(to, city);
    neighbor
}

/// Reverse the segment `[start, end]` with `start < end`.
fn reverse_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    let start = rng.random_range(0..n - 1);
    let end = rng.random_range(start + 1..n);
    reverse_segment(tour, start, end)
}

/// Copy of `tour` with `[start, end]` (inclusive) reversed.
pub(crate) fn reverse_segment(tour: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut neighbor = tour.to_vec();
    neighbor[start..=end].reverse();
    neighbor
}
