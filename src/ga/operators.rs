//! Permutation-preserving recombination and mutation.
//!
//! Both crossovers recombine two parent tours into children that are
//! guaranteed to remain valid permutations, despite exchanging material
//! between parents. Mutation shuffles individual positions.
//!
//! # References
//!
//! - OX: Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - PMX: Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling
//!   Salesman Problem"

use rand::Rng;

/// Crossover strategy for recombining two parent tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Order crossover (OX): preserves a segment of one parent and the
    /// relative visiting order of the other.
    Order,
    /// Partially matched crossover (PMX): preserves a segment of one
    /// parent and absolute city positions of the other where possible.
    PartiallyMatched,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::Order
    }
}

impl Crossover {
    /// Produces two children from two parent tours of equal length.
    pub fn offspring<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        let n = parent1.len();
        debug_assert_eq!(n, parent2.len(), "parents must have equal length");

        if n == 1 {
            return (parent1.to_vec(), parent2.to_vec());
        }

        let (start, end) = random_segment(n, rng);
        match self {
            Crossover::Order => (
                ox_child(parent1, parent2, start, end),
                ox_child(parent2, parent1, start, end),
            ),
            Crossover::PartiallyMatched => (
                pmx_child(parent1, parent2, start, end),
                pmx_child(parent2, parent1, start, end),
            ),
        }
    }
}

/// OX child: keep `template`'s segment, fill the rest in `donor` order,
/// wrapping after the segment end.
fn ox_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        used[template[i]] = true;
    }

    let mut slot = (end + 1) % n;
    for offset in 0..n {
        let city = donor[(end + 1 + offset) % n];
        if !used[city] {
            child[slot] = city;
            slot = (slot + 1) % n;
        }
    }

    child
}

/// PMX child: keep `template`'s segment; cities displaced from `donor`'s
/// segment land at the position their replacement vacated, following the
/// mapping chain out of the segment; the rest copies from `donor`.
fn pmx_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let sentinel = usize::MAX;
    let mut child = vec![sentinel; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    // position of every city in donor, for O(1) chain hops
    let mut donor_pos = vec![0usize; n];
    for (i, &city) in donor.iter().enumerate() {
        donor_pos[city] = i;
    }

    for i in start..=end {
        let city = donor[i];
        if placed[city] {
            continue;
        }
        let mut pos = i;
        let target = loop {
            let hop = donor_pos[template[pos]];
            if hop < start || hop > end {
                break hop;
            }
            pos = hop;
        };
        child[target] = city;
        placed[city] = true;
    }

    for i in 0..n {
        if child[i] == sentinel {
            child[i] = donor[i];
        }
    }

    child
}

/// Index-shuffle mutation: each position is exchanged with another
/// uniformly chosen position with independent probability `indpb`.
pub(crate) fn shuffle_indexes<R: Rng>(perm: &mut [usize], indpb: f64, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < indpb {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
        }
    }
}

/// Random segment `[start, end]` with `start <= end` within `0..n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::{is_permutation, random_tour};
    use proptest::prelude::*;

    #[test]
    fn test_ox_children_are_permutations() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();

        for _ in 0..100 {
            let (c1, c2) = Crossover::Order.offspring(&p1, &p2, &mut rng);
            assert!(is_permutation(&c1, 8), "OX child1 invalid: {c1:?}");
            assert!(is_permutation(&c2, 8), "OX child2 invalid: {c2:?}");
        }
    }

    #[test]
    fn test_pmx_children_are_permutations() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];

        for _ in 0..100 {
            let (c1, c2) = Crossover::PartiallyMatched.offspring(&p1, &p2, &mut rng);
            assert!(is_permutation(&c1, 8), "PMX child1 invalid: {c1:?}");
            assert!(is_permutation(&c2, 8), "PMX child2 invalid: {c2:?}");
        }
    }

    #[test]
    fn test_identical_parents_reproduce_themselves() {
        let mut rng = create_rng(42);
        let p = vec![2, 0, 4, 1, 3];
        for crossover in [Crossover::Order, Crossover::PartiallyMatched] {
            let (c1, c2) = crossover.offspring(&p, &p, &mut rng);
            assert_eq!(c1, p);
            assert_eq!(c2, p);
        }
    }

    #[test]
    fn test_crossover_on_two_cities() {
        let mut rng = create_rng(42);
        for crossover in [Crossover::Order, Crossover::PartiallyMatched] {
            for _ in 0..20 {
                let (c1, c2) = crossover.offspring(&[0, 1], &[1, 0], &mut rng);
                assert!(is_permutation(&c1, 2));
                assert!(is_permutation(&c2, 2));
            }
        }
    }

    #[test]
    fn test_shuffle_indexes_preserves_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            shuffle_indexes(&mut perm, 0.3, &mut rng);
            assert!(is_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_shuffle_indexes_zero_probability_is_identity() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..10).collect();
        shuffle_indexes(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_children_stay_permutations(n in 2usize..30, seed: u64) {
            let mut rng = create_rng(seed);
            let p1 = random_tour(n, &mut rng);
            let p2 = random_tour(n, &mut rng);
            for crossover in [Crossover::Order, Crossover::PartiallyMatched] {
                let (c1, c2) = crossover.offspring(&p1, &p2, &mut rng);
                prop_assert!(is_permutation(&c1, n));
                prop_assert!(is_permutation(&c2, n));
            }
        }
    }
}
