//! 2-opt local search.
//!
//! For tour edges `(a, b)` at position `i` and `(c, d)` at position `j`,
//! replacing them with `(a, c)` and `(b, d)` is the same as reversing
//! `tour[i + 1..=j]`. The first improving move found is applied and the
//! sweep continues from there.
//!
//! # Reference
//!
//! Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use super::costs::CostTable;

/// Outcome of a 2-opt run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TwoOptStats {
    /// Sweeps executed, including the final non-improving one.
    pub(crate) sweeps: usize,
    /// Segment reversals applied.
    pub(crate) moves: usize,
}

/// Improves `tour` in place until no move gains more than `epsilon`
/// or `max_sweeps` sweeps have run.
pub(crate) fn improve(
    tour: &mut [usize],
    costs: &CostTable,
    max_sweeps: usize,
    epsilon: f64,
) -> TwoOptStats {
    let n = tour.len();
    let mut stats = TwoOptStats {
        sweeps: 0,
        moves: 0,
    };
    if n < 4 {
        return stats;
    }

    while stats.sweeps < max_sweeps {
        stats.sweeps += 1;
        let mut improved = 0usize;

        for i in 0..n - 1 {
            for j in (i + 2)..n {
                // Both edges would share node tour[0].
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = (tour[i], tour[i + 1]);
                let (c, d) = (tour[j], tour[(j + 1) % n]);
                let delta =
                    costs.get(a, c) + costs.get(b, d) - costs.get(a, b) - costs.get(c, d);
                if delta < -epsilon {
                    tour[i + 1..=j].reverse();
                    improved += 1;
                }
            }
        }

        stats.moves += improved;
        trace!(sweep = stats.sweeps, improved, "2-opt sweep");
        if improved == 0 {
            break;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::complete_euclidean;

    fn square() -> CostTable {
        CostTable::from_graph(&complete_euclidean(&[(0, 0), (0, 1), (1, 1), (1, 0)]))
    }

    #[test]
    fn test_uncrosses_square() {
        let costs = square();
        let mut tour = vec![0, 2, 1, 3];
        let before = costs.tour_length(&tour);

        let stats = improve(&mut tour, &costs, 100, 1e-12);

        assert!((costs.tour_length(&tour) - 4.0).abs() < 1e-12);
        assert!(costs.tour_length(&tour) < before);
        assert_eq!(stats.moves, 1);
        assert_eq!(stats.sweeps, 2);
    }

    #[test]
    fn test_local_optimum_is_stable() {
        let costs = square();
        let mut tour = vec![0, 1, 2, 3];
        let stats = improve(&mut tour, &costs, 100, 1e-12);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert_eq!(stats, TwoOptStats { sweeps: 1, moves: 0 });
    }

    #[test]
    fn test_zero_sweeps_leaves_tour() {
        let costs = square();
        let mut tour = vec![0, 2, 1, 3];
        let stats = improve(&mut tour, &costs, 0, 1e-12);
        assert_eq!(tour, vec![0, 2, 1, 3]);
        assert_eq!(stats.sweeps, 0);
    }

    #[test]
    fn test_missing_edges_block_moves() {
        // Only the crossed tour's edges exist; uncrossing needs absent pairs.
        let mut g = crate::Graph::new();
        for (a, b) in [(0, 2), (2, 1), (1, 3), (3, 0)] {
            g.add_link(a, b, 1.0).unwrap();
        }
        let costs = CostTable::from_graph(&g);
        let mut tour = vec![0, 1, 2, 3];
        // Ids follow insertion order, so id tour [0, 1, 2, 3] is 0-2-1-3.
        let stats = improve(&mut tour, &costs, 10, 1e-12);
        assert_eq!(stats.moves, 0);
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }
}
