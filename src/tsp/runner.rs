//! TSP solver entry points.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::config::TspConfig;
use super::construction::greedy_edge;
use super::costs::CostTable;
use super::two_opt;
use crate::error::{GraphError, Result};
use crate::Graph;

/// Result of a TSP run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult<N> {
    /// Length of the closed tour, closing edge included.
    pub length: f64,
    /// Nodes in visiting order; the tour returns to `tour[0]`.
    pub tour: Vec<N>,
    /// Length of the greedy tour before 2-opt.
    pub construction_length: f64,
    /// 2-opt sweeps executed.
    pub sweeps: usize,
    /// 2-opt segment reversals applied.
    pub improving_moves: usize,
}

/// Greedy-edge construction followed by 2-opt improvement.
pub struct TspRunner;

impl TspRunner {
    /// Solves the TSP heuristically over every node of `graph`.
    ///
    /// The graph is read as undirected: a pair is connected if either
    /// direction has a finite edge. Fails with
    /// [`GraphError::InfeasibleTour`] when greedy construction cannot
    /// close a Hamiltonian cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graph::tsp::{TspConfig, TspRunner};
    /// use u_graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    /// for (i, &(ax, ay)) in square.iter().enumerate() {
    ///     for (j, &(bx, by)) in square.iter().enumerate() {
    ///         if i != j {
    ///             let d: f64 = (ax - bx) * (ax - bx) + (ay - by) * (ay - by);
    ///             g.add_link(i, j, d.sqrt()).unwrap();
    ///         }
    ///     }
    /// }
    ///
    /// let result = TspRunner::run(&g, &TspConfig::default()).unwrap();
    /// assert!((result.length - 4.0).abs() < 1e-9);
    /// assert_eq!(result.tour.len(), 4);
    /// ```
    pub fn run<N>(graph: &Graph<N>, config: &TspConfig) -> Result<TspResult<N>>
    where
        N: Clone + Eq + Hash + Debug,
    {
        config.validate().map_err(GraphError::InvalidConfig)?;

        let costs = CostTable::from_graph(graph);
        let n = costs.len();

        let mut tour = match n {
            0 | 1 => (0..n).collect(),
            2 => {
                if costs.get(0, 1).is_infinite() {
                    return Err(GraphError::InfeasibleTour { nodes: 2, edges: 0 });
                }
                vec![0, 1]
            }
            _ => greedy_edge(&costs)?,
        };

        let construction_length = costs.tour_length(&tour);
        debug!(nodes = n, length = construction_length, "greedy construction done");

        let stats = two_opt::improve(&mut tour, &costs, config.max_sweeps, config.epsilon);
        let length = costs.tour_length(&tour);
        debug!(
            sweeps = stats.sweeps,
            moves = stats.moves,
            length,
            "2-opt finished"
        );

        Ok(TspResult {
            length,
            tour: tour.into_iter().map(|id| graph.key(id).clone()).collect(),
            construction_length,
            sweeps: stats.sweeps,
            improving_moves: stats.moves,
        })
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Solves the TSP with [`TspConfig::default`].
    ///
    /// Returns a local optimum under 2-opt, not necessarily the optimal
    /// tour. Compare tours with [`same_path`](crate::path::same_path).
    pub fn solve_tsp(&self) -> Result<TspResult<N>> {
        TspRunner::run(self, &TspConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{complete_euclidean, euclid};
    use crate::path::same_path;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn two_rows() -> Vec<(i32, i32)> {
        vec![
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
            (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
        ]
    }

    #[test]
    fn test_two_row_layout_fixes_long_shortcut() {
        // Greedy leaves a long closing edge 9 -> 0 and a zigzag at 4-6-5-7;
        // 2-opt turns it into the two rows joined at both ends.
        let g = complete_euclidean(&two_rows());
        let result = g.solve_tsp().unwrap();

        assert_eq!(result.length, 14.32455532033676);
        assert!(
            same_path(&result.tour, &[0, 1, 2, 3, 4, 9, 8, 7, 6, 5]),
            "tour {:?}",
            result.tour
        );
        assert!(result.construction_length > result.length);
        assert!(result.improving_moves > 0);
    }

    #[test]
    fn test_construction_only() {
        let g = complete_euclidean(&two_rows());
        let config = TspConfig::default().with_max_sweeps(0);
        let result = TspRunner::run(&g, &config).unwrap();

        assert!((result.length - 17.071067811865476).abs() < 1e-9);
        assert_eq!(result.length, result.construction_length);
        assert!(same_path(&result.tour, &[0, 1, 2, 3, 4, 6, 5, 7, 8, 9]));
        assert_eq!(result.sweeps, 0);
    }

    #[test]
    fn test_rectangular_loop() {
        let points = vec![
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 5), (2, 5), (3, 5), (4, 5), (5, 5),
            (5, 4), (5, 3), (5, 2),
            (5, 1), (4, 1), (3, 1), (2, 1), (1, 1),
        ];
        let g = complete_euclidean(&points);
        let result = g.solve_tsp().unwrap();

        assert_eq!(result.length, points.len() as f64);
        let expected: Vec<usize> = (0..points.len()).collect();
        assert!(same_path(&result.tour, &expected), "tour {:?}", result.tour);
    }

    #[test]
    fn test_random_points_visit_each_once() {
        let mut rng = StdRng::seed_from_u64(44);
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        while points.len() < 200 {
            let p = (rng.random_range(0..=600), rng.random_range(0..=800));
            if seen.insert(p) {
                points.push(p);
            }
        }

        let mut g = Graph::new();
        for (i, &a) in points.iter().enumerate() {
            for &b in &points[i + 1..] {
                let d = euclid(a, b);
                g.add_link(a, b, d).unwrap();
                g.add_link(b, a, d).unwrap();
            }
        }

        let result = g.solve_tsp().unwrap();
        assert_eq!(result.tour.len(), points.len());
        let unique: HashSet<_> = result.tour.iter().collect();
        assert_eq!(unique.len(), points.len());
        assert!(result.length <= result.construction_length + 1e-9);

        let mut closed = result.tour.clone();
        closed.push(result.tour[0]);
        let walked = g.distance_from_path(&closed).unwrap();
        assert!((walked - result.length).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_sentinels_do_not_change_result() {
        let points = two_rows();
        let mut g = Graph::new();
        for a in 0..points.len() {
            for b in (a + 1)..points.len() {
                let d = euclid(points[a], points[b]);
                if d <= 3.5 {
                    g.add_link(a, b, d).unwrap();
                    g.add_link(b, a, d).unwrap();
                }
            }
        }
        let am = g.adjacency_matrix();
        assert_eq!(am.max_weight(), f64::INFINITY);

        match (g.solve_tsp(), am.solve_tsp()) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.tour, b.tour);
                assert_eq!(a.length, b.length);
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            (a, b) => panic!("results diverge: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn test_sparse_graph_is_infeasible() {
        let mut g = Graph::new();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "d")] {
            g.add_link(a, b, 1.0).unwrap();
        }
        assert!(matches!(
            g.solve_tsp(),
            Err(GraphError::InfeasibleTour { nodes: 4, .. })
        ));
    }

    #[test]
    fn test_directed_only_edges_count_as_connected() {
        let mut g = Graph::new();
        g.add_link(1, 2, 1.0).unwrap();
        g.add_link(2, 3, 1.0).unwrap();
        g.add_link(3, 1, 1.0).unwrap();
        let result = g.solve_tsp().unwrap();
        assert_eq!(result.length, 3.0);
        assert!(same_path(&result.tour, &[1, 2, 3]));
    }

    #[test]
    fn test_tiny_graphs() {
        let empty: Graph<u8> = Graph::new();
        let r = empty.solve_tsp().unwrap();
        assert!(r.tour.is_empty());
        assert_eq!(r.length, 0.0);

        let mut one = Graph::new();
        one.update_from_adjacency(vec![('x', Vec::<(char, f64)>::new())])
            .unwrap();
        let r = one.solve_tsp().unwrap();
        assert_eq!(r.tour, vec!['x']);
        assert_eq!(r.length, 0.0);

        let mut two = Graph::new();
        two.add_link('x', 'y', 2.5).unwrap();
        let r = two.solve_tsp().unwrap();
        assert_eq!(r.tour, vec!['x', 'y']);
        assert_eq!(r.length, 5.0);

        let mut apart = Graph::new();
        apart
            .update_from_adjacency(vec![('x', Vec::<(char, f64)>::new()), ('y', Vec::new())])
            .unwrap();
        assert!(apart.solve_tsp().is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let g = complete_euclidean(&two_rows());
        let config = TspConfig::default().with_epsilon(-0.1);
        assert!(matches!(
            TspRunner::run(&g, &config),
            Err(GraphError::InvalidConfig(_))
        ));
    }
}
