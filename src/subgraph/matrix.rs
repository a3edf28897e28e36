//! Dense adjacency-matrix view.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::Graph;

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Complete store over every node of this graph.
    ///
    /// Each ordered pair `(u, v)` with `u != v` holds the original weight,
    /// or `f64::INFINITY` when the edge is absent. The result reports
    /// [`is_adjacency_matrix`](Graph::is_adjacency_matrix), and its
    /// [`max_weight`](Graph::max_weight) is infinite as soon as one pair
    /// is unconnected. Self-loops are dropped.
    pub fn adjacency_matrix(&self) -> Graph<N> {
        let n = self.node_count();
        let mut matrix = Graph::new();
        for id in 0..n {
            matrix.ensure_node(self.key(id).clone());
        }

        let mut missing = 0usize;
        for u in 0..n {
            for v in (0..n).filter(|&v| v != u) {
                let weight = self.weight_by_id(u, v).unwrap_or_else(|| {
                    missing += 1;
                    f64::INFINITY
                });
                matrix.insert_edge(self.key(u).clone(), self.key(v).clone(), weight);
            }
        }
        matrix.mark_adjacency_matrix();

        debug!(nodes = n, missing, "adjacency matrix built");
        matrix
    }
}
