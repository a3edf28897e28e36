//! Symmetric pair costs used by the TSP phases.

use crate::Graph;

/// Dense `n x n` table of undirected pair costs, indexed by node id.
///
/// The cost of `{u, v}` is the weight of `u -> v` for the lower id `u`,
/// falling back to `v -> u` when that edge is absent. Missing pairs,
/// infinite sentinels and self-loops are stored as `f64::INFINITY`.
#[derive(Debug, Clone)]
pub(crate) struct CostTable {
    n: usize,
    costs: Vec<f64>,
}

impl CostTable {
    pub(crate) fn from_graph<N>(graph: &Graph<N>) -> Self {
        let n = graph.nodes.len();
        let mut costs = vec![f64::INFINITY; n * n];
        for (u, record) in graph.nodes.iter().enumerate() {
            for &(v, w) in &record.edges {
                if u == v || !w.is_finite() {
                    continue;
                }
                let (lo, hi) = if u < v { (u, v) } else { (v, u) };
                let slot = lo * n + hi;
                // The lower-id direction wins when both exist.
                if u < v || costs[slot].is_infinite() {
                    costs[slot] = w;
                    costs[hi * n + lo] = w;
                }
            }
        }
        Self { n, costs }
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub(crate) fn get(&self, u: usize, v: usize) -> f64 {
        self.costs[u * self.n + v]
    }

    /// Length of the closed tour.
    pub(crate) fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        if n < 2 {
            return 0.0;
        }
        (0..n).map(|i| self.get(tour[i], tour[(i + 1) % n])).sum()
    }
}
