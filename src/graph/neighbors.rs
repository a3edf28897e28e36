//! Read-only view over a node's outgoing edges.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::store::Graph;

/// Outgoing edges of one node, in insertion order.
pub struct Neighbors<'a, N> {
    graph: &'a Graph<N>,
    edges: &'a [(usize, f64)],
}

impl<'a, N> Neighbors<'a, N> {
    pub(crate) fn new(graph: &'a Graph<N>, edges: &'a [(usize, f64)]) -> Self {
        Self { graph, edges }
    }

    /// Iterates `(neighbor, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        let graph = self.graph;
        let edges = self.edges;
        edges.iter().map(move |&(to, w)| (&graph.nodes[to].key, w))
    }

    /// Number of outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N: fmt::Debug> fmt::Debug for Neighbors<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, N: Eq> Neighbors<'a, N> {
    /// Weight of the edge to `to`, if present.
    pub fn get(&self, to: &N) -> Option<f64> {
        self.iter().find(|(n, _)| *n == to).map(|(_, w)| w)
    }
}

impl<'a, N: Clone + Eq + Hash> Neighbors<'a, N> {
    /// Copies the view into an owned map.
    pub fn to_map(&self) -> HashMap<N, f64> {
        self.iter().map(|(n, w)| (n.clone(), w)).collect()
    }
}
