//! Induced subgraphs and containment.

use std::fmt::Debug;
use std::hash::Hash;

use crate::Graph;

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Induced subgraph over `nodes`.
    ///
    /// Keeps the listed nodes that exist in this graph and every edge
    /// whose endpoints are both kept, with weights unchanged. Unknown
    /// nodes are ignored. Order follows this graph's insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graph::Graph;
    ///
    /// let g = Graph::from_adjacency([
    ///     (1, vec![(2, 1.0), (3, 4.0)]),
    ///     (2, vec![(3, 1.0)]),
    /// ])
    /// .unwrap();
    ///
    /// let sub = g.subgraph_from_nodes(&[1, 3]);
    /// assert_eq!(sub.weight(&1, &3), Some(4.0));
    /// assert!(!sub.contains_node(&2));
    /// assert!(sub.is_subgraph(&g));
    /// ```
    pub fn subgraph_from_nodes<'a, I>(&self, nodes: I) -> Graph<N>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let mut keep = vec![false; self.node_count()];
        for node in nodes {
            if let Some(id) = self.id_of(node) {
                keep[id] = true;
            }
        }

        let kept: Vec<usize> = (0..keep.len()).filter(|&id| keep[id]).collect();
        let mut sub = Graph::new();
        for &id in &kept {
            sub.ensure_node(self.key(id).clone());
        }
        for &id in &kept {
            for &(to, weight) in self.out_edges(id) {
                if keep[to] {
                    sub.insert_edge(self.key(id).clone(), self.key(to).clone(), weight);
                }
            }
        }
        sub
    }

    /// Returns `true` if every node and weighted edge of `self` is also
    /// in `other`.
    ///
    /// `other` may contain more nodes and edges. The relation is not
    /// symmetric. Self-loops are ignored.
    pub fn is_subgraph(&self, other: &Graph<N>) -> bool {
        self.nodes().all(|node| other.contains_node(node))
            && self
                .edges()
                .filter(|(from, to, _)| from != to)
                .all(|(from, to, weight)| other.weight(from, to) == Some(weight))
    }
}
