//! Arena-backed graph store and its mutation primitives.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::neighbors::Neighbors;
use crate::error::{GraphError, Result};

/// A node and its outgoing edges, in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord<N> {
    pub(crate) key: N,
    pub(crate) edges: Vec<(usize, f64)>,
}

/// Directed graph with non-negative `f64` edge weights.
///
/// Nodes are any `Clone + Eq + Hash + Debug` value. Adding an edge
/// creates both endpoints, so a node that is only ever a target still
/// exists with no outgoing edges.
///
/// # Examples
///
/// ```
/// use u_graph::Graph;
///
/// let g = Graph::from_adjacency([
///     (1, vec![(2, 10.0), (3, 5.0)]),
///     (2, vec![(4, 1.0), (3, 2.0)]),
///     (3, vec![(2, 3.0), (4, 9.0), (5, 2.0)]),
///     (4, vec![(5, 4.0)]),
///     (5, vec![(1, 7.0), (4, 6.0)]),
/// ])
/// .unwrap();
///
/// assert_eq!(g.neighbors(&3).unwrap().get(&4), Some(9.0));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    pub(crate) nodes: Vec<NodeRecord<N>>,
    index: HashMap<N, usize>,
    edge_count: usize,
    max_weight: f64,
    adjacency_matrix: bool,
}

impl<N: Clone + Eq + Hash + Debug> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
            max_weight: 0.0,
            adjacency_matrix: false,
        }
    }

    /// Builds a graph from a node → neighbors mapping.
    ///
    /// Nodes and edges keep the order in which the mapping yields them.
    /// A node listed with no neighbors is still created.
    pub fn from_adjacency<I, E>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let mut graph = Self::new();
        graph.update_from_adjacency(mapping)?;
        Ok(graph)
    }

    /// Replaces the whole content of the graph with `mapping`.
    ///
    /// On error the graph is left untouched.
    pub fn load_adjacency<I, E>(&mut self, mapping: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let rows = collect_rows(mapping)?;
        *self = Self::new();
        self.apply_rows(rows);
        Ok(())
    }

    /// Merges `mapping` into the graph.
    ///
    /// Edges present in both are overwritten, other edges are kept, and
    /// new nodes and edges are added. Every weight is validated before
    /// the first change, so on error the graph is left untouched.
    pub fn update_from_adjacency<I, E>(&mut self, mapping: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let rows = collect_rows(mapping)?;
        self.apply_rows(rows);
        Ok(())
    }

    /// Inserts or overwrites the directed edge `from -> to`.
    ///
    /// The reverse edge is not affected. Fails with
    /// [`GraphError::InvalidWeight`] for NaN or negative weights.
    pub fn add_link(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        check_weight(&from, &to, weight)?;
        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Returns the outgoing edges of `node`.
    pub fn neighbors(&self, node: &N) -> Result<Neighbors<'_, N>> {
        let id = self
            .id_of(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        Ok(Neighbors::new(self, &self.nodes[id].edges))
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        let u = self.id_of(from)?;
        let v = self.id_of(to)?;
        self.weight_by_id(u, v)
    }

    /// Returns `true` if `node` has been inserted.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().map(|record| &record.key)
    }

    /// Iterates `(from, to, weight)` triples in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.nodes.iter().flat_map(move |record| {
            record
                .edges
                .iter()
                .map(move |&(to, w)| (&record.key, &self.nodes[to].key, w))
        })
    }

    /// Largest weight ever inserted, `0.0` for a graph without edges.
    ///
    /// Stores produced by [`Graph::adjacency_matrix`] report infinity
    /// whenever at least one pair of nodes is unconnected.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns `true` if this store was produced by
    /// [`Graph::adjacency_matrix`].
    pub fn is_adjacency_matrix(&self) -> bool {
        self.adjacency_matrix
    }

    pub(crate) fn mark_adjacency_matrix(&mut self) {
        self.adjacency_matrix = true;
    }

    pub(crate) fn id_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn key(&self, id: usize) -> &N {
        &self.nodes[id].key
    }

    pub(crate) fn out_edges(&self, id: usize) -> &[(usize, f64)] {
        &self.nodes[id].edges
    }

    pub(crate) fn weight_by_id(&self, from: usize, to: usize) -> Option<f64> {
        self.nodes[from]
            .edges
            .iter()
            .find(|&&(target, _)| target == to)
            .map(|&(_, w)| w)
    }

    /// Returns the id of `node`, creating an empty record if needed.
    pub(crate) fn ensure_node(&mut self, node: N) -> usize {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(NodeRecord {
            key: node,
            edges: Vec::new(),
        });
        id
    }

    /// Inserts an already validated edge.
    pub(crate) fn insert_edge(&mut self, from: N, to: N, weight: f64) {
        let u = self.ensure_node(from);
        let v = self.ensure_node(to);
        let edges = &mut self.nodes[u].edges;
        match edges.iter_mut().find(|(target, _)| *target == v) {
            Some(edge) => edge.1 = weight,
            None => {
                edges.push((v, weight));
                self.edge_count += 1;
            }
        }
        if weight > self.max_weight {
            self.max_weight = weight;
        }
    }

    fn apply_rows(&mut self, rows: Vec<(N, Vec<(N, f64)>)>) {
        for (from, edges) in rows {
            self.ensure_node(from.clone());
            for (to, weight) in edges {
                self.insert_edge(from.clone(), to, weight);
            }
        }
    }
}

fn check_weight<N: Debug>(from: &N, to: &N, weight: f64) -> Result<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::invalid_weight(from, to, weight));
    }
    Ok(())
}

/// Materializes and validates a mapping before it touches the store.
fn collect_rows<N, I, E>(mapping: I) -> Result<Vec<(N, Vec<(N, f64)>)>>
where
    N: Debug,
    I: IntoIterator<Item = (N, E)>,
    E: IntoIterator<Item = (N, f64)>,
{
    let mut rows = Vec::new();
    for (from, edges) in mapping {
        let edges: Vec<(N, f64)> = edges.into_iter().collect();
        for (to, weight) in &edges {
            check_weight(&from, to, *weight)?;
        }
        rows.push((from, edges));
    }
    Ok(rows)
}
