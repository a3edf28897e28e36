//! Dijkstra shortest paths.
//!
//! The frontier is a binary min-heap keyed by tentative distance. Heap
//! ties are broken by push order and edges are relaxed in store order
//! with a strict `<`, so among equal-cost paths the one discovered first
//! is kept and results are reproducible across runs.
//!
//! # Reference
//!
//! Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::Graph;

/// Distance and node sequence of a single-pair shortest path.
///
/// Unreachable targets have an infinite distance and an empty path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath<N> {
    /// Total edge weight along `path`.
    pub distance: f64,
    /// Nodes from start to end, both included.
    pub path: Vec<N>,
}

impl<N> ShortestPath<N> {
    fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Returns `true` if a path was found.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Single-source shortest-path tree.
#[derive(Debug, Clone)]
pub struct ShortestTree<N> {
    root: N,
    distances: HashMap<N, f64>,
    predecessors: HashMap<N, N>,
}

impl<N: Clone + Eq + Hash> ShortestTree<N> {
    /// The source node.
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Distance from the root, infinite if `node` is unreachable.
    pub fn distance_to(&self, node: &N) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Predecessor of `node` on its shortest path from the root.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    /// Path from the root to `node`, empty if unreachable.
    pub fn path_to(&self, node: &N) -> Vec<N> {
        if !self.distances.contains_key(node) {
            return Vec::new();
        }
        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(prev) = self.predecessors.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        path
    }

    /// Number of reachable nodes, the root included.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Tentative distances and predecessors indexed by node id.
struct Search {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    settled: usize,
}

/// Runs Dijkstra from `source`, stopping early once `target` is settled.
fn dijkstra<N>(graph: &Graph<N>, source: usize, target: Option<usize>) -> Search {
    let n = graph.nodes.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![None; n];
    let mut done = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0usize;
    let mut settled = 0usize;

    dist[source] = 0.0;
    heap.push(Frontier {
        cost: 0.0,
        seq,
        node: source,
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        if done[node] {
            continue;
        }
        done[node] = true;
        settled += 1;
        if target == Some(node) {
            break;
        }

        for &(next, weight) in &graph.nodes[node].edges {
            if next == node || done[next] {
                continue;
            }
            let candidate = cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(node);
                seq += 1;
                heap.push(Frontier {
                    cost: candidate,
                    seq,
                    node: next,
                });
            }
        }
    }

    Search {
        dist,
        prev,
        settled,
    }
}

fn trace_back(prev: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut ids = vec![target];
    let mut current = target;
    while let Some(p) = prev[current] {
        ids.push(p);
        current = p;
    }
    ids.reverse();
    ids
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Least-cost directed path from `start` to `end`.
    ///
    /// Returns distance `0` and `[start]` when `start == end`, and an
    /// infinite distance with an empty path when `end` is unreachable or
    /// either endpoint is unknown.
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
    /// let sp = g.shortest_path(&1, &4);
    /// assert_eq!(sp.distance, 9.0);
    /// assert_eq!(sp.path, vec![1, 3, 2, 4]);
    /// ```
    pub fn shortest_path(&self, start: &N, end: &N) -> ShortestPath<N> {
        if start == end {
            return ShortestPath {
                distance: 0.0,
                path: vec![start.clone()],
            };
        }
        let (Some(source), Some(target)) = (self.id_of(start), self.id_of(end)) else {
            return ShortestPath::unreachable();
        };

        let search = dijkstra(self, source, Some(target));
        debug!(
            start = ?start,
            end = ?end,
            settled = search.settled,
            distance = search.dist[target],
            "dijkstra finished"
        );

        if search.dist[target].is_infinite() {
            return ShortestPath::unreachable();
        }
        ShortestPath {
            distance: search.dist[target],
            path: trace_back(&search.prev, target)
                .into_iter()
                .map(|id| self.key(id).clone())
                .collect(),
        }
    }

    /// Shortest-path tree rooted at `start`.
    ///
    /// An unknown `start` yields a tree containing only the root.
    pub fn shortest_tree(&self, start: &N) -> ShortestTree<N> {
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        distances.insert(start.clone(), 0.0);

        if let Some(source) = self.id_of(start) {
            let search = dijkstra(self, source, None);
            for (id, &d) in search.dist.iter().enumerate() {
                if d.is_infinite() {
                    continue;
                }
                distances.insert(self.key(id).clone(), d);
                if let Some(p) = search.prev[id] {
                    predecessors.insert(self.key(id).clone(), self.key(p).clone());
                }
            }
        }

        ShortestTree {
            root: start.clone(),
            distances,
            predecessors,
        }
    }

    /// Shortest paths between every ordered pair of distinct, connected
    /// nodes, ordered by source then target insertion order.
    pub fn all_pairs_shortest_paths(&self) -> Vec<(N, N, ShortestPath<N>)> {
        let mut out = Vec::new();
        for source in 0..self.node_count() {
            let search = dijkstra(self, source, None);
            for target in 0..self.node_count() {
                let distance = search.dist[target];
                if target == source || distance.is_infinite() {
                    continue;
                }
                let path = trace_back(&search.prev, target)
                    .into_iter()
                    .map(|id| self.key(id).clone())
                    .collect();
                out.push((
                    self.key(source).clone(),
                    self.key(target).clone(),
                    ShortestPath { distance, path },
                ));
            }
        }
        debug!(pairs = out.len(), "all-pairs shortest paths computed");
        out
    }
}
