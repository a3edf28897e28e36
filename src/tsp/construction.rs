//! Greedy-edge (multi-fragment) tour construction.
//!
//! Candidate edges are taken cheapest first. An edge is accepted when
//! both endpoints still have tour degree below 2 and it joins two
//! different fragments; only the final edge may close a cycle.
//!
//! # Reference
//!
//! Bentley, J. L. (1992). "Fast algorithms for geometric traveling salesman
//! problems", *ORSA Journal on Computing* 4(4), 387-411.

use std::cmp::Ordering;

use super::costs::CostTable;
use crate::error::{GraphError, Result};

/// Disjoint-set forest with path compression and union by rank.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if already joined.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Builds a Hamiltonian cycle over all `costs.len()` nodes (at least 3).
///
/// The returned tour starts at node 0 and follows its first accepted
/// edge.
pub(crate) fn greedy_edge(costs: &CostTable) -> Result<Vec<usize>> {
    let n = costs.len();
    let mut candidates: Vec<(f64, usize, usize)> = (0..n)
        .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
        .filter_map(|(u, v)| {
            let c = costs.get(u, v);
            c.is_finite().then_some((c, u, v))
        })
        .collect();
    candidates.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut degree = vec![0u8; n];
    let mut links: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    let mut fragments = UnionFind::new(n);
    let mut accepted = 0usize;

    for &(_, u, v) in &candidates {
        if accepted == n {
            break;
        }
        if degree[u] >= 2 || degree[v] >= 2 {
            continue;
        }
        // Closing a fragment on itself is only allowed for the last edge.
        if !fragments.union(u, v) && accepted != n - 1 {
            continue;
        }
        degree[u] += 1;
        degree[v] += 1;
        links[u].push(v);
        links[v].push(u);
        accepted += 1;
    }

    if accepted < n {
        return Err(GraphError::InfeasibleTour {
            nodes: n,
            edges: accepted,
        });
    }

    let mut tour = Vec::with_capacity(n);
    let mut prev = usize::MAX;
    let mut current = 0;
    while tour.len() < n {
        tour.push(current);
        let next = if links[current][0] != prev {
            links[current][0]
        } else {
            links[current][1]
        };
        prev = current;
        current = next;
    }
    Ok(tour)
}
