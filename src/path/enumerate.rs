//! Exhaustive simple-path enumeration.
//!
//! Depth-first search with an explicit frame stack, so deep graphs do not
//! exhaust the call stack. The number of simple paths grows exponentially
//! with graph size; use on small or sparse graphs.

use std::fmt::Debug;
use std::hash::Hash;

use crate::Graph;

/// One DFS level: the node and the index of its next unexplored edge.
struct Frame {
    node: usize,
    cursor: usize,
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Every simple directed path from `start` to `end`, in DFS order.
    ///
    /// Neighbors are explored in insertion order and a path is emitted as
    /// soon as it reaches `end`. Unknown endpoints yield no paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graph::Graph;
    ///
    /// let g = Graph::from_adjacency([
    ///     ('a', vec![('b', 1.0), ('c', 1.0)]),
    ///     ('b', vec![('d', 1.0)]),
    ///     ('c', vec![('d', 1.0)]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     g.all_paths(&'a', &'d'),
    ///     vec![vec!['a', 'b', 'd'], vec!['a', 'c', 'd']]
    /// );
    /// ```
    pub fn all_paths(&self, start: &N, end: &N) -> Vec<Vec<N>> {
        let (Some(source), Some(goal)) = (self.id_of(start), self.id_of(end)) else {
            return Vec::new();
        };
        if source == goal {
            return vec![vec![start.clone()]];
        }

        let mut found = Vec::new();
        let mut on_path = vec![false; self.node_count()];
        let mut path = vec![source];
        let mut stack = vec![Frame {
            node: source,
            cursor: 0,
        }];
        on_path[source] = true;

        while let Some(frame) = stack.last_mut() {
            let edges = self.out_edges(frame.node);
            if frame.cursor == edges.len() {
                on_path[frame.node] = false;
                path.pop();
                stack.pop();
                continue;
            }

            let (next, weight) = edges[frame.cursor];
            frame.cursor += 1;
            if on_path[next] || weight.is_infinite() {
                continue;
            }
            if next == goal {
                found.push(
                    path.iter()
                        .chain(std::iter::once(&goal))
                        .map(|&id| self.key(id).clone())
                        .collect(),
                );
                continue;
            }

            on_path[next] = true;
            path.push(next);
            stack.push(Frame {
                node: next,
                cursor: 0,
            });
        }

        found
    }
}
