//! In-memory weighted graph engine.
//!
//! Provides a directed, weighted adjacency store and the classical
//! algorithms that run on it:
//!
//! - **Graph store**: arena-backed adjacency with insertion-ordered edges,
//!   bulk load and merge ([`Graph`]).
//! - **Shortest paths**: Dijkstra single-pair, single-source tree and
//!   all-pairs queries ([`path`]).
//! - **Path enumeration**: every simple path between two nodes.
//! - **Subgraphs**: induced subgraphs, containment, and the dense
//!   adjacency-matrix view ([`subgraph`]).
//! - **Path comparison**: path length and cyclic tour equivalence.
//! - **TSP**: greedy-edge construction refined by 2-opt ([`tsp`]).
//!
//! # Architecture
//!
//! Algorithms borrow a [`Graph`] immutably and return owned results.
//! Iteration order always follows insertion order, which makes every
//! tie-break deterministic. Errors are reported through [`GraphError`];
//! diagnostic events are emitted with `tracing` and no subscriber is
//! installed by the library.
//!
//! # Examples
//!
//! ```
//! use u_graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_link(1, 2, 1.0).unwrap();
//! g.add_link(2, 3, 1.0).unwrap();
//! g.add_link(1, 3, 5.0).unwrap();
//!
//! let sp = g.shortest_path(&1, &3);
//! assert_eq!(sp.distance, 2.0);
//! assert_eq!(g.all_paths(&1, &3).len(), 2);
//! ```

pub mod error;
pub mod graph;
pub mod path;
pub mod subgraph;
pub mod tsp;

#[cfg(test)]
mod fixtures;

pub use error::{GraphError, Result};
pub use graph::{Graph, Neighbors};
