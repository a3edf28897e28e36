//! Path queries over a [`Graph`](crate::Graph).
//!
//! - **Shortest paths**: Dijkstra single-pair, single-source tree, and
//!   all-pairs variants ([`ShortestPath`], [`ShortestTree`]).
//! - **Enumeration**: every simple path between two nodes
//!   ([`Graph::all_paths`](crate::Graph::all_paths)).
//! - **Comparison**: path length and cyclic equivalence ([`same_path`]).
//!
//! All queries borrow the graph immutably and return owned results.

mod compare;
mod enumerate;
mod shortest;

pub use compare::same_path;
pub use shortest::{ShortestPath, ShortestTree};
