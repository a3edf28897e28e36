//! Adjacency store for directed, weighted graphs.
//!
//! Nodes live in an arena indexed by a dense id assigned on first
//! insertion. Each record keeps its outgoing edges in insertion order,
//! which is the iteration order every algorithm in this crate relies on
//! for deterministic tie-breaking.
//!
//! # Examples
//!
//! ```
//! use u_graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_link("a", "b", 2.0).unwrap();
//! g.add_link("b", "c", 1.5).unwrap();
//!
//! assert_eq!(g.weight(&"a", &"b"), Some(2.0));
//! assert_eq!(g.weight(&"b", &"a"), None);
//! assert_eq!(g.node_count(), 3);
//! ```

mod neighbors;
mod store;

pub use neighbors::Neighbors;
pub use store::Graph;
