//! Structural operations between graphs.
//!
//! - [`Graph::subgraph_from_nodes`](crate::Graph::subgraph_from_nodes):
//!   induced subgraph over a node set.
//! - [`Graph::is_subgraph`](crate::Graph::is_subgraph): containment test
//!   on nodes and weighted edges.
//! - [`Graph::adjacency_matrix`](crate::Graph::adjacency_matrix): complete
//!   store where missing edges are explicit `f64::INFINITY` entries.

mod induced;
mod matrix;
