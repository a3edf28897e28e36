//! Heuristic Travelling Salesman solver.
//!
//! Two phases over the undirected view of the graph:
//!
//! 1. **Greedy-edge construction**: pairs are accepted cheapest first,
//!    ties broken by node insertion order, as long as every node keeps
//!    tour degree at most 2 and no cycle closes before all nodes are
//!    covered. A union-find over partial fragments enforces the latter.
//! 2. **2-opt improvement**: segment reversals are applied while they
//!    strictly shorten the tour, until a full sweep finds none or the
//!    sweep cap in [`TspConfig`] is reached.
//!
//! The result is a 2-opt local optimum, not a guaranteed optimum.
//! Rotated or reversed tours describe the same cycle; compare them with
//! [`same_path`](crate::path::same_path).
//!
//! # References
//!
//! - Bentley, J. L. (1992). "Fast algorithms for geometric traveling salesman
//!   problems", *ORSA Journal on Computing* 4(4), 387-411.
//! - Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod config;
mod construction;
mod costs;
mod runner;
mod two_opt;

pub use config::TspConfig;
pub use runner::{TspResult, TspRunner};
