//! Error type shared by all graph operations.
//!
//! Node values are rendered with `Debug` when an error is raised so that
//! the error type stays independent of the node identifier type.

use thiserror::Error;

/// Errors returned by graph construction and algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Read access on a node that was never inserted.
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    /// A consecutive pair of a path is not an edge of the graph.
    #[error("no edge from {from} to {to}")]
    NoEdge { from: String, to: String },

    /// Greedy construction could not close a Hamiltonian cycle.
    #[error("no feasible tour: accepted {edges} of {nodes} required edges")]
    InfeasibleTour { nodes: usize, edges: usize },

    /// Edge weights must be non-negative numbers.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GraphError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn no_edge<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        GraphError::NoEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid_weight<N: std::fmt::Debug>(from: &N, to: &N, weight: f64) -> Self {
        GraphError::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }
}

/// Convenience alias for results carrying a [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;
