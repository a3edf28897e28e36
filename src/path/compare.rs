//! Path length and cyclic path equivalence.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::Graph;

/// Returns `true` if `p2` is `p1` up to rotation and/or reversal.
///
/// Both sequences are read as closed tours, so `[1, 2, 3]`,
/// `[2, 3, 1]` and `[3, 2, 1]` all describe the same cycle. Sequences
/// of different length never match.
///
/// # Examples
///
/// ```
/// use u_graph::path::same_path;
///
/// assert!(same_path(&[1, 2, 3, 4, 5], &[3, 4, 5, 1, 2]));
/// assert!(same_path(&[1, 2, 3, 4, 5], &[2, 1, 5, 4, 3]));
/// assert!(!same_path(&[1, 2, 3, 4], &[1, 3, 2, 4]));
/// ```
pub fn same_path<N: PartialEq>(p1: &[N], p2: &[N]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    let n = p1.len();
    if n == 0 {
        return true;
    }

    // Try every alignment of p2[0], since nodes may repeat.
    (0..n).filter(|&i| p1[i] == p2[0]).any(|i| {
        let forward = (0..n).all(|k| p1[(i + k) % n] == p2[k]);
        forward || (0..n).all(|k| p1[(i + n - k) % n] == p2[k])
    })
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Sum of edge weights along `path`.
    ///
    /// Fails with [`GraphError::NoEdge`] on the first consecutive pair
    /// that is not an edge. Empty and single-node paths have length `0`.
    pub fn distance_from_path(&self, path: &[N]) -> Result<f64> {
        path.windows(2).try_fold(0.0, |total, pair| {
            match self.weight(&pair[0], &pair[1]) {
                Some(w) if w.is_finite() => Ok(total + w),
                _ => Err(GraphError::no_edge(&pair[0], &pair[1])),
            }
        })
    }

    /// Same as the free function [`same_path`].
    pub fn same_path(&self, p1: &[N], p2: &[N]) -> bool {
        same_path(p1, p2)
    }
}
