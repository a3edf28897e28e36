//! Graphs shared by unit tests across modules.

use crate::Graph;

/// Five nodes with asymmetric weights and a cycle back to 1.
pub(crate) fn weighted_five() -> Graph<i32> {
    Graph::from_adjacency(vec![
        (1, vec![(2, 10.0), (3, 5.0)]),
        (2, vec![(4, 1.0), (3, 2.0)]),
        (3, vec![(2, 3.0), (4, 9.0), (5, 2.0)]),
        (4, vec![(5, 4.0)]),
        (5, vec![(1, 7.0), (4, 6.0)]),
    ])
    .unwrap()
}

/// 3x3 grid with unit edges pointing right and down.
///
/// ```text
/// 1 -> 2 -> 3
/// |    |    |
/// v    v    v
/// 4 -> 5 -> 6
/// |    |    |
/// v    v    v
/// 7 -> 8 -> 9
/// ```
pub(crate) fn unit_grid() -> Graph<i32> {
    Graph::from_adjacency(vec![
        (1, vec![(2, 1.0), (4, 1.0)]),
        (2, vec![(3, 1.0), (5, 1.0)]),
        (3, vec![(6, 1.0)]),
        (4, vec![(5, 1.0), (7, 1.0)]),
        (5, vec![(6, 1.0), (8, 1.0)]),
        (6, vec![(9, 1.0)]),
        (7, vec![(8, 1.0)]),
        (8, vec![(9, 1.0)]),
    ])
    .unwrap()
}

/// Euclidean distance between two integer points.
pub(crate) fn euclid(a: (i32, i32), b: (i32, i32)) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Complete symmetric graph over point indices.
pub(crate) fn complete_euclidean(points: &[(i32, i32)]) -> Graph<usize> {
    let mut g = Graph::new();
    for a in 0..points.len() {
        for b in (a + 1)..points.len() {
            let d = euclid(points[a], points[b]);
            g.add_link(a, b, d).unwrap();
            g.add_link(b, a, d).unwrap();
        }
    }
    g
}
