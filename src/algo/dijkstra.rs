//! Single-source shortest paths over an adjacency matrix.
//!
//! This is the plain O(N²) form of Dijkstra's algorithm: no heap, one linear scan per
//! step to find the closest unvisited vertex.  The scan runs in ascending index order and
//! keeps the first of several equally close vertices, which decides `previous` whenever
//! two paths cost the same.
//!
//! The matrix uses `0` for "no edge", the same encoding `WeightedGraph` stores.  Because of
//! that a vertex with no edges is reached from anything at cost `0`.  Weights must not be
//! negative; negative weights give meaningless results and are not checked.

use crate::graph::error::GraphError;
use crate::graph::error::GraphResult;
use serde::Serialize;
use tracing::instrument;
use tracing::trace;

/// Distances and predecessors for every vertex, indexed like the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    root: usize,
    /// lowest total weight from the root, `f64::INFINITY` if never reached
    pub distance: Vec<f64>,
    /// the vertex just before each vertex on its best path.  The root is its own
    /// predecessor and unreached vertices have none.
    pub previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    #[must_use]
    pub const fn root(&self) -> usize {
        self.root
    }

    #[must_use]
    pub fn distance_to(&self, target: usize) -> Option<f64> {
        self.distance.get(target).copied()
    }

    #[must_use]
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance_to(target).is_some_and(f64::is_finite)
    }

    /// The vertices from the root to `target`, both included.  `None` when `target`
    /// is out of range or was never reached.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        let mut path = vec![target];
        let mut current = target;
        while current != self.root {
            current = (*self.previous.get(current)?)?;
            path.push(current);
            if path.len() > self.previous.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the least-cost distance and predecessor of every vertex reachable from
/// `root`.  The matrix is only read.
///
/// # Errors
///
/// * [`GraphError::InvalidMatrix`] if the matrix is empty or not square
/// * [`GraphError::RootOutOfRange`] if `root` is not a row of the matrix
#[instrument(level = "debug", skip(matrix))]
pub fn shortest_path(matrix: &[Vec<f64>], root: usize) -> GraphResult<ShortestPaths> {
    let size = matrix.len();
    if size == 0 {
        return Err(GraphError::InvalidMatrix {
            reason: String::from("an empty matrix has no root"),
        });
    }
    if let Some(i) = matrix.iter().position(|row| row.len() != size) {
        return Err(GraphError::InvalidMatrix {
            reason: format!("row {i} has {} cells, expected {size}", matrix[i].len()),
        });
    }
    if root >= size {
        return Err(GraphError::RootOutOfRange { root, size });
    }

    let mut distance = vec![f64::INFINITY; size];
    let mut previous = vec![None; size];
    distance[root] = 0.0;
    previous[root] = Some(root);

    let mut unvisited: Vec<usize> = (0..size).collect();
    while let Some(pos) = closest(&unvisited, &distance) {
        let current = unvisited.remove(pos);
        for (neighbor, weight) in matrix[current].iter().enumerate() {
            let candidate = distance[current] + weight;
            if candidate < distance[neighbor] {
                trace!("relax {neighbor} via {current}: {} -> {candidate}", distance[neighbor]);
                distance[neighbor] = candidate;
                previous[neighbor] = Some(current);
            }
        }
    }

    Ok(ShortestPaths {
        root,
        distance,
        previous,
    })
}

/// position in `unvisited` of the first vertex with the smallest distance
fn closest(unvisited: &[usize], distance: &[f64]) -> Option<usize> {
    unvisited
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| distance[**a].total_cmp(&distance[**b]))
        .map(|(pos, _)| pos)
}
