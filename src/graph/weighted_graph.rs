//! `WeightedGraph` keeps a square adjacency matrix of edge weights together with the
//! `VertexIndex` that maps each vertex name to its row and column.
//!
//! The matrix grows one row and one column per added vertex and never shrinks.  A weight
//! of `0` means "no edge", so a zero-cost edge and a missing edge are the same thing.  The
//! diagonal is always zero: a self-loop with weight `0` is accepted as a no-op and a
//! non-zero self-loop is rejected.
//!
//! Edge operations take a `directed` flag per call.  Undirected writes mirror the weight
//! into the transposed cell so the matrix stays symmetric.

use crate::algo::dijkstra;
use crate::algo::dijkstra::ShortestPaths;
use crate::graph::error::GraphError;
use crate::graph::error::GraphResult;
use crate::graph::vertex::Vertex;
use crate::graph::vertex::VertexIndex;
use petgraph::graph::Graph;
use tracing::debug;
use tracing::trace;

pub type Matrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    matrix: Matrix,
    index: VertexIndex,
}

/// Returns `true` if `matrix` is square, every cell is a finite number and
/// every diagonal cell is zero.  An empty matrix is valid.
#[must_use]
pub fn validate(matrix: &[Vec<f64>]) -> bool {
    check_matrix(matrix).is_ok()
}

/// Same checks as [`validate`] but reports the first problem found.
///
/// # Errors
///
/// Returns [`GraphError::InvalidMatrix`] naming the offending row or cell.
pub fn check_matrix(matrix: &[Vec<f64>]) -> GraphResult<()> {
    let size = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != size {
            return Err(GraphError::InvalidMatrix {
                reason: format!("row {i} has {} cells, expected {size}", row.len()),
            });
        }
        if let Some(j) = row.iter().position(|cell| !cell.is_finite()) {
            return Err(GraphError::InvalidMatrix {
                reason: format!("cell ({i}, {j}) is not a finite number"),
            });
        }
        if row[i] != 0.0 {
            return Err(GraphError::InvalidMatrix {
                reason: format!("diagonal cell ({i}, {i}) is {}, expected 0", row[i]),
            });
        }
    }
    Ok(())
}

impl WeightedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an existing matrix.  Vertex `i` is named `Vertex::Id(i)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidMatrix`] if [`check_matrix`] rejects `matrix`.
    pub fn from_matrix(matrix: Matrix) -> GraphResult<Self> {
        check_matrix(&matrix)?;
        let index = VertexIndex::identity(matrix.len());
        debug!("graph created from {} x {} matrix", matrix.len(), matrix.len());
        Ok(Self { matrix, index })
    }

    /// `None` starts empty, `Some` goes through [`WeightedGraph::from_matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidMatrix`] if the supplied matrix is rejected.
    pub fn with_matrix(matrix: Option<Matrix>) -> GraphResult<Self> {
        matrix.map_or_else(|| Ok(Self::new()), Self::from_matrix)
    }

    #[must_use]
    pub fn adjacency_matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// vertex names ordered by their matrix index
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        self.index.names()
    }

    #[must_use]
    pub fn index_of(&self, name: &Vertex) -> Option<usize> {
        self.index.get(name)
    }

    /// the weight stored between two vertices, `None` if either is unknown
    #[must_use]
    pub fn weight(&self, source: &Vertex, destination: &Vertex) -> Option<f64> {
        let s = self.index.get(source)?;
        let d = self.index.get(destination)?;
        Some(self.matrix[s][d])
    }

    /// Adds an unconnected vertex and returns its matrix index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the name is already in use.
    pub fn add_vertex(&mut self, name: impl Into<Vertex>) -> GraphResult<usize> {
        let name = name.into();
        let idx = self.index.insert(name.clone())?;
        for row in &mut self.matrix {
            row.push(0.0);
        }
        self.matrix.push(vec![0.0; idx + 1]);
        trace!("added vertex {name} at {idx}");
        Ok(idx)
    }

    /// Connects `source` to every `(destination, weight)` pair, creating any vertex
    /// that does not exist yet.  Unless `directed`, each weight is also written in
    /// the reverse direction.
    ///
    /// The whole batch is checked before anything changes, so a failure leaves the
    /// graph as it was.  A destination equal to `source` with weight `0` is skipped.
    ///
    /// # Errors
    ///
    /// * [`GraphError::InvalidWeight`] if a weight is NaN or infinite
    /// * [`GraphError::SelfLoop`] if a destination equals `source` with a non-zero weight
    pub fn add_edges<D, I>(
        &mut self,
        source: impl Into<Vertex>,
        destinations: I,
        directed: bool,
    ) -> GraphResult<()>
    where
        D: Into<Vertex>,
        I: IntoIterator<Item = (D, f64)>,
    {
        let source = source.into();
        let destinations: Vec<(Vertex, f64)> = destinations
            .into_iter()
            .map(|(d, w)| (d.into(), w))
            .collect();

        for (destination, weight) in &destinations {
            if !weight.is_finite() {
                return Err(GraphError::InvalidWeight { weight: *weight });
            }
            if *destination == source && *weight != 0.0 {
                return Err(GraphError::SelfLoop(source));
            }
        }

        if !self.index.contains(&source) {
            self.add_vertex(source.clone())?;
        }
        for (destination, _) in &destinations {
            if !self.index.contains(destination) {
                self.add_vertex(destination.clone())?;
            }
        }

        let s = self.require(&source)?;
        for (destination, weight) in destinations {
            if destination == source {
                continue;
            }
            let d = self.require(&destination)?;
            self.matrix[s][d] = weight;
            if !directed {
                self.matrix[d][s] = weight;
            }
            trace!("edge {source} -> {destination} = {weight} (directed: {directed})");
        }
        Ok(())
    }

    /// single destination form of [`WeightedGraph::add_edges`]
    ///
    /// # Errors
    ///
    /// Same as [`WeightedGraph::add_edges`].
    pub fn add_edge(
        &mut self,
        source: impl Into<Vertex>,
        destination: impl Into<Vertex>,
        weight: f64,
        directed: bool,
    ) -> GraphResult<()> {
        let destination: Vertex = destination.into();
        self.add_edges(source, [(destination, weight)], directed)
    }

    /// Sets the weight between the two vertices back to `0`.  Removing an edge that
    /// is not there is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either name has no index.
    pub fn remove_edge(
        &mut self,
        source: impl Into<Vertex>,
        destination: impl Into<Vertex>,
        directed: bool,
    ) -> GraphResult<()> {
        let source = source.into();
        let destination = destination.into();
        let s = self.require(&source)?;
        let d = self.require(&destination)?;
        self.matrix[s][d] = 0.0;
        if !directed {
            self.matrix[d][s] = 0.0;
        }
        trace!("removed edge {source} -> {destination} (directed: {directed})");
        Ok(())
    }

    /// Runs [`dijkstra::shortest_path`] rooted at the named vertex.  The result is
    /// indexed like [`WeightedGraph::vertices`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `root` has no index.
    pub fn shortest_paths_from(&self, root: impl Into<Vertex>) -> GraphResult<ShortestPaths> {
        let root = root.into();
        let idx = self.require(&root)?;
        dijkstra::shortest_path(&self.matrix, idx)
    }

    /// Exports a directed petgraph `Graph` with one edge per non-zero cell.  Node
    /// `i` of the export is the vertex at matrix index `i`.
    #[must_use]
    pub fn to_petgraph(&self) -> Graph<Vertex, f64> {
        let mut graph = Graph::with_capacity(self.vertex_count(), 0);
        let nodes: Vec<_> = self
            .index
            .names()
            .iter()
            .map(|name| graph.add_node(name.clone()))
            .collect();
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, weight) in row.iter().enumerate() {
                if *weight != 0.0 {
                    graph.add_edge(nodes[i], nodes[j], *weight);
                }
            }
        }
        graph
    }

    fn require(&self, name: &Vertex) -> GraphResult<usize> {
        self.index
            .get(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.clone()))
    }
}
