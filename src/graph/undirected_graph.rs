use crate::graph::error::GraphError;
use crate::graph::error::GraphResult;
use crate::graph::vertex::Vertex;
use std::collections::BTreeMap;

pub type AdjacencyList = BTreeMap<Vertex, Vec<Vertex>>;

/// An unweighted graph kept as a list of neighbours per vertex.  Neighbours are
/// kept in insertion order and repeated edges are recorded every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency_list: AdjacencyList,
}

impl UndirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn adjacency_list(&self) -> &AdjacencyList {
        &self.adjacency_list
    }

    #[must_use]
    pub fn neighbors(&self, vertex: &Vertex) -> Option<&[Vertex]> {
        self.adjacency_list.get(vertex).map(Vec::as_slice)
    }

    /// adding a vertex that already exists does nothing
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) {
        self.adjacency_list.entry(vertex.into()).or_default();
    }

    /// Makes `a` and `b` neighbours, adding either vertex if missing.  A self-loop
    /// is recorded once per call.
    pub fn add_edge(&mut self, a: impl Into<Vertex>, b: impl Into<Vertex>) {
        let a = a.into();
        let b = b.into();
        if a == b {
            self.adjacency_list.entry(a.clone()).or_default().push(a);
            return;
        }
        self.adjacency_list
            .entry(a.clone())
            .or_default()
            .push(b.clone());
        self.adjacency_list.entry(b).or_default().push(a);
    }

    /// Removes every edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either vertex is missing.
    pub fn remove_edge(&mut self, a: impl Into<Vertex>, b: impl Into<Vertex>) -> GraphResult<()> {
        let a = a.into();
        let b = b.into();
        for v in [&a, &b] {
            if !self.adjacency_list.contains_key(v) {
                return Err(GraphError::UnknownVertex(v.clone()));
            }
        }
        if let Some(list) = self.adjacency_list.get_mut(&a) {
            list.retain(|n| *n != b);
        }
        if let Some(list) = self.adjacency_list.get_mut(&b) {
            list.retain(|n| *n != a);
        }
        Ok(())
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if the vertex is missing.
    pub fn remove_vertex(&mut self, vertex: impl Into<Vertex>) -> GraphResult<()> {
        let vertex = vertex.into();
        let neighbors = self
            .adjacency_list
            .remove(&vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))?;
        for neighbor in neighbors {
            if let Some(list) = self.adjacency_list.get_mut(&neighbor) {
                list.retain(|n| *n != vertex);
            }
        }
        Ok(())
    }
}
