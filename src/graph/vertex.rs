use crate::graph::error::GraphError;
use crate::graph::error::GraphResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The caller-supplied name of a vertex.  Numbers and strings are both
/// accepted and never compare equal to each other, so `Vertex::Id(1)` and
/// `Vertex::Name("1")` are different vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vertex {
    Id(i64),
    Name(String),
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<i64> for Vertex {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for Vertex {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Self::Id(i64::from(id))
    }
}

#[allow(clippy::cast_possible_wrap)]
impl From<usize> for Vertex {
    fn from(id: usize) -> Self {
        Self::Id(id as i64)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Maps vertex names to their row/column in an adjacency matrix.  Indexes
/// are handed out in insertion order starting at 0 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    positions: HashMap<Vertex, usize>,
    names: Vec<Vertex>,
}

impl VertexIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// the mapping used for a matrix supplied without names: `Id(i) -> i`
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let names: Vec<Vertex> = (0..size).map(Vertex::from).collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { positions, names }
    }

    /// Records `name` at the next free index and returns that index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if `name` already has an index.
    pub fn insert(&mut self, name: Vertex) -> GraphResult<usize> {
        if self.positions.contains_key(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }
        let idx = self.names.len();
        self.positions.insert(name.clone(), idx);
        self.names.push(name);
        Ok(idx)
    }

    #[must_use]
    pub fn get(&self, name: &Vertex) -> Option<usize> {
        self.positions.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &Vertex) -> bool {
        self.positions.contains_key(name)
    }

    #[must_use]
    pub fn name_of(&self, idx: usize) -> Option<&Vertex> {
        self.names.get(idx)
    }

    /// all names ordered by index
    #[must_use]
    pub fn names(&self) -> &[Vertex] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
