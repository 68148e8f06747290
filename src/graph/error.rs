use crate::graph::vertex::Vertex;
use std::fmt;

pub type GraphResult<T> = Result<T, GraphError>;

/// Returned when a graph operation can not be applied.  Nothing is mutated
/// when an operation fails.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// the supplied matrix is not square, has a non-finite cell, or has a
    /// non-zero diagonal
    InvalidMatrix { reason: String },
    DuplicateVertex(Vertex),
    UnknownVertex(Vertex),
    /// a non-zero weight from a vertex to itself
    SelfLoop(Vertex),
    InvalidWeight { weight: f64 },
    RootOutOfRange { root: usize, size: usize },
    Io { reason: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidMatrix { reason } => write!(f, "invalid matrix: {reason}"),
            Self::DuplicateVertex(v) => write!(f, "vertex {v} already exists"),
            Self::UnknownVertex(v) => write!(f, "vertex {v} does not exist"),
            Self::SelfLoop(v) => write!(f, "vertex {v} can not be connected to itself"),
            Self::InvalidWeight { weight } => write!(f, "edge weight {weight} is not finite"),
            Self::RootOutOfRange { root, size } => {
                write!(f, "root {root} is out of range for {size} vertices")
            }
            Self::Io { reason } => write!(f, "io error: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            reason: e.to_string(),
        }
    }
}
