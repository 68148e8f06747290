pub mod error;
pub mod undirected_graph;
pub mod vertex;
pub mod weighted_graph;

pub use error::GraphError;
pub use error::GraphResult;
pub use undirected_graph::UndirectedGraph;
pub use vertex::Vertex;
pub use vertex::VertexIndex;
pub use weighted_graph::WeightedGraph;
