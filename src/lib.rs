//! `NavGraph` holds small in-memory graphs and computes single-source shortest paths over them.
//!
//! The `graph` module carries the data structures.  `WeightedGraph` stores edge weights in a
//! square adjacency matrix and keeps a `VertexIndex` from vertex name to matrix row.  Vertices
//! and edges are added one call at a time and the matrix grows with them.  `UndirectedGraph`
//! is the unweighted counterpart, a plain adjacency list with vertex removal.
//!
//! The `algo` module holds `dijkstra::shortest_path`, which reads a matrix and a root index
//! and returns the distance and predecessor of every vertex.  It never writes to the matrix,
//! so any number of readers may share one.  Mutating a graph needs `&mut`, so concurrent
//! writers must go through a lock or a single owner.
//!
//! The `io` and `cli` modules back the `ng` binary, which reads a JSON matrix from a file or
//! stdin, validates it and prints shortest paths as JSON.
//!
//! Logging goes through `tracing`.  The binary reads the `RUST_LOG` environment variable, for
//! example `RUST_LOG=navgraph=trace`.
pub mod algo;
pub mod cli;
pub mod graph;
pub mod io;
