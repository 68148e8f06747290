//! only used to support the cli: reads a matrix as a JSON array of rows and
//! writes shortest path results back out as JSON
use crate::algo::dijkstra::ShortestPaths;
use crate::graph::error::GraphError;
use crate::graph::error::GraphResult;
use crate::graph::weighted_graph::Matrix;
use std::io::Read;
use tracing::debug;
use tracing::trace;

/// Parses `[[0, 1], [1, 0]]` style text.  Shape and diagonal are not checked
/// here, see [`crate::graph::weighted_graph::check_matrix`].
///
/// # Errors
///
/// Returns [`GraphError::InvalidMatrix`] if the text is not an array of arrays
/// of numbers.
pub fn parse_matrix(text: &str) -> GraphResult<Matrix> {
    let matrix: Matrix = serde_json::from_str(text).map_err(|e| GraphError::InvalidMatrix {
        reason: format!("json parse error: {e}"),
    })?;
    debug!("parsed matrix with {} rows", matrix.len());
    Ok(matrix)
}

/// Reads all of `input` and parses it with [`parse_matrix`].
///
/// # Errors
///
/// Returns [`GraphError::Io`] if reading fails, otherwise see [`parse_matrix`].
pub fn read_matrix(mut input: impl Read) -> GraphResult<Matrix> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    trace!("read {} bytes of matrix json", text.len());
    parse_matrix(&text)
}

/// Unreached distances are written as `null`.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if serialization fails.
pub fn to_json(paths: &ShortestPaths) -> GraphResult<String> {
    serde_json::to_string(paths).map_err(|e| GraphError::Io {
        reason: e.to_string(),
    })
}
