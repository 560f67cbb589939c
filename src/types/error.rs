//! Error types for the weighted digraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted digraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge's source node does not exist.
    #[error("'From' node does not exist: {0}")]
    MissingFromNode(NodeId),

    /// An edge's target node does not exist.
    #[error("'To' node does not exist: {0}")]
    MissingToNode(NodeId),

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// A command-line value could not be parsed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
