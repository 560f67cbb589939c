//! Weighted digraph — an in-memory directed, weighted graph.
//!
//! Nodes are keyed by integer ID and carry a caller-chosen payload; edges
//! are directed, weighted and may be parallel. The graph supports CRUD on
//! both, adjacency queries, and depth-first / breadth-first traversal.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Node, NodeId};
