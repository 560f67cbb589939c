//! Node identifiers and the node record.

use serde::Serialize;

/// Identifier of a node, unique within one graph.
pub type NodeId = i64;

/// A graph vertex carrying an opaque caller-owned payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node<V> {
    /// The node's identifier.
    pub id: NodeId,
    /// Payload attached by the caller; never interpreted by the graph.
    pub value: V,
}

impl<V> Node<V> {
    /// Create a new node record.
    pub fn new(id: NodeId, value: V) -> Self {
        Self { id, value }
    }
}
