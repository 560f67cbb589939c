//! The directed, weighted edge record.

use serde::Serialize;

use super::NodeId;

/// A directed relation from one node to another.
///
/// Edges carry no identity of their own: two records with the same
/// endpoints are parallel edges and are told apart only by position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Source node ID.
    pub from: NodeId,
    /// Target node ID.
    pub to: NodeId,
    /// Weight, stored exactly as given.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// True if this edge connects exactly `from` to `to`.
    pub fn connects(&self, from: NodeId, to: NodeId) -> bool {
        self.from == from && self.to == to
    }

    /// True if either endpoint is `id`.
    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}, Weight: {:.2}", self.from, self.to, self.weight)
    }
}
