//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges may be declared in any order; `build` inserts every
/// node before any edge.
pub struct GraphBuilder<V> {
    nodes: Vec<(NodeId, V)>,
    edges: Vec<Edge>,
}

impl<V> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node. A later call with the same ID overwrites the payload.
    pub fn node(&mut self, id: NodeId, value: V) -> &mut Self {
        self.nodes.push((id, value));
        self
    }

    /// Add a directed edge.
    pub fn edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Build the final Graph, failing on the first edge with a missing endpoint.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.edges.len());
        for (id, value) in self.nodes {
            graph.add_node(id, value);
        }
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
