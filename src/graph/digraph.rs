//! Core graph structure: nodes + edges with adjacency indexes.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeId};

use super::traversal;

/// An in-memory directed, weighted graph whose nodes carry a payload of type `V`.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// All nodes, indexed by ID.
    nodes: HashMap<NodeId, Node<V>>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Adjacency index: from -> positions in the edges vec.
    outgoing: HashMap<NodeId, Vec<usize>>,
    /// Reverse adjacency: to -> positions in the edges vec.
    incoming: HashMap<NodeId, Vec<usize>>,
}

impl<V> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Create an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            outgoing: HashMap::with_capacity(nodes),
            incoming: HashMap::with_capacity(nodes),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node, or replace the payload of an existing one.
    ///
    /// Edges attached to `id` are left untouched. Returns the previous
    /// payload when the node already existed.
    pub fn add_node(&mut self, id: NodeId, value: V) -> Option<V> {
        log::debug!("add node {}", id);
        self.nodes
            .insert(id, Node::new(id, value))
            .map(|previous| previous.value)
    }

    /// Add an edge between two existing nodes.
    ///
    /// Parallel edges are allowed. If either endpoint is missing the graph
    /// is left unchanged and the missing endpoint is reported, `from` first.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> GraphResult<()> {
        if !self.nodes.contains_key(&from) {
            log::warn!("rejecting edge {} -> {}: 'from' node does not exist", from, to);
            return Err(GraphError::MissingFromNode(from));
        }
        if !self.nodes.contains_key(&to) {
            log::warn!("rejecting edge {} -> {}: 'to' node does not exist", from, to);
            return Err(GraphError::MissingToNode(to));
        }

        let pos = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.outgoing.entry(from).or_default().push(pos);
        self.incoming.entry(to).or_default().push(pos);
        log::debug!("add edge {} -> {} (weight {})", from, to, weight);

        Ok(())
    }

    /// Remove a node and every edge that starts or ends at it.
    ///
    /// Returns the removed node, or `None` if it did not exist.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node<V>> {
        let removed = self.nodes.remove(&id)?;

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        self.rebuild_adjacency();
        log::debug!(
            "remove node {} ({} edges dropped)",
            id,
            before - self.edges.len()
        );

        Some(removed)
    }

    /// Remove every edge from `from` to `to`. Returns how many were removed.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.connects(from, to));
        let removed = before - self.edges.len();
        if removed > 0 {
            self.rebuild_adjacency();
            log::debug!("remove edge {} -> {} ({} records)", from, to, removed);
        }
        removed
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's payload. The ID and edges stay fixed.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(&id).map(|n| &mut n.value)
    }

    /// True if a node with this ID exists.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// True if at least one edge goes from `from` to `to`.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges_at(&self.outgoing, from).any(|e| e.to == to)
    }

    /// Target nodes of every outgoing edge of `id`, in edge insertion order.
    ///
    /// Parallel edges yield the same target once per edge.
    pub fn adjacent_nodes(&self, id: NodeId) -> Vec<&Node<V>> {
        self.edges_at(&self.outgoing, id)
            .filter_map(|e| self.nodes.get(&e.to))
            .collect()
    }

    /// Target IDs of every outgoing edge of `id`, in edge insertion order.
    pub(crate) fn adjacent_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges_at(&self.outgoing, id).map(|e| e.to)
    }

    /// All edges whose source is `id`, in insertion order.
    pub fn outgoing_edges(&self, id: NodeId) -> Vec<Edge> {
        self.edges_at(&self.outgoing, id).copied().collect()
    }

    /// All edges whose target is `id`, in insertion order.
    pub fn incoming_edges(&self, id: NodeId) -> Vec<Edge> {
        self.edges_at(&self.incoming, id).copied().collect()
    }

    /// Iterate over all nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// All node IDs, ascending.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All edges (immutable slice), in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Depth-first traversal from `start`, calling `visit` once per reachable node.
    pub fn dfs<F>(&self, start: NodeId, visit: F) -> GraphResult<()>
    where
        F: FnMut(&Node<V>),
    {
        traversal::dfs_traverse(self, start, visit)
    }

    /// Breadth-first traversal from `start`, calling `visit` once per reachable node.
    pub fn bfs<F>(&self, start: NodeId, visit: F) -> GraphResult<()>
    where
        F: FnMut(&Node<V>),
    {
        traversal::bfs_traverse(self, start, visit)
    }

    /// Node IDs in depth-first visiting order.
    pub fn dfs_order(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        let mut order = Vec::new();
        self.dfs(start, |n| order.push(n.id))?;
        Ok(order)
    }

    /// Node IDs in breadth-first visiting order.
    pub fn bfs_order(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        let mut order = Vec::new();
        self.bfs(start, |n| order.push(n.id))?;
        Ok(order)
    }

    fn edges_at<'a>(
        &'a self,
        index: &'a HashMap<NodeId, Vec<usize>>,
        id: NodeId,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        index
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.edges[pos])
    }

    /// Rebuild adjacency indexes from the current edge list.
    fn rebuild_adjacency(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();

        for (pos, edge) in self.edges.iter().enumerate() {
            self.outgoing.entry(edge.from).or_default().push(pos);
            self.incoming.entry(edge.to).or_default().push(pos);
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
