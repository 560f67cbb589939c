//! Graph traversal algorithms (DFS and BFS).
//!
//! Both walks mark a node visited when it is taken off the frontier, not
//! when it is pushed, so a node may sit on the frontier more than once but
//! is handed to the visitor exactly once.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::Graph;

/// The frontier of a traversal: a stack for DFS, a queue for BFS.
trait Frontier {
    fn push(&mut self, id: NodeId);
    fn next(&mut self) -> Option<NodeId>;
}

impl Frontier for Vec<NodeId> {
    fn push(&mut self, id: NodeId) {
        Vec::push(self, id);
    }

    fn next(&mut self) -> Option<NodeId> {
        self.pop()
    }
}

impl Frontier for VecDeque<NodeId> {
    fn push(&mut self, id: NodeId) {
        self.push_back(id);
    }

    fn next(&mut self) -> Option<NodeId> {
        self.pop_front()
    }
}

/// Depth-first traversal using an explicit stack.
///
/// Children are pushed in edge insertion order, so the most recently added
/// child of a node is explored first.
pub fn dfs_traverse<V, F>(graph: &Graph<V>, start_id: NodeId, visit: F) -> GraphResult<()>
where
    F: FnMut(&Node<V>),
{
    walk(graph, start_id, Vec::new(), visit)
}

/// Breadth-first traversal using a FIFO queue, visiting level by level.
pub fn bfs_traverse<V, F>(graph: &Graph<V>, start_id: NodeId, visit: F) -> GraphResult<()>
where
    F: FnMut(&Node<V>),
{
    walk(graph, start_id, VecDeque::new(), visit)
}

fn walk<V, Q, F>(
    graph: &Graph<V>,
    start_id: NodeId,
    mut frontier: Q,
    mut visit: F,
) -> GraphResult<()>
where
    Q: Frontier,
    F: FnMut(&Node<V>),
{
    if !graph.has_node(start_id) {
        return Err(GraphError::NodeNotFound(start_id));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push(start_id);

    while let Some(current_id) = frontier.next() {
        if !visited.insert(current_id) {
            continue;
        }
        let Some(node) = graph.get_node(current_id) else {
            continue;
        };
        visit(node);

        for neighbor_id in graph.adjacent_ids(current_id) {
            if !visited.contains(&neighbor_id) {
                frontier.push(neighbor_id);
            }
        }
    }

    Ok(())
}
