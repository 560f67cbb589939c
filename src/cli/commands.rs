//! CLI command implementations.

use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, GraphError, GraphResult, NodeId};

/// Graph contents described on the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    /// Nodes to add, in order.
    pub nodes: Vec<(NodeId, String)>,
    /// Edges to add after all nodes, in order.
    pub edges: Vec<Edge>,
    /// Nodes to remove once the graph is built.
    pub remove_nodes: Vec<NodeId>,
    /// Edge pairs to remove once the graph is built.
    pub remove_edges: Vec<(NodeId, NodeId)>,
}

/// Traversal strategy for `cmd_traverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Depth-first.
    Dfs,
    /// Breadth-first.
    Bfs,
}

impl TraversalKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }
}

/// Parse a node argument of the form `ID=VALUE`. A bare `ID` gets an empty value.
pub fn parse_node(s: &str) -> GraphResult<(NodeId, String)> {
    let (id, value) = s.split_once('=').unwrap_or((s, ""));
    Ok((parse_id(id)?, value.to_string()))
}

/// Parse an edge argument of the form `FROM:TO:WEIGHT`. The weight defaults to 1.0.
pub fn parse_edge(s: &str) -> GraphResult<Edge> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => {
            return Err(GraphError::InvalidArgument(format!(
                "expected FROM:TO[:WEIGHT], got '{}'",
                s
            )))
        }
    };
    let weight = match weight {
        Some(w) => w
            .trim()
            .parse::<f64>()
            .map_err(|_| GraphError::InvalidArgument(format!("invalid weight '{}'", w)))?,
        None => 1.0,
    };
    Ok(Edge::new(parse_id(from)?, parse_id(to)?, weight))
}

/// Parse an edge pair of the form `FROM:TO`.
pub fn parse_pair(s: &str) -> GraphResult<(NodeId, NodeId)> {
    let (from, to) = s.split_once(':').ok_or_else(|| {
        GraphError::InvalidArgument(format!("expected FROM:TO, got '{}'", s))
    })?;
    Ok((parse_id(from)?, parse_id(to)?))
}

fn parse_id(s: &str) -> GraphResult<NodeId> {
    s.trim()
        .parse()
        .map_err(|_| GraphError::InvalidArgument(format!("invalid node ID '{}'", s)))
}

/// Build a graph from a command-line description, then apply the removals.
pub fn build_graph(spec: &GraphSpec) -> GraphResult<Graph<String>> {
    let mut builder = GraphBuilder::new();
    for (id, value) in &spec.nodes {
        builder.node(*id, value.clone());
    }
    for edge in &spec.edges {
        builder.edge(edge.from, edge.to, edge.weight);
    }
    let mut graph = builder.build()?;

    for &id in &spec.remove_nodes {
        graph.remove_node(id);
    }
    for &(from, to) in &spec.remove_edges {
        graph.remove_edge(from, to);
    }
    Ok(graph)
}

/// The sample graph printed by `wgraph demo`.
pub fn demo_graph() -> GraphResult<Graph<String>> {
    let mut builder = GraphBuilder::new();
    builder
        .node(1, "Node 1".to_string())
        .node(2, "Node 2".to_string())
        .node(3, "Node 3".to_string())
        .edge(1, 2, 3.0)
        .edge(2, 3, 4.0)
        .edge(1, 3, 5.0);
    builder.build()
}

/// Print the sample graph, remove node 1, and print it again.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    print!("{}", render_demo(json)?);
    Ok(())
}

/// Output of `wgraph demo`.
pub fn render_demo(json: bool) -> GraphResult<String> {
    let mut graph = demo_graph()?;
    if json {
        let before = stats_json(&graph);
        graph.remove_node(1);
        let after = stats_json(&graph);
        let info = serde_json::json!({ "before": before, "after_removing_1": after });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&info)?));
    }

    let mut out = graph.to_string();
    graph.remove_node(1);
    out.push_str("After removing node 1:\n");
    out.push_str(&graph.to_string());
    Ok(out)
}

/// Render the graph. The rendering is text only.
pub fn cmd_show(spec: &GraphSpec, json: bool) -> GraphResult<()> {
    if json {
        return Err(GraphError::InvalidArgument(
            "show only supports --format text".to_string(),
        ));
    }
    let graph = build_graph(spec)?;
    print!("{}", graph);
    Ok(())
}

/// Print node and edge counts.
pub fn cmd_stats(spec: &GraphSpec, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    print!("{}", render_stats(&graph, json)?);
    Ok(())
}

/// Node and edge counts, as text lines or a JSON object.
pub fn render_stats<V>(graph: &Graph<V>, json: bool) -> GraphResult<String> {
    if json {
        return Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&stats_json(graph))?
        ));
    }
    Ok(format!(
        "Nodes: {}\nEdges: {}\n",
        graph.node_count(),
        graph.edge_count()
    ))
}

fn stats_json<V>(graph: &Graph<V>) -> serde_json::Value {
    serde_json::json!({
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "node_ids": graph.node_ids(),
    })
}

/// Print a node with its adjacent nodes and edges.
pub fn cmd_neighbors(spec: &GraphSpec, id: NodeId, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    print!("{}", render_neighbors(&graph, id, json)?);
    Ok(())
}

/// A node with its adjacent nodes and its outgoing and incoming edges.
pub fn render_neighbors(graph: &Graph<String>, id: NodeId, json: bool) -> GraphResult<String> {
    let node = graph.get_node(id).ok_or(GraphError::NodeNotFound(id))?;
    let adjacent = graph.adjacent_nodes(id);
    let outgoing = graph.outgoing_edges(id);
    let incoming = graph.incoming_edges(id);

    if json {
        let info = serde_json::json!({
            "node": node,
            "adjacent": adjacent,
            "outgoing": outgoing,
            "incoming": incoming,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&info)?));
    }

    let ids: Vec<String> = adjacent.iter().map(|n| n.id.to_string()).collect();
    let mut out = format!("Node {}: {}\n", node.id, node.value);
    out.push_str(&format!("Adjacent: [{}]\n", ids.join(", ")));
    out.push_str("Outgoing:\n");
    for edge in &outgoing {
        out.push_str(&format!("  {}\n", edge));
    }
    out.push_str("Incoming:\n");
    for edge in &incoming {
        out.push_str(&format!("  {}\n", edge));
    }
    Ok(out)
}

/// Print the visiting order of a traversal from `start`.
pub fn cmd_traverse(
    spec: &GraphSpec,
    kind: TraversalKind,
    start: NodeId,
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    print!("{}", render_traversal(&graph, kind, start, json)?);
    Ok(())
}

/// The visiting order of a traversal, one node per line or as JSON.
pub fn render_traversal(
    graph: &Graph<String>,
    kind: TraversalKind,
    start: NodeId,
    json: bool,
) -> GraphResult<String> {
    let order = match kind {
        TraversalKind::Dfs => graph.dfs_order(start)?,
        TraversalKind::Bfs => graph.bfs_order(start)?,
    };

    if json {
        let info = serde_json::json!({
            "traversal": kind.name(),
            "start": start,
            "order": order,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&info)?));
    }

    let mut out = format!(
        "{} from {} ({} nodes):\n",
        kind.name().to_uppercase(),
        start,
        order.len()
    );
    for id in order {
        match graph.get_node(id) {
            Some(node) if !node.value.is_empty() => {
                out.push_str(&format!("  {} {}\n", id, node.value))
            }
            _ => out.push_str(&format!("  {}\n", id)),
        }
    }
    Ok(out)
}
