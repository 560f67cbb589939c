//! Node and edge CRUD, adjacency queries, and rendering.

use weighted_digraph::graph::{Graph, GraphBuilder};
use weighted_digraph::types::{Edge, GraphError, Node};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Nodes 1, 2, 3 with edges 1->2 (3.0), 2->3 (4.0), 1->3 (5.0).
fn build_triangle() -> Graph<String> {
    let mut g = Graph::new();
    g.add_node(1, "Node 1".to_string());
    g.add_node(2, "Node 2".to_string());
    g.add_node(3, "Node 3".to_string());
    g.add_edge(1, 2, 3.0).unwrap();
    g.add_edge(2, 3, 4.0).unwrap();
    g.add_edge(1, 3, 5.0).unwrap();
    g
}

// ==================== Nodes ====================

#[test]
fn test_add_node() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    g.add_node(2, "Node 2");
    assert_eq!(g.node_count(), 2);
    assert!(!g.is_empty());
}

#[test]
fn test_add_node_overwrites_payload() {
    init_logger();
    let mut g = build_triangle();
    let previous = g.add_node(2, "renamed".to_string());

    assert_eq!(previous.as_deref(), Some("Node 2"));
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.get_node(2).unwrap().value, "renamed");
    assert!(g.has_edge(1, 2));
    assert!(g.has_edge(2, 3));
}

#[test]
fn test_get_node() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");

    let node = g.get_node(1).expect("node 1 should exist");
    assert_eq!(node, &Node::new(1, "Node 1"));
}

#[test]
fn test_get_missing_node_is_none() {
    let mut g = Graph::new();
    g.add_node(0, 0u32);
    assert!(g.get_node(1).is_none());
    assert!(g.get_node(-1).is_none());
    assert!(g.get_node(0).is_some());
}

#[test]
fn test_has_node() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    assert!(g.has_node(1));
    assert!(!g.has_node(2));
}

#[test]
fn test_value_mut() {
    let mut g = Graph::new();
    g.add_node(5, vec![1, 2]);
    g.value_mut(5).unwrap().push(3);
    assert_eq!(g.get_node(5).unwrap().value, vec![1, 2, 3]);
    assert!(g.value_mut(6).is_none());
}

#[test]
fn test_node_ids_sorted() {
    let mut g = Graph::new();
    for id in [9, -2, 4, 0] {
        g.add_node(id, ());
    }
    assert_eq!(g.node_ids(), vec![-2, 0, 4, 9]);
    assert_eq!(g.nodes().count(), 4);
}

// ==================== Edges ====================

#[test]
fn test_add_edge() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    g.add_node(2, "Node 2");
    g.add_edge(1, 2, 1.0).unwrap();
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_has_edge_is_directed() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    g.add_node(2, "Node 2");
    g.add_edge(1, 2, 1.0).unwrap();

    assert!(g.has_edge(1, 2));
    assert!(!g.has_edge(2, 1));

    g.add_edge(2, 1, 1.0).unwrap();
    assert!(g.has_edge(2, 1));
}

#[test]
fn test_add_edge_missing_from() {
    init_logger();
    let mut g = Graph::new();
    g.add_node(2, ());

    match g.add_edge(1, 2, 1.0) {
        Err(GraphError::MissingFromNode(1)) => {}
        other => panic!("Expected MissingFromNode(1), got {:?}", other),
    }
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_add_edge_missing_to() {
    let mut g = Graph::new();
    g.add_node(1, ());

    match g.add_edge(1, 2, 1.0) {
        Err(GraphError::MissingToNode(2)) => {}
        other => panic!("Expected MissingToNode(2), got {:?}", other),
    }
    assert_eq!(g.edge_count(), 0);
    assert!(g.outgoing_edges(1).is_empty());
}

#[test]
fn test_add_edge_both_missing_reports_from() {
    let mut g: Graph<()> = Graph::new();
    let err = g.add_edge(7, 8, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "'From' node does not exist: 7");
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut g = Graph::new();
    g.add_node(1, ());
    g.add_node(2, ());
    g.add_edge(1, 2, 1.0).unwrap();
    g.add_edge(1, 2, 2.0).unwrap();

    assert_eq!(g.edge_count(), 2);
    assert_eq!(
        g.outgoing_edges(1),
        vec![Edge::new(1, 2, 1.0), Edge::new(1, 2, 2.0)]
    );
    assert_eq!(g.adjacent_nodes(1).len(), 2);
}

#[test]
fn test_self_loop_allowed() {
    let mut g = Graph::new();
    g.add_node(1, ());
    g.add_edge(1, 1, 0.5).unwrap();
    assert!(g.has_edge(1, 1));
    assert_eq!(g.outgoing_edges(1), g.incoming_edges(1));
}

#[test]
fn test_remove_edge() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    g.add_node(2, "Node 2");
    g.add_edge(1, 2, 1.0).unwrap();

    assert_eq!(g.remove_edge(1, 2), 1);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_edge(1, 2));
    assert_eq!(g.node_count(), 2);
}

#[test]
fn test_remove_edge_removes_all_parallel() {
    let mut g = build_triangle();
    g.add_edge(1, 2, 9.0).unwrap();
    g.add_edge(2, 1, 1.0).unwrap();
    assert_eq!(g.edge_count(), 5);

    assert_eq!(g.remove_edge(1, 2), 2);
    assert_eq!(g.edge_count(), 3);
    assert!(!g.has_edge(1, 2));
    assert!(g.has_edge(2, 1));
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let mut g = build_triangle();
    assert_eq!(g.remove_edge(3, 1), 0);
    assert_eq!(g.remove_edge(42, 43), 0);
    assert_eq!(g.edge_count(), 3);
}

// ==================== Removal of nodes ====================

#[test]
fn test_remove_node() {
    let mut g = Graph::new();
    g.add_node(1, "Node 1");
    g.add_node(2, "Node 2");
    g.add_edge(1, 2, 1.0).unwrap();

    let removed = g.remove_node(1).unwrap();
    assert_eq!(removed.id, 1);
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_remove_node_purges_incoming_and_outgoing() {
    init_logger();
    let mut g = build_triangle();
    g.add_node(4, "Node 4".to_string());
    g.add_edge(4, 2, 1.0).unwrap();
    g.add_edge(3, 2, 1.0).unwrap();

    g.remove_node(2);

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 1);
    assert!(g.edges().iter().all(|e| !e.touches(2)));
    assert!(g.outgoing_edges(4).is_empty());
    assert!(g.incoming_edges(3).iter().all(|e| e.from != 2));
    assert_eq!(g.outgoing_edges(1), vec![Edge::new(1, 3, 5.0)]);
}

#[test]
fn test_remove_missing_node_is_noop() {
    let mut g = build_triangle();
    assert!(g.remove_node(99).is_none());
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_readd_removed_node_has_no_edges() {
    let mut g = build_triangle();
    g.remove_node(1);
    g.add_node(1, "back".to_string());
    assert!(g.outgoing_edges(1).is_empty());
    assert!(g.incoming_edges(1).is_empty());
    assert_eq!(g.edge_count(), 1);
}

// ==================== Adjacency ====================

#[test]
fn test_triangle_scenario() {
    let mut g = build_triangle();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);

    let adjacent: Vec<i64> = g.adjacent_nodes(1).iter().map(|n| n.id).collect();
    assert_eq!(adjacent, vec![2, 3]);

    g.remove_node(1);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(2, 3));
}

#[test]
fn test_incoming_and_outgoing_order() {
    let mut g = Graph::new();
    for id in 1..=4 {
        g.add_node(id, ());
    }
    g.add_edge(3, 1, 0.3).unwrap();
    g.add_edge(1, 4, 0.4).unwrap();
    g.add_edge(2, 1, 0.2).unwrap();
    g.add_edge(1, 2, 0.1).unwrap();

    assert_eq!(
        g.incoming_edges(1),
        vec![Edge::new(3, 1, 0.3), Edge::new(2, 1, 0.2)]
    );
    assert_eq!(
        g.outgoing_edges(1),
        vec![Edge::new(1, 4, 0.4), Edge::new(1, 2, 0.1)]
    );
    assert!(g.outgoing_edges(99).is_empty());
    assert!(g.adjacent_nodes(99).is_empty());
}

// ==================== Builder ====================

#[test]
fn test_builder_allows_edges_before_nodes() {
    let mut builder = GraphBuilder::new();
    builder.edge(1, 2, 2.5).node(1, 'a').node(2, 'b');
    let g = builder.build().unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.outgoing_edges(1), vec![Edge::new(1, 2, 2.5)]);
}

#[test]
fn test_builder_rejects_dangling_edge() {
    let mut builder = GraphBuilder::new();
    builder.node(1, ()).edge(1, 5, 1.0);
    assert!(matches!(
        builder.build(),
        Err(GraphError::MissingToNode(5))
    ));
}

// ==================== Rendering ====================

#[test]
fn test_render_triangle() {
    let g = build_triangle();
    let expected = "\
Graph:
Node 1:
 - Outgoing Edges:
   - 1 -> 2, Weight: 3.00
   - 1 -> 3, Weight: 5.00
 - Incoming Edges: None
Node 2:
 - Outgoing Edges:
   - 2 -> 3, Weight: 4.00
 - Incoming Edges:
   - 1 -> 2, Weight: 3.00
Node 3:
 - Outgoing Edges: None
 - Incoming Edges:
   - 2 -> 3, Weight: 4.00
   - 1 -> 3, Weight: 5.00
";
    assert_eq!(g.to_string(), expected);
}

#[test]
fn test_render_rounds_weights() {
    let mut g = Graph::new();
    g.add_node(1, ());
    g.add_node(2, ());
    g.add_edge(1, 2, 0.126).unwrap();
    g.add_edge(2, 1, 2.0 / 3.0).unwrap();
    let out = g.to_string();
    assert!(out.contains("1 -> 2, Weight: 0.13"), "{}", out);
    assert!(out.contains("2 -> 1, Weight: 0.67"), "{}", out);
}
