//! Human-readable debug rendering of a graph.

use std::fmt;

use crate::types::Edge;

use super::Graph;

impl<V> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph:")?;
        for id in self.node_ids() {
            writeln!(f, "Node {}:", id)?;
            write_edges(f, "Outgoing", &self.outgoing_edges(id))?;
            write_edges(f, "Incoming", &self.incoming_edges(id))?;
        }
        Ok(())
    }
}

fn write_edges(f: &mut fmt::Formatter<'_>, label: &str, edges: &[Edge]) -> fmt::Result {
    if edges.is_empty() {
        return writeln!(f, " - {} Edges: None", label);
    }
    writeln!(f, " - {} Edges:", label)?;
    for edge in edges {
        writeln!(f, "   - {}", edge)?;
    }
    Ok(())
}
