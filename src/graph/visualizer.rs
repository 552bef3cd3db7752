use super::model::{FlowEdge, FlowGraph, FlowNode, NodeData, NodeKind};
use std::fmt;

/// Formats a `FlowGraph` into a human-readable listing for debugging.
pub fn visualize_graph(graph: &FlowGraph, title: &str) -> String {
    DisplayGraph { graph, title }.to_string()
}

/// `Display` adapter behind [`visualize_graph`].
pub struct DisplayGraph<'a> {
    pub graph: &'a FlowGraph,
    pub title: &'a str,
}

impl fmt::Display for DisplayGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== FLOW GRAPH for Process: {} ========", self.title)?;

        writeln!(f, "\n--- NODES ({}) ---", self.graph.nodes.len())?;
        for (i, node) in self.graph.nodes.iter().enumerate() {
            writeln!(f, "{:04}: {}", i, NodeLine(node))?;
        }

        writeln!(f, "\n--- EDGES ({}) ---", self.graph.edges.len())?;
        if self.graph.edges.is_empty() {
            writeln!(f, "(none)")?;
        }
        for (i, edge) in self.graph.edges.iter().enumerate() {
            writeln!(f, "{:04}: {}", i, EdgeLine(edge))?;
        }

        write!(f, "\n================ END OF GRAPH ================")
    }
}

struct NodeLine<'a>(&'a FlowNode);

impl fmt::Display for NodeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0;
        let kind = match node.kind {
            NodeKind::Start => "START",
            NodeKind::Activity => "ACTIVITY",
            NodeKind::Decision => "DECISION",
            NodeKind::End => "END",
        };
        write!(
            f,
            "{:<10} {:<24} @ ({:>8.1}, {:>8.1})",
            kind, node.id, node.position.x, node.position.y
        )?;
        match &node.data {
            NodeData::Activity(activity) => {
                write!(f, "  [{}]", activity.activity_type)?;
                if let Some(name) = &activity.name {
                    write!(f, " {}", name)?;
                }
            }
            NodeData::Terminal { label: Some(label) } => write!(f, "  \"{}\"", label)?,
            NodeData::Terminal { label: None } => {}
        }
        Ok(())
    }
}

struct EdgeLine<'a>(&'a FlowEdge);

impl fmt::Display for EdgeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = self.0;
        write!(f, "{} -> {}", edge.source, edge.target)?;
        if let Some(handle) = &edge.source_handle {
            write!(f, " (handle {})", handle)?;
        }
        if let Some(label) = &edge.label {
            write!(f, " \"{}\"", label)?;
        }
        write!(f, " [{}", edge.edge_type)?;
        if edge.animated {
            write!(f, ", animated")?;
        }
        write!(f, "] #{}", edge.id)
    }
}
