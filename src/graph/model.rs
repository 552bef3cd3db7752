use crate::layout::LayoutConfig;
use crate::process::{Activity, EdgeType, Position};
use serde::{Deserialize, Serialize};

pub const START_NODE_ID: &str = "start";
pub const END_NODE_ID: &str = "end";

/// Handle and label put on the outgoing chain edge of a decision step.
pub const DECISION_YES_HANDLE: &str = "yes";
pub const DECISION_YES_LABEL: &str = "Yes";

/// The role a node plays in the rendered flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Activity,
    Decision,
    End,
}

/// Payload attached to a node for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeData {
    /// Start carries the trigger text, End the output text.
    Terminal { label: Option<String> },
    Activity(Activity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

impl FlowNode {
    pub fn start(position: Position, trigger: Option<String>) -> Self {
        Self {
            id: START_NODE_ID.to_string(),
            kind: NodeKind::Start,
            position,
            data: NodeData::Terminal { label: trigger },
        }
    }

    pub fn end(position: Position, output: Option<String>) -> Self {
        Self {
            id: END_NODE_ID.to_string(),
            kind: NodeKind::End,
            position,
            data: NodeData::Terminal { label: output },
        }
    }

    pub fn activity(activity: &Activity, position: Position) -> Self {
        let kind = if activity.is_decision() {
            NodeKind::Decision
        } else {
            NodeKind::Activity
        };
        Self {
            id: activity.id.clone(),
            kind,
            position,
            data: NodeData::Activity(activity.clone()),
        }
    }

    /// The source activity for activity and decision nodes.
    pub fn source_activity(&self) -> Option<&Activity> {
        match &self.data {
            NodeData::Activity(activity) => Some(activity),
            NodeData::Terminal { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Start | NodeKind::End)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    pub animated: bool,
}

impl FlowEdge {
    /// An edge the synthesizer derives itself, styled by the layout config.
    pub fn synthesized(source: &str, target: &str, config: &LayoutConfig) -> Self {
        Self {
            id: format!("e-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            source_handle: None,
            target_handle: None,
            label: None,
            edge_type: config.synthesized_edge_type,
            animated: config.animate_synthesized_edges,
        }
    }

    /// Marks the edge as the "yes" branch of a decision.
    pub fn yes_branch(mut self) -> Self {
        self.source_handle = Some(DECISION_YES_HANDLE.to_string());
        self.label = Some(DECISION_YES_LABEL.to_string());
        self
    }
}

/// The renderable graph: every node with its position, plus the edge set.
///
/// Consumers replace both lists wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn start(&self) -> Option<&FlowNode> {
        self.node(START_NODE_ID)
    }

    pub fn end(&self) -> Option<&FlowNode> {
        self.node(END_NODE_ID)
    }

    /// First edge running from `source` to `target`.
    pub fn edge(&self, source: &str, target: &str) -> Option<&FlowEdge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// Edges as `(source, target)` pairs, in emission order.
    pub fn edge_pairs(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
