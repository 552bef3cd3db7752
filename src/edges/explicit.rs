use crate::graph::{END_NODE_ID, FlowEdge, START_NODE_ID};
use crate::layout::LayoutConfig;
use crate::process::{ExplicitEdge, Process};
use ahash::AHashSet;

/// Replays the persisted edges, then adds the Start and End connectors.
///
/// Never falls back to an implicit chain, even when nothing is persisted.
pub(super) fn replay_edges(process: &Process, config: &LayoutConfig) -> Vec<FlowEdge> {
    let known: AHashSet<&str> = process.activities.iter().map(|a| a.id.as_str()).collect();

    let mut edges: Vec<FlowEdge> = process
        .edges
        .iter()
        .inspect(|edge| report_dangling(edge, &known))
        .map(carry_through)
        .collect();

    if let Some(entry_id) = process.entry_id() {
        edges.push(FlowEdge::synthesized(START_NODE_ID, entry_id, config));
    }
    if let Some(exit_id) = process.exit_id() {
        edges.push(FlowEdge::synthesized(exit_id, END_NODE_ID, config));
    }
    edges
}

fn carry_through(edge: &ExplicitEdge) -> FlowEdge {
    FlowEdge {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        source_handle: edge.source_handle.clone(),
        target_handle: edge.target_handle.clone(),
        label: edge.label.clone(),
        edge_type: edge.edge_type,
        animated: edge.animated,
    }
}

fn report_dangling(edge: &ExplicitEdge, known: &AHashSet<&str>) {
    for endpoint in [&edge.source, &edge.target] {
        if !known.contains(endpoint.as_str()) {
            log::debug!(
                "Edge '{}' references unknown activity '{}'; passing it through",
                edge.id,
                endpoint
            );
        }
    }
}
