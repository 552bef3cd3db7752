use crate::graph::{END_NODE_ID, FlowEdge, START_NODE_ID};
use crate::layout::LayoutConfig;
use crate::process::Process;
use itertools::Itertools;

/// Derives the linear chain Start -> a1 -> ... -> an -> End from activity order.
///
/// A decision step's outgoing chain edge becomes its "yes" branch. With no
/// activities, Start and End stay disconnected.
pub(super) fn chain_edges(process: &Process, config: &LayoutConfig) -> Vec<FlowEdge> {
    let sorted = process.sorted_activities();
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let mut edges = Vec::with_capacity(sorted.len() + 1);
    edges.push(FlowEdge::synthesized(START_NODE_ID, &first.id, config));

    for (current, next) in sorted.iter().tuple_windows() {
        let edge = FlowEdge::synthesized(&current.id, &next.id, config);
        edges.push(if current.is_decision() {
            edge.yes_branch()
        } else {
            edge
        });
    }

    edges.push(FlowEdge::synthesized(&last.id, END_NODE_ID, config));
    edges
}
