//! Node layout: resolves a position for Start, every activity, and End.

use crate::graph::FlowNode;
use crate::mode::FlowMode;
use crate::process::{Position, Process};

pub mod config;
mod placement;
mod terminal;

pub use config::LayoutConfig;

/// Lays out every node of `process` for the given mode.
///
/// Nodes come back as Start, then activities in ascending `order`, then End.
/// Start and End always share `config.center_x`.
pub fn layout_nodes(process: &Process, mode: FlowMode, config: &LayoutConfig) -> Vec<FlowNode> {
    let sorted = process.sorted_activities();
    let placed = placement::place_activities(&sorted, mode, config);
    let end_y = terminal::end_y(process, &placed, mode, config);

    let mut nodes = Vec::with_capacity(placed.len() + 2);
    nodes.push(FlowNode::start(
        Position::new(config.center_x, 0.0),
        process.trigger.clone(),
    ));
    nodes.extend(
        placed
            .iter()
            .map(|p| FlowNode::activity(p.activity, p.position)),
    );
    nodes.push(FlowNode::end(
        Position::new(config.center_x, end_y),
        process.output.clone(),
    ));
    nodes
}
