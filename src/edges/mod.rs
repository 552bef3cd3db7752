//! Edge synthesis for both authoring modes.

use crate::graph::FlowEdge;
use crate::layout::LayoutConfig;
use crate::mode::FlowMode;
use crate::process::Process;
use ahash::AHashSet;

mod explicit;
mod implicit;

/// Builds the edge set of `process` for the given mode.
///
/// No referential validation happens here; edges pointing at missing
/// activities are emitted as-is and left to the renderer.
pub fn synthesize_edges(process: &Process, mode: FlowMode, config: &LayoutConfig) -> Vec<FlowEdge> {
    let mut edges = match mode {
        FlowMode::Explicit => explicit::replay_edges(process, config),
        FlowMode::Implicit => implicit::chain_edges(process, config),
    };
    make_ids_unique(&mut edges);
    edges
}

/// Suffixes repeated edge ids with `-2`, `-3`, ... so renderers keyed on the id
/// see every edge. The first occurrence keeps its id, so persisted edges win
/// over synthesized connectors.
fn make_ids_unique(edges: &mut [FlowEdge]) {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(edges.len());
    for edge in edges.iter_mut() {
        if seen.insert(edge.id.clone()) {
            continue;
        }
        let mut suffix = 2;
        let mut candidate = format!("{}-{}", edge.id, suffix);
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", edge.id, suffix);
        }
        log::debug!("Edge id '{}' is already taken, using '{}'", edge.id, candidate);
        seen.insert(candidate.clone());
        edge.id = candidate;
    }
}
