//! # procflow - Process Flow Graph Synthesizer
//!
//! **procflow** turns a persisted business-process snapshot (ordered activities,
//! optional user-drawn connections, optional entry/exit pointers) into a
//! renderable directed graph with concrete 2-D coordinates for every node.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Snapshot**: Parse a `Process` from JSON (`Process::from_json`), or
//!     implement `IntoProcess` for the structs your own fetch layer produces.
//! 2.  **Configure**: Use `Synthesizer::builder` to tune the layout geometry, or
//!     load a `LayoutConfig` from a JSON file.
//! 3.  **Synthesize**: `Synthesizer::synthesize` returns a `FlowGraph` holding the
//!     Start node, one node per activity, the End node, and the edge set.
//! 4.  **Write Back**: After the user drags nodes around, `position_updates`
//!     diffs the dragged nodes against the graph they were rendered from and
//!     yields the triples to hand to a `PositionStore`.
//!
//! ## Authoring Modes
//!
//! A process whose `use_explicit_flow` flag is unset is laid out as a single
//! chain ordered by `order`. Once the flag is set the graph is exactly the
//! persisted edges plus optional Start/End connectors, and it never falls back
//! to the chain, even after every edge has been deleted.
//!
//! ## Quick Start
//!
//! ```rust
//! use procflow::prelude::*;
//!
//! let json = r#"{
//!     "id": "onboarding",
//!     "activities": [
//!         {"id": "collect", "order": 1, "activityType": "manual"},
//!         {"id": "approve", "order": 2, "activityType": "decision"},
//!         {"id": "provision", "order": 3, "activityType": "automated"}
//!     ]
//! }"#;
//! let process = Process::from_json(json).expect("valid snapshot");
//!
//! let synthesizer = Synthesizer::builder().with_vertical_spacing(100.0).build().expect("valid layout");
//! let graph = synthesizer.synthesize(&process);
//!
//! assert_eq!(graph.nodes.len(), 5);
//! let yes = graph.edge("approve", "provision").unwrap();
//! assert_eq!(yes.label.as_deref(), Some("Yes"));
//! assert_eq!(graph.start().unwrap().position.x, graph.end().unwrap().position.x);
//! ```

pub mod edges;
pub mod error;
pub mod graph;
pub mod layout;
pub mod mode;
pub mod prelude;
pub mod process;

use crate::graph::{FlowGraph, Synthesizer};
use crate::process::Process;

/// Synthesizes `process` with the default layout configuration.
pub fn synthesize(process: &Process) -> FlowGraph {
    Synthesizer::default().synthesize(process)
}
