//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the procflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use procflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let process = Process::from_file("path/to/process.json")?;
//! let config = LayoutConfig::from_file("path/to/layout.json")?;
//!
//! let synthesizer = Synthesizer::builder().with_layout(config).build()?;
//! let graph = synthesizer.synthesize(&process);
//!
//! println!("{}", visualize_graph(&graph, &process.id));
//! # Ok(())
//! # }
//! ```

// Synthesis
pub use crate::graph::{Synthesizer, SynthesizerBuilder};
pub use crate::layout::LayoutConfig;
pub use crate::mode::FlowMode;

// Input model
pub use crate::process::{
    Activity, ActivityType, EdgeType, ExplicitEdge, IntoProcess, Position, Process,
    snapshot_from_file, snapshot_from_json,
};

// Output model
pub use crate::graph::{
    END_NODE_ID, FlowEdge, FlowGraph, FlowNode, NodeData, NodeKind, START_NODE_ID,
};

// Writeback and debugging
pub use crate::graph::{PositionStore, PositionUpdate, position_updates, visualize_graph};

// Error types
pub use crate::error::{ArtifactError, ConfigError, ConversionError, SnapshotError, WritebackError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
