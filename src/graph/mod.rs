pub mod artifact;
pub mod model;
pub mod synthesizer;
pub mod visualizer;
pub mod writeback;

pub use model::*;
pub use synthesizer::{Synthesizer, SynthesizerBuilder};
pub use visualizer::visualize_graph;
pub use writeback::{PositionStore, PositionUpdate, position_updates};
