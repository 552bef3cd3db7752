use super::model::FlowGraph;
use crate::edges::synthesize_edges;
use crate::error::ConfigError;
use crate::layout::{LayoutConfig, layout_nodes};
use crate::process::{EdgeType, Process};

/// Turns process snapshots into laid-out flow graphs.
///
/// A `Synthesizer` holds nothing but its layout configuration, so one instance
/// can be reused for any number of snapshots and shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: LayoutConfig,
}

pub struct SynthesizerBuilder {
    config: LayoutConfig,
}

impl SynthesizerBuilder {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_center_x(mut self, center_x: f64) -> Self {
        self.config.center_x = center_x;
        self
    }
    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.config.vertical_spacing = spacing;
        self
    }
    pub fn with_node_width(mut self, width: f64) -> Self {
        self.config.node_width = width;
        self
    }
    pub fn with_axis_tolerance(mut self, tolerance: f64) -> Self {
        self.config.axis_tolerance = tolerance;
        self
    }
    pub fn with_edge_type(mut self, edge_type: EdgeType) -> Self {
        self.config.synthesized_edge_type = edge_type;
        self
    }
    pub fn with_animated_edges(mut self, animated: bool) -> Self {
        self.config.animate_synthesized_edges = animated;
        self
    }
    /// Validates the accumulated layout settings and creates the synthesizer.
    pub fn build(self) -> Result<Synthesizer, ConfigError> {
        self.config.validate()?;
        Ok(Synthesizer {
            config: self.config,
        })
    }
}

impl Default for SynthesizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn builder() -> SynthesizerBuilder {
        SynthesizerBuilder::new()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Builds the full graph for one snapshot.
    ///
    /// Never fails: a process without activities still yields Start and End.
    pub fn synthesize(&self, process: &Process) -> FlowGraph {
        let mode = process.mode();
        let nodes = layout_nodes(process, mode, &self.config);
        let edges = synthesize_edges(process, mode, &self.config);
        log::debug!(
            "Synthesized process '{}' in {:?} mode: {} nodes, {} edges",
            process.id,
            mode,
            nodes.len(),
            edges.len()
        );
        FlowGraph { nodes, edges }
    }

    /// Like [`Synthesizer::synthesize`], but an absent snapshot renders nothing.
    pub fn synthesize_snapshot(&self, snapshot: Option<&Process>) -> FlowGraph {
        match snapshot {
            Some(process) => self.synthesize(process),
            None => {
                log::debug!("No process snapshot available, nothing to render");
                FlowGraph::default()
            }
        }
    }
}
