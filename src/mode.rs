use serde::{Deserialize, Serialize};

/// How the connections of a process are authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    /// Connections are derived from activity order as a single chain.
    Implicit,
    /// Connections are the user-drawn edges plus optional entry/exit connectors.
    Explicit,
}

impl FlowMode {
    pub fn resolve(use_explicit_flow: bool) -> Self {
        if use_explicit_flow {
            Self::Explicit
        } else {
            Self::Implicit
        }
    }
}
