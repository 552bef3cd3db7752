use super::model::FlowGraph;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;

impl FlowGraph {
    /// Encodes the graph with bincode. Identical graphs encode to identical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Decodes a graph previously produced by [`FlowGraph::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(graph, _)| graph)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Writes the encoded graph to `path`, replacing any existing file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        fs::write(path, self.to_bytes()?).map_err(|e| io_error(path, e))
    }

    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        Self::from_bytes(&bytes)
    }
}

fn io_error(path: &str, err: std::io::Error) -> ArtifactError {
    ArtifactError::Io {
        path: path.to_string(),
        message: err.to_string(),
    }
}
