use thiserror::Error;

/// Errors that can occur while loading a process snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Failed to parse process snapshot JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read snapshot file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while loading or validating a layout configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to parse layout config JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Layout setting '{field}' is invalid: {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised when encoding, decoding or storing a graph artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),

    #[error("Could not access artifact '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors reported by a `PositionStore` when persisting dragged node positions.
#[derive(Error, Debug, Clone)]
pub enum WritebackError {
    #[error("Activity '{0}' does not exist in the target process")]
    UnknownActivity(String),

    #[error("Position store rejected the update: {0}")]
    Store(String),
}

/// Errors that can occur when converting a custom user format into a `Process`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
