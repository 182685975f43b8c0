//! Error types for the description model.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid perspective: {0}")]
    UnknownPerspective(String),

    #[error("Unsupported visual output format: {0}")]
    UnsupportedVisualFormat(String),

    #[error("Unknown data format: {0}")]
    UnknownDataFormat(String),

    #[error("{0} direct render requests are not supported")]
    UnsupportedDataFormat(String),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Binary payload error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render failed: {0}")]
    RenderFailed(String),
}
