//! Error types for SceneForge.

use thiserror::Error;

/// Main error type for SceneForge operations outside the mutation API.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for SceneForge operations.
pub type Result<T> = std::result::Result<T, EditorError>;
