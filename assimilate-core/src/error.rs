// ============================================================================
// assimilate-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the assimilate-core library
//
// A single error enum covers every failure the library can report: reading
// documents from disk, malformed JSON, documents of the wrong shape, enum
// values rejected under strict mode, and invalid codec configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the assimilate-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access '{path}': {source}")]
    PathError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unrecognised value '{value}' for field '{field}'")]
    UnknownEnumValue { field: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for assimilate-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
