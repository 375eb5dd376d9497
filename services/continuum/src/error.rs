//! Error types for the continuum server

use continuum_app::endpoints::TemplateError;

/// Errors that can occur in the continuum server
#[derive(Debug, thiserror::Error)]
pub enum ContinuumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Endpoint template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type alias for continuum operations
pub type Result<T> = std::result::Result<T, ContinuumError>;
