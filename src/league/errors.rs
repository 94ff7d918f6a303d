//! Error types for the league page layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Unknown view: '{0}'")]
    UnknownView(String),

    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
