//! Error types for report export
//!
//! Only hard failures live here. A single image that cannot be fetched is
//! reported as a `Fetch`/`HttpStatus` error by the fetcher but never aborts
//! the export.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The rasterizer could not render the capture region
    #[error("{0}")]
    Render(String),

    /// The rendered bitmap could not be encoded as PNG
    #[error("{0}")]
    Encode(String),

    /// The download fallback could not be triggered
    #[error("{0}")]
    Download(String),

    /// An image request completed with a non-2xx status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// An image request failed before a response arrived
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A required element or browser API is missing
    #[error("{0}")]
    Dom(String),
}

impl ExportError {
    /// Text shown to the user in the failure alert
    pub fn alert_message(&self) -> String {
        format!("Error al generar la imagen: {}", self)
    }
}
