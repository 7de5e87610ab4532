/*!
 * Error types for the bankdeck application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing a source corpus
#[derive(Error, Debug)]
pub enum ParseError {
    /// No dialect parser exists for the region tag; there is nothing to
    /// fall back to, so the whole suite fails
    #[error("Missing parser for region '{0}'")]
    UnknownRegion(String),
}

/// Errors that can occur while rendering export artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    /// Archive serialization failed
    #[error("Failed to serialize suite archive: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from parsing a source corpus
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from export rendering
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
