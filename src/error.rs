//! Error types for the label renderer
//!
//! This module defines custom error types for label rendering,
//! providing clear error messages and proper error propagation.

use thiserror::Error;

/// Custom error type for label rendering operations
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Invalid label size: {0}")]
    InvalidSize(String),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Character {0:?} has no WinAnsi mapping and cannot be rendered")]
    Unencodable(char),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;
