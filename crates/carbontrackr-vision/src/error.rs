//! Error types for the vision gateway.

use thiserror::Error;

/// Errors from the vision gateway client.
#[derive(Error, Debug)]
pub enum VisionError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the gateway.
    #[error("gateway returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Well-formed response with nothing in it.
    #[error("gateway response contained no choices")]
    EmptyResponse,

    /// Client construction failure.
    #[error("invalid gateway configuration: {0}")]
    Config(String),
}

/// Result type for the vision gateway.
pub type Result<T> = std::result::Result<T, VisionError>;
