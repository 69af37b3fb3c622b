//! Error types for the random walk renderer

use thiserror::Error;

/// Result type alias for walk and rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, rendering or serving a walk
#[derive(Error, Debug)]
pub enum Error {
    /// A walk needs at least one axis
    #[error("Invalid dimensionality {0}: a walk needs at least one axis")]
    InvalidDimensions(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to encode the canvas
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// The requested step count could not be parsed
    #[error("malformed count {0}")]
    MalformedCount(String),

    /// Network error (bind, accept, respond)
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::RenderError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
