//! Error types for the icon generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating an icon
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to parse a color value
    #[error("Invalid color: {0}")]
    ColorError(String),

    /// Failed to rasterize or encode the icon
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to write the icon to disk
    #[error("Output failed: {0}")]
    OutputError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
