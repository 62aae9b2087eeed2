//! Error types for lasalign-core.

use thiserror::Error;

/// Result type alias for lasalign operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for lasalign operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Hit position with a non-finite coordinate.
    #[error("invalid hit position: ({x}, {y}, {z})")]
    InvalidHit { x: f64, y: f64, z: f64 },

    /// Unrecognized detector region name or code.
    #[error("unknown detector region: {0}")]
    UnknownRegion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
