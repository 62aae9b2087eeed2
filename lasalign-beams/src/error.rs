//! Generator error types.

use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Generator error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid gun configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Angular divergence distribution cannot be built.
    #[error("invalid divergence: {0}")]
    Divergence(#[from] rand_distr::NormalError),
}
