//! Analysis error types.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Analysis error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Histogram axis cannot be constructed.
    #[error("invalid axis: {bins} bins over [{min}, {max})")]
    InvalidAxis {
        /// Requested number of bins.
        bins: usize,
        /// Requested lower edge.
        min: f64,
        /// Requested upper edge.
        max: f64,
    },

    /// Two-dimensional histogram grid is too large to book.
    #[error("histogram '{name}' has too many cells: {x_bins} x {y_bins}")]
    TooManyCells {
        /// Histogram name.
        name: String,
        /// Bins on the x axis.
        x_bins: usize,
        /// Bins on the y axis.
        y_bins: usize,
    },

    /// Two histograms with different binning were combined.
    #[error("histogram binning mismatch for '{0}'")]
    BinningMismatch(String),

    /// Invalid analyzer configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Core library error.
    #[error("core error: {0}")]
    CoreError(#[from] lasalign_core::Error),
}
