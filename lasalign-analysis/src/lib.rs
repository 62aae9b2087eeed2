//! lasalign-analysis: Histogramming and statistics for simulated laser hits.
//!
//! This crate is the aggregation layer on top of the core classifier:
//! - **Histograms** - fixed-binning 1D and 2D histograms with under/overflow
//! - **Beams** - search windows around the nominal laser-beam azimuths
//! - **Statistics** - per-subsystem plot sets and run counters
//! - **Analyzer** - event loop that classifies hits and fills everything
//!
#![warn(missing_docs)]

mod analyzer;
pub mod beams;
mod config;
mod error;
pub mod histogram;
mod statistics;

pub use analyzer::{AnalysisOutput, SimAnalyzer};
pub use beams::{match_beam, nominal_beam_azimuth, NUM_BEAMS};
pub use config::{AnalyzerConfig, HistogramRanges};
pub use error::{Error, Result};
pub use histogram::{Axis, BinIndex, Histogram1D, Histogram2D};
pub use statistics::{AnalysisSummary, SimHitHistograms, SubsystemHistograms};

// Re-export core classification types
pub use lasalign_core::{classify, try_classify, ClassificationResult, DetectorRegion};
