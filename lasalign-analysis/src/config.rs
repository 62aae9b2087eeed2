//! Analyzer configuration.

use crate::{Error, Result};
use lasalign_core::DetectorRegion;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis limits for the booked histograms (centimetres).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HistogramRanges {
    /// Bins for every coordinate axis.
    pub bins: usize,
    /// Bins for azimuth axes.
    pub phi_bins: usize,
    /// Largest |x| or |y| in the barrel plots.
    pub barrel_xy: f64,
    /// Largest |z| in the barrel plots.
    pub barrel_z: f64,
    /// Largest |x| or |y| in the endcap plots.
    pub endcap_xy: f64,
    /// Largest |z| in the endcap and combined plots.
    pub endcap_z: f64,
}

impl HistogramRanges {
    /// Largest accepted value for `bins` and `phi_bins`.
    pub const MAX_BINS: usize = 1000;
}

impl Default for HistogramRanges {
    fn default() -> Self {
        Self {
            bins: 200,
            phi_bins: 128,
            barrel_xy: 120.0,
            barrel_z: 120.0,
            endcap_xy: 120.0,
            endcap_z: 300.0,
        }
    }
}

/// Configuration for the simulated-hit analyzer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AnalyzerConfig {
    /// Verbosity of per-event logging (0 = silent).
    pub debug_level: u32,
    /// Half-width of the azimuth window around a beam in the TIB (radians).
    pub search_phi_tib: f64,
    /// Half-width of the azimuth window around a beam in the TOB (radians).
    pub search_phi_tob: f64,
    /// Half-width of the azimuth window around a beam in the TEC (radians).
    pub search_phi_tec: f64,
    /// Half-width of the z window around the beam plane in the TIB (cm).
    pub search_z_tib: f64,
    /// Half-width of the z window around the beam plane in the TOB (cm).
    pub search_z_tob: f64,
    /// Where the histograms are written.
    pub output_file: PathBuf,
    /// Skip hits with non-finite coordinates instead of classifying them.
    pub validate_hits: bool,
    /// Histogram binning.
    pub ranges: HistogramRanges,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            debug_level: 0,
            search_phi_tib: 0.05,
            search_phi_tob: 0.05,
            search_phi_tec: 0.05,
            search_z_tib: 1.0,
            search_z_tob: 1.0,
            output_file: PathBuf::from("SimAnalyzer.json"),
            validate_hits: true,
            ranges: HistogramRanges::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debug level.
    #[must_use]
    pub fn with_debug_level(mut self, level: u32) -> Self {
        self.debug_level = level;
        self
    }

    /// Sets the azimuth search window for one region.
    #[must_use]
    pub fn with_search_phi(mut self, region: DetectorRegion, window: f64) -> Self {
        match region {
            DetectorRegion::BarrelTib => self.search_phi_tib = window,
            DetectorRegion::BarrelTob => self.search_phi_tob = window,
            DetectorRegion::EndcapTec => self.search_phi_tec = window,
        }
        self
    }

    /// Sets the z search window for a barrel region. Ignored for the TEC.
    #[must_use]
    pub fn with_search_z(mut self, region: DetectorRegion, window: f64) -> Self {
        match region {
            DetectorRegion::BarrelTib => self.search_z_tib = window,
            DetectorRegion::BarrelTob => self.search_z_tob = window,
            DetectorRegion::EndcapTec => {}
        }
        self
    }

    /// Sets the output file.
    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Enables or disables hit validation.
    #[must_use]
    pub fn with_validate_hits(mut self, validate: bool) -> Self {
        self.validate_hits = validate;
        self
    }

    /// Sets the histogram binning.
    #[must_use]
    pub fn with_ranges(mut self, ranges: HistogramRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Azimuth window for `region`.
    #[must_use]
    pub fn search_phi(&self, region: DetectorRegion) -> f64 {
        match region {
            DetectorRegion::BarrelTib => self.search_phi_tib,
            DetectorRegion::BarrelTob => self.search_phi_tob,
            DetectorRegion::EndcapTec => self.search_phi_tec,
        }
    }

    /// z window for `region`, `None` for the endcap.
    #[must_use]
    pub fn search_z(&self, region: DetectorRegion) -> Option<f64> {
        match region {
            DetectorRegion::BarrelTib => Some(self.search_z_tib),
            DetectorRegion::BarrelTob => Some(self.search_z_tob),
            DetectorRegion::EndcapTec => None,
        }
    }

    /// Checks windows and binning.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] for negative or non-finite windows,
    /// zero bins, more than [`HistogramRanges::MAX_BINS`] bins or
    /// non-positive ranges.
    pub fn validate(&self) -> Result<()> {
        for region in DetectorRegion::ALL {
            let phi = self.search_phi(region);
            if !phi.is_finite() || phi < 0.0 {
                return Err(Error::ConfigError(format!(
                    "search phi window for {region} must be a non-negative number, got {phi}"
                )));
            }
            if let Some(z) = self.search_z(region) {
                if !z.is_finite() || z < 0.0 {
                    return Err(Error::ConfigError(format!(
                        "search z window for {region} must be a non-negative number, got {z}"
                    )));
                }
            }
        }

        let ranges = &self.ranges;
        if ranges.bins == 0 || ranges.phi_bins == 0 {
            return Err(Error::ConfigError(
                "histograms need at least one bin".to_string(),
            ));
        }
        if ranges.bins > HistogramRanges::MAX_BINS || ranges.phi_bins > HistogramRanges::MAX_BINS
        {
            return Err(Error::ConfigError(format!(
                "histograms accept at most {} bins per axis, got {} and {} phi bins",
                HistogramRanges::MAX_BINS,
                ranges.bins,
                ranges.phi_bins
            )));
        }
        for (name, value) in [
            ("barrel_xy", ranges.barrel_xy),
            ("barrel_z", ranges.barrel_z),
            ("endcap_xy", ranges.endcap_xy),
            ("endcap_z", ranges.endcap_z),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "histogram range {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
