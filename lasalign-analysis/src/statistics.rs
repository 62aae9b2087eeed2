//! Histogram sets and run counters for simulated hits.

use crate::beams::NUM_BEAMS;
use crate::histogram::{Axis, Histogram1D, Histogram2D};
use crate::{HistogramRanges, Result};
use lasalign_core::angle::TWO_PI;
use lasalign_core::{ClassificationResult, DetectorRegion, SimHit, Subsystem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ten plots booked for one subsystem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubsystemHistograms {
    /// x distribution.
    pub x: Histogram1D,
    /// y distribution.
    pub y: Histogram1D,
    /// z distribution.
    pub z: Histogram1D,
    /// y against x.
    pub y_vs_x: Histogram2D,
    /// x against z.
    pub x_vs_z: Histogram2D,
    /// y against z.
    pub y_vs_z: Histogram2D,
    /// Radius against z.
    pub r_vs_z: Histogram2D,
    /// Normalized azimuth against x.
    pub phi_vs_x: Histogram2D,
    /// Normalized azimuth against y.
    pub phi_vs_y: Histogram2D,
    /// Normalized azimuth against z.
    pub phi_vs_z: Histogram2D,
}

impl SubsystemHistograms {
    /// Books the plots for `subsystem`, named `BarrelSimHits*` or `EndcapSimHits*`.
    ///
    /// # Errors
    /// Returns an error if `ranges` produces an invalid axis.
    pub fn book(subsystem: Subsystem, ranges: &HistogramRanges) -> Result<Self> {
        let (prefix, label, xy, z) = match subsystem {
            Subsystem::Barrel => ("Barrel", "barrel", ranges.barrel_xy, ranges.barrel_z),
            Subsystem::Endcap => ("Endcap", "endcap", ranges.endcap_xy, ranges.endcap_z),
        };
        let xy_axis = Axis::new(ranges.bins, -xy, xy)?;
        let z_axis = Axis::new(ranges.bins, -z, z)?;
        let r_axis = Axis::new(ranges.bins, 0.0, xy)?;
        let phi_axis = Axis::new(ranges.phi_bins, 0.0, TWO_PI)?;

        let h1 = |what: &str, axis: Axis| {
            Histogram1D::new(
                format!("{prefix}SimHits{what}"),
                format!("{what} position of SimHits in the {label}"),
                axis,
            )
        };
        let h2 = |y: &str, x: &str, x_axis: Axis, y_axis: Axis| {
            Histogram2D::new(
                format!("{prefix}SimHits{y}vs{x}"),
                format!("{y} vs. {x} position of SimHits in the {label}"),
                x_axis,
                y_axis,
            )
        };

        Ok(Self {
            x: h1("X", xy_axis),
            y: h1("Y", xy_axis),
            z: h1("Z", z_axis),
            y_vs_x: h2("Y", "X", xy_axis, xy_axis)?,
            x_vs_z: h2("X", "Z", z_axis, xy_axis)?,
            y_vs_z: h2("Y", "Z", z_axis, xy_axis)?,
            r_vs_z: h2("R", "Z", z_axis, r_axis)?,
            phi_vs_x: h2("Phi", "X", xy_axis, phi_axis)?,
            phi_vs_y: h2("Phi", "Y", xy_axis, phi_axis)?,
            phi_vs_z: h2("Phi", "Z", z_axis, phi_axis)?,
        })
    }

    /// Fills every plot with one hit.
    pub fn fill(&mut self, hit: &SimHit, result: &ClassificationResult) {
        let phi = result.normalized_azimuth;
        self.x.fill(hit.x);
        self.y.fill(hit.y);
        self.z.fill(hit.z);
        self.y_vs_x.fill(hit.x, hit.y);
        self.x_vs_z.fill(hit.z, hit.x);
        self.y_vs_z.fill(hit.z, hit.y);
        self.r_vs_z.fill(hit.z, result.radius);
        self.phi_vs_x.fill(hit.x, phi);
        self.phi_vs_y.fill(hit.y, phi);
        self.phi_vs_z.fill(hit.z, phi);
    }

    /// Adds another set with identical binning.
    ///
    /// # Errors
    /// Returns an error if any plot's binning differs.
    pub fn merge(&mut self, other: &SubsystemHistograms) -> Result<()> {
        self.x.merge(&other.x)?;
        self.y.merge(&other.y)?;
        self.z.merge(&other.z)?;
        self.y_vs_x.merge(&other.y_vs_x)?;
        self.x_vs_z.merge(&other.x_vs_z)?;
        self.y_vs_z.merge(&other.y_vs_z)?;
        self.r_vs_z.merge(&other.r_vs_z)?;
        self.phi_vs_x.merge(&other.phi_vs_x)?;
        self.phi_vs_y.merge(&other.phi_vs_y)?;
        self.phi_vs_z.merge(&other.phi_vs_z)?;
        Ok(())
    }

    /// Number of hits filled into this set.
    #[must_use]
    pub fn entries(&self) -> u64 {
        self.x.entries
    }
}

/// All plots produced by the analyzer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimHitHistograms {
    /// TIB and TOB hits.
    pub barrel: SubsystemHistograms,
    /// TEC hits.
    pub endcap: SubsystemHistograms,
    /// Radius against z for every hit.
    pub all_r_vs_z: Histogram2D,
    /// Normalized azimuth against z for every hit.
    pub all_phi_vs_z: Histogram2D,
}

impl SimHitHistograms {
    /// Books every plot.
    ///
    /// # Errors
    /// Returns an error if `ranges` produces an invalid axis.
    pub fn book(ranges: &HistogramRanges) -> Result<Self> {
        let z_axis = Axis::new(ranges.bins, -ranges.endcap_z, ranges.endcap_z)?;
        let r_axis = Axis::new(
            ranges.bins,
            0.0,
            ranges.barrel_xy.max(ranges.endcap_xy),
        )?;
        let phi_axis = Axis::new(ranges.phi_bins, 0.0, TWO_PI)?;
        Ok(Self {
            barrel: SubsystemHistograms::book(Subsystem::Barrel, ranges)?,
            endcap: SubsystemHistograms::book(Subsystem::Endcap, ranges)?,
            all_r_vs_z: Histogram2D::new(
                "SimHitsRvsZ",
                "R vs. Z position of all SimHits",
                z_axis,
                r_axis,
            )?,
            all_phi_vs_z: Histogram2D::new(
                "SimHitsPhivsZ",
                "Phi vs. Z position of all SimHits",
                z_axis,
                phi_axis,
            )?,
        })
    }

    /// Routes a classified hit to its subsystem plots and the combined plots.
    pub fn fill(&mut self, hit: &SimHit, result: &ClassificationResult) {
        match result.region.subsystem() {
            Subsystem::Barrel => self.barrel.fill(hit, result),
            Subsystem::Endcap => self.endcap.fill(hit, result),
        }
        self.all_r_vs_z.fill(hit.z, result.radius);
        self.all_phi_vs_z.fill(hit.z, result.normalized_azimuth);
    }

    /// Adds another set with identical binning.
    ///
    /// # Errors
    /// Returns an error if any plot's binning differs.
    pub fn merge(&mut self, other: &SimHitHistograms) -> Result<()> {
        self.barrel.merge(&other.barrel)?;
        self.endcap.merge(&other.endcap)?;
        self.all_r_vs_z.merge(&other.all_r_vs_z)?;
        self.all_phi_vs_z.merge(&other.all_phi_vs_z)?;
        Ok(())
    }
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisSummary {
    /// Number of analyzed events.
    pub events: u64,
    /// Classified hits per region, indexed by [`DetectorRegion::index`].
    pub hits: [u64; 3],
    /// Hits skipped because of non-finite coordinates.
    pub invalid_hits: u64,
    /// Hits inside a beam search window, per region and beam.
    pub beam_hits: [[u64; NUM_BEAMS]; 3],
}

impl AnalysisSummary {
    /// Classified hits in `region`.
    #[must_use]
    pub fn hits_in(&self, region: DetectorRegion) -> u64 {
        self.hits[region.index()]
    }

    /// Total classified hits.
    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.hits.iter().sum()
    }

    /// Beam-window hits for `region` and beam `beam`, `None` for
    /// `beam >= NUM_BEAMS`.
    #[must_use]
    pub fn beam_hits_in(&self, region: DetectorRegion, beam: usize) -> Option<u64> {
        self.beam_hits[region.index()].get(beam).copied()
    }

    /// Adds another summary's counters.
    pub fn merge(&mut self, other: &AnalysisSummary) {
        self.events += other.events;
        self.invalid_hits += other.invalid_hits;
        for (dst, src) in self.hits.iter_mut().zip(other.hits) {
            *dst += src;
        }
        for (dst_row, src_row) in self.beam_hits.iter_mut().zip(other.beam_hits) {
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                *dst += src;
            }
        }
    }
}
