//! Event loop that classifies simulated hits and fills the histograms.

use crate::beams::match_beam;
use crate::statistics::{AnalysisSummary, SimHitHistograms};
use crate::{AnalyzerConfig, Result};
use lasalign_core::{classify, try_classify, SimHit, SimHitBatch};
use log::{debug, info, warn};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events with at least this many hits are split across the thread pool.
const PARALLEL_THRESHOLD: usize = 8192;

/// Histograms and counters of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisOutput {
    /// Filled plots.
    pub histograms: SimHitHistograms,
    /// Run counters.
    pub summary: AnalysisSummary,
}

/// Per-thread accumulator.
struct Partial {
    histograms: SimHitHistograms,
    summary: AnalysisSummary,
}

impl Partial {
    fn book(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            histograms: SimHitHistograms::book(&config.ranges)?,
            summary: AnalysisSummary::default(),
        })
    }
}

/// Classifies one hit and records it.
fn accumulate(
    histograms: &mut SimHitHistograms,
    summary: &mut AnalysisSummary,
    hit: &SimHit,
    config: &AnalyzerConfig,
) {
    let result = if config.validate_hits {
        match try_classify(hit) {
            Ok(result) => result,
            Err(_) => {
                summary.invalid_hits += 1;
                return;
            }
        }
    } else {
        classify(hit)
    };

    let region = result.region.index();
    summary.hits[region] += 1;
    histograms.fill(hit, &result);
    if let Some(beam) = match_beam(&result, hit.z, config) {
        summary.beam_hits[region][beam] += 1;
    }
}

/// Simulated-hit analyzer.
///
/// Each call to [`SimAnalyzer::analyze_event`] classifies one event's hits,
/// routes them to the barrel or endcap plots and counts the hits that fall
/// inside a laser-beam search window.
pub struct SimAnalyzer {
    config: AnalyzerConfig,
    histograms: SimHitHistograms,
    summary: AnalysisSummary,
}

impl SimAnalyzer {
    /// Validates the configuration and books the histograms.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let histograms = SimHitHistograms::book(&config.ranges)?;
        info!(
            "SimAnalyzer booked histograms ({} bins, {} phi bins), output {}",
            config.ranges.bins,
            config.ranges.phi_bins,
            config.output_file.display()
        );
        Ok(Self {
            config,
            histograms,
            summary: AnalysisSummary::default(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn summary(&self) -> &AnalysisSummary {
        &self.summary
    }

    /// Histograms filled so far.
    #[must_use]
    pub fn histograms(&self) -> &SimHitHistograms {
        &self.histograms
    }

    /// Analyzes the hits of one event.
    ///
    /// # Errors
    /// Returns an error if per-thread histograms cannot be booked or merged.
    pub fn analyze_event(&mut self, hits: &SimHitBatch) -> Result<()> {
        let event = if hits.len() >= PARALLEL_THRESHOLD {
            let partials = self.accumulate_parallel(hits)?;
            let mut event = AnalysisSummary::default();
            for partial in &partials {
                self.histograms.merge(&partial.histograms)?;
                event.merge(&partial.summary);
            }
            event
        } else {
            let mut event = AnalysisSummary::default();
            for hit in hits.iter() {
                accumulate(&mut self.histograms, &mut event, &hit, &self.config);
            }
            event
        };

        let index = self.summary.events;
        if event.invalid_hits > 0 {
            warn!(
                "event {index}: skipped {} hits with non-finite coordinates",
                event.invalid_hits
            );
        }
        if self.config.debug_level > 0 {
            debug!(
                "event {index}: {} hits (TIB {}, TOB {}, TEC {})",
                hits.len(),
                event.hits[0],
                event.hits[1],
                event.hits[2]
            );
        }
        if self.config.debug_level > 1 {
            for (name, row) in ["TIB", "TOB", "TEC"].iter().zip(&event.beam_hits) {
                debug!("  {name} beam hits: {row:?}");
            }
        }

        self.summary.merge(&event);
        self.summary.events += 1;
        Ok(())
    }

    /// Splits the event into one chunk per worker thread.
    fn accumulate_parallel(&self, hits: &SimHitBatch) -> Result<Vec<Partial>> {
        let config = &self.config;
        let chunk_size = hits
            .len()
            .div_ceil(rayon::current_num_threads().max(1))
            .max(1);
        let starts: Vec<usize> = (0..hits.len()).step_by(chunk_size).collect();

        starts
            .par_iter()
            .map(|&start| -> Result<Partial> {
                let end = (start + chunk_size).min(hits.len());
                let mut partial = Partial::book(config)?;
                for i in start..end {
                    if let Some(hit) = hits.get(i) {
                        accumulate(&mut partial.histograms, &mut partial.summary, &hit, config);
                    }
                }
                Ok(partial)
            })
            .collect()
    }

    /// Ends the run and hands over the filled histograms.
    #[must_use]
    pub fn finish(self) -> AnalysisOutput {
        let summary = self.summary;
        info!(
            "SimAnalyzer finished: {} events, {} hits, {} invalid",
            summary.events,
            summary.total_hits(),
            summary.invalid_hits
        );
        AnalysisOutput {
            histograms: self.histograms,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistogramRanges;
    use lasalign_core::DetectorRegion;

    fn small_config() -> AnalyzerConfig {
        AnalyzerConfig::new().with_ranges(HistogramRanges {
            bins: 16,
            phi_bins: 16,
            ..HistogramRanges::default()
        })
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = small_config().with_search_phi(DetectorRegion::BarrelTob, -1.0);
        assert!(SimAnalyzer::new(config).is_err());
    }

    #[test]
    fn test_rejects_huge_binning_before_booking() {
        let config = small_config().with_ranges(HistogramRanges {
            bins: usize::MAX,
            ..HistogramRanges::default()
        });
        assert!(matches!(
            SimAnalyzer::new(config),
            Err(crate::Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_skips_invalid_hits() {
        let mut analyzer = SimAnalyzer::new(small_config()).unwrap();
        let batch: SimHitBatch = [
            SimHit::new(10.0, 0.0, 0.0, DetectorRegion::BarrelTib),
            SimHit::new(f64::NAN, 0.0, 0.0, DetectorRegion::BarrelTib),
        ]
        .into_iter()
        .collect();
        analyzer.analyze_event(&batch).unwrap();

        let output = analyzer.finish();
        assert_eq!(output.summary.events, 1);
        assert_eq!(output.summary.invalid_hits, 1);
        assert_eq!(output.summary.hits_in(DetectorRegion::BarrelTib), 1);
        assert_eq!(output.histograms.barrel.entries(), 1);
    }

    #[test]
    fn test_without_validation_counts_every_hit() {
        let mut analyzer = SimAnalyzer::new(small_config().with_validate_hits(false)).unwrap();
        let batch: SimHitBatch = [SimHit::new(f64::NAN, 0.0, 0.0, DetectorRegion::EndcapTec)]
            .into_iter()
            .collect();
        analyzer.analyze_event(&batch).unwrap();
        assert_eq!(analyzer.summary().invalid_hits, 0);
        assert_eq!(analyzer.summary().hits_in(DetectorRegion::EndcapTec), 1);
    }
}
