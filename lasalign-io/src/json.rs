//! JSON configuration input and analysis output.

use crate::Result;
use lasalign_analysis::{AnalysisOutput, AnalyzerConfig};
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Loads an analyzer configuration from a JSON file.
///
/// Missing fields keep their default values.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_analyzer_config<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig> {
    let file = File::open(path)?;
    let config = serde_json::from_reader(BufReader::new(file))?;
    Ok(config)
}

/// Writes histograms and counters to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_analysis_json<P: AsRef<Path>>(path: P, output: &AnalysisOutput) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, output)?;
    writer.flush()?;
    info!("wrote analysis results to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lasalign_analysis::{HistogramRanges, SimAnalyzer};
    use lasalign_core::{DetectorRegion, SimHit, SimHitBatch};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"debug_level": 3, "search_phi_tec": 0.2, "ranges": {{"bins": 50}}}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = read_analyzer_config(file.path()).unwrap();
        assert_eq!(config.debug_level, 3);
        assert!((config.search_phi_tec - 0.2).abs() < f64::EPSILON);
        assert!((config.search_phi_tib - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.ranges.bins, 50);
        assert_eq!(config.ranges.phi_bins, HistogramRanges::default().phi_bins);
    }

    #[test]
    fn test_write_analysis_json() {
        let config = AnalyzerConfig::new().with_ranges(HistogramRanges {
            bins: 8,
            phi_bins: 8,
            ..HistogramRanges::default()
        });
        let mut analyzer = SimAnalyzer::new(config).unwrap();
        let hits: SimHitBatch = [SimHit::new(3.0, 4.0, 1.0, DetectorRegion::BarrelTob)]
            .into_iter()
            .collect();
        analyzer.analyze_event(&hits).unwrap();
        let output = analyzer.finish();

        let file = NamedTempFile::new().unwrap();
        write_analysis_json(file.path(), &output).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["summary"]["events"], 1);
        assert_eq!(value["histograms"]["barrel"]["x"]["name"], "BarrelSimHitsX");

        let decoded: AnalysisOutput = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.summary, output.summary);
        assert_eq!(decoded.histograms.barrel.x.counts.len(), 8);
    }
}
