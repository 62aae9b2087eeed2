#![allow(clippy::cast_precision_loss)]
use lasalign_analysis::{nominal_beam_azimuth, AnalyzerConfig, HistogramRanges, SimAnalyzer, NUM_BEAMS};
use lasalign_core::{DetectorRegion, SimHit, SimHitBatch};

fn config() -> AnalyzerConfig {
    AnalyzerConfig::new().with_ranges(HistogramRanges {
        bins: 40,
        phi_bins: 32,
        ..HistogramRanges::default()
    })
}

/// Deterministic spread of hits over all three regions.
fn generate_hits(count: usize) -> SimHitBatch {
    (0..count)
        .map(|i| {
            let phi = (i as f64) * 0.013;
            let region = DetectorRegion::ALL[i % 3];
            let (r, z) = match region {
                DetectorRegion::BarrelTib => (30.0, ((i % 200) as f64) - 100.0),
                DetectorRegion::BarrelTob => (80.0, ((i % 220) as f64) - 110.0),
                DetectorRegion::EndcapTec => (56.4 + (i % 2) as f64 * 27.6, -130.0 - (i % 9) as f64 * 15.0),
            };
            SimHit::new(r * phi.cos(), r * phi.sin(), z, region)
        })
        .collect()
}

#[test]
fn test_parallel_event_matches_sequential_events() {
    let hits = generate_hits(30_000);

    let mut parallel = SimAnalyzer::new(config()).unwrap();
    parallel.analyze_event(&hits).unwrap();
    let parallel = parallel.finish();

    let mut sequential = SimAnalyzer::new(config()).unwrap();
    let mut event = SimHitBatch::default();
    for (i, hit) in hits.iter().enumerate() {
        event.push(hit);
        if (i + 1) % 1000 == 0 {
            sequential.analyze_event(&event).unwrap();
            event.clear();
        }
    }
    let sequential = sequential.finish();

    assert_eq!(parallel.summary.events, 1);
    assert_eq!(sequential.summary.events, 30);
    assert_eq!(parallel.summary.hits, sequential.summary.hits);
    assert_eq!(parallel.summary.beam_hits, sequential.summary.beam_hits);
    assert_eq!(parallel.histograms, sequential.histograms);
    assert_eq!(parallel.summary.total_hits(), 30_000);
}

#[test]
fn test_beam_hits_for_every_tec_beam() {
    let mut analyzer = SimAnalyzer::new(config()).unwrap();
    let hits: SimHitBatch = (0..NUM_BEAMS)
        .map(|n| {
            let phi = nominal_beam_azimuth(n);
            SimHit::new(84.0 * phi.cos(), 84.0 * phi.sin(), -200.0, DetectorRegion::EndcapTec)
        })
        .collect();
    analyzer.analyze_event(&hits).unwrap();

    let summary = analyzer.finish().summary;
    for n in 0..NUM_BEAMS {
        assert_eq!(summary.beam_hits_in(DetectorRegion::EndcapTec, n), Some(1));
    }
    assert_eq!(summary.beam_hits_in(DetectorRegion::BarrelTib, 0), Some(0));
}

#[test]
fn test_scenario_hits_land_in_expected_plots() {
    let mut analyzer = SimAnalyzer::new(config()).unwrap();
    let hits: SimHitBatch = [
        SimHit::new(1.0, 1.0, 0.0, DetectorRegion::BarrelTib),
        SimHit::new(-1.0, 0.0, 5.0, DetectorRegion::EndcapTec),
        SimHit::new(0.0, -1.0, 0.0, DetectorRegion::BarrelTob),
    ]
    .into_iter()
    .collect();
    analyzer.analyze_event(&hits).unwrap();
    let output = analyzer.finish();

    assert_eq!(output.histograms.barrel.entries(), 2);
    assert_eq!(output.histograms.endcap.entries(), 1);
    assert_eq!(output.histograms.all_phi_vs_z.entries, 3);
    assert_eq!(output.summary.hits_in(DetectorRegion::BarrelTob), 1);
}
