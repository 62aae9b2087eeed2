//! Search windows around the nominal laser-beam positions.
//!
//! The eight beams sit at azimuths `π/8 + n·π/4`. A hit is attributed to a
//! beam when its normalized azimuth is within the region's phi window of the
//! beam; barrel hits must also lie within the region's z window of the beam
//! plane at `z = 0`.

use crate::AnalyzerConfig;
use lasalign_core::angle::TWO_PI;
use lasalign_core::{ClassificationResult, Subsystem};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

/// Number of laser beams around the tracker.
pub const NUM_BEAMS: usize = 8;

/// Nominal azimuth of beam `n` in `[0, 2π)`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn nominal_beam_azimuth(n: usize) -> f64 {
    FRAC_PI_8 + (n % NUM_BEAMS) as f64 * FRAC_PI_4
}

/// Shortest distance between two azimuths in `[0, 2π)`.
#[inline]
fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % TWO_PI;
    d.min(TWO_PI - d)
}

/// Finds the beam a classified hit belongs to.
///
/// `z` is the hit's global z position. Returns the beam index, or `None`
/// when the hit is outside every search window.
#[must_use]
pub fn match_beam(result: &ClassificationResult, z: f64, config: &AnalyzerConfig) -> Option<usize> {
    let region = result.region;
    if region.subsystem() == Subsystem::Barrel {
        let window = config.search_z(region)?;
        if z.abs() > window {
            return None;
        }
    }

    let window = config.search_phi(region);
    (0..NUM_BEAMS).find(|&n| {
        circular_distance(result.normalized_azimuth, nominal_beam_azimuth(n)) <= window
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lasalign_core::{classify, DetectorRegion, SimHit};

    fn hit_at(phi: f64, r: f64, z: f64, region: DetectorRegion) -> SimHit {
        SimHit::new(r * phi.cos(), r * phi.sin(), z, region)
    }

    #[test]
    fn test_nominal_azimuths() {
        assert!((nominal_beam_azimuth(0) - FRAC_PI_8).abs() < 1e-12);
        assert!((nominal_beam_azimuth(7) - (TWO_PI - FRAC_PI_8)).abs() < 1e-12);
        assert!((nominal_beam_azimuth(8) - nominal_beam_azimuth(0)).abs() < 1e-12);
    }

    #[test]
    fn test_circular_distance_wraps() {
        assert!((circular_distance(0.01, TWO_PI - 0.01) - 0.02).abs() < 1e-12);
        assert!((circular_distance(1.0, 1.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_endcap_hit_matches_beam() {
        let config = AnalyzerConfig::default();
        for n in 0..NUM_BEAMS {
            let hit = hit_at(nominal_beam_azimuth(n) + 0.01, 56.4, -150.0, DetectorRegion::EndcapTec);
            assert_eq!(match_beam(&classify(&hit), hit.z, &config), Some(n));
        }

        let between = hit_at(0.0, 56.4, -150.0, DetectorRegion::EndcapTec);
        assert_eq!(match_beam(&classify(&between), between.z, &config), None);
    }

    #[test]
    fn test_barrel_hit_needs_z_window() {
        let config = AnalyzerConfig::default();
        let phi = nominal_beam_azimuth(3);

        let inside = hit_at(phi, 30.0, 0.5, DetectorRegion::BarrelTib);
        assert_eq!(match_beam(&classify(&inside), inside.z, &config), Some(3));

        let outside = hit_at(phi, 30.0, 5.0, DetectorRegion::BarrelTib);
        assert_eq!(match_beam(&classify(&outside), outside.z, &config), None);

        let wide = config.with_search_z(DetectorRegion::BarrelTib, 10.0);
        assert_eq!(match_beam(&classify(&outside), outside.z, &wide), Some(3));
    }
}
