//! Hit classification into cylindrical coordinates.

use crate::angle::normalize;
use crate::hit::Hit;
use crate::{DetectorRegion, Error, Result};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric quantities derived from one hit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassificationResult {
    /// Transverse distance from the beam line, `sqrt(x² + y²)`.
    pub radius: f64,
    /// `atan2(y, x)`, in `(-π, π]`.
    pub azimuth: f64,
    /// Azimuth mapped into `[0, 2π)`.
    pub normalized_azimuth: f64,
    /// Region tag of the input hit.
    pub region: DetectorRegion,
}

/// Classifies a hit without checking its coordinates.
///
/// Non-finite coordinates give unspecified (but non-panicking) output; use
/// [`try_classify`] when the producer cannot guarantee finite positions.
#[inline]
#[must_use]
pub fn classify<H: Hit + ?Sized>(hit: &H) -> ClassificationResult {
    let (x, y) = (hit.x(), hit.y());
    // atan2 returns -π for x < 0 with y = -0.0 or y rounding to it.
    let azimuth = match y.atan2(x) {
        phi if phi <= -PI => PI,
        phi => phi,
    };
    ClassificationResult {
        radius: x.hypot(y),
        azimuth,
        normalized_azimuth: normalize(azimuth),
        region: hit.region(),
    }
}

/// Classifies a hit after checking that its position is finite.
///
/// # Errors
/// Returns [`Error::InvalidHit`] if any coordinate is NaN or infinite.
pub fn try_classify<H: Hit + ?Sized>(hit: &H) -> Result<ClassificationResult> {
    if !hit.is_finite() {
        return Err(Error::InvalidHit {
            x: hit.x(),
            y: hit.y(),
            z: hit.z(),
        });
    }
    Ok(classify(hit))
}
