//! Azimuth normalization.

/// Full turn in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Maps an angle in radians into `[0, 2π)`.
///
/// Negative inputs are wrapped once by adding 2π. The wrap is only correct
/// for inputs in `(-2π, 2π)`, which covers everything `atan2` produces;
/// values outside that range are returned unwrapped on the positive side
/// and stay negative on the negative side.
///
/// Both `0.0` and `-0.0` map to `+0.0`. A tiny negative input whose wrapped
/// value would round up to exactly 2π maps to `0.0` instead.
#[inline]
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    if angle < 0.0 {
        let wrapped = angle + TWO_PI;
        if wrapped < TWO_PI {
            wrapped
        } else {
            0.0
        }
    } else {
        // -0.0 + 0.0 == +0.0
        angle + 0.0
    }
}
