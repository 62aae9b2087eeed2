//! Beam layout of the minus-side endcap.
//!
//! Two rings of eight beams. Beam `n` of either ring sits at azimuth
//! `π/8 + n·π/4`; all beams start on the plane `z = -1137 mm` and point
//! along `-z`. Lengths are in millimetres.

#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};
use std::fmt;

/// Beams per ring.
pub const BEAMS_PER_RING: usize = 8;

/// z of the plane the beams start from (mm).
pub const START_Z_MM: f64 = -1137.0;

/// Module ring a beam runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Inner laser ring.
    Ring4,
    /// Outer laser ring.
    Ring6,
}

impl Ring {
    /// Both rings, inner first.
    pub const ALL: [Ring; 2] = [Ring::Ring4, Ring::Ring6];

    /// Beam radius (mm).
    #[must_use]
    pub fn radius_mm(self) -> f64 {
        match self {
            Ring::Ring4 => 564.0,
            Ring::Ring6 => 840.0,
        }
    }

    /// Ring number as printed in detector nomenclature.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Ring::Ring4 => 4,
            Ring::Ring6 => 6,
        }
    }
}

/// One of the sixteen endcap beams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeamId {
    /// Ring the beam runs through.
    pub ring: Ring,
    /// Beam index around the ring, `0..8`.
    pub beam: usize,
}

impl BeamId {
    /// Creates a beam id, wrapping `beam` into `0..8`.
    #[must_use]
    pub fn new(ring: Ring, beam: usize) -> Self {
        Self {
            ring,
            beam: beam % BEAMS_PER_RING,
        }
    }

    /// All sixteen beams, ring 4 first.
    pub fn all() -> impl Iterator<Item = BeamId> {
        Ring::ALL
            .into_iter()
            .flat_map(|ring| (0..BEAMS_PER_RING).map(move |beam| BeamId::new(ring, beam)))
    }

    /// Nominal azimuth (radians).
    #[must_use]
    pub fn azimuth(self) -> f64 {
        FRAC_PI_8 + self.beam as f64 * FRAC_PI_4
    }

    /// Start vertex of the beam.
    #[must_use]
    pub fn origin(self) -> Point3<f64> {
        let r = self.ring.radius_mm();
        let phi = self.azimuth();
        Point3::new(r * phi.cos(), r * phi.sin(), START_Z_MM)
    }

    /// Nominal direction of the beam.
    #[must_use]
    pub fn axis() -> Vector3<f64> {
        -Vector3::z()
    }
}

impl fmt::Display for BeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}B{}", self.ring.number(), self.beam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sixteen_beams() {
        let beams: Vec<_> = BeamId::all().collect();
        assert_eq!(beams.len(), 16);
        assert_eq!(beams[0], BeamId::new(Ring::Ring4, 0));
        assert_eq!(beams[15], BeamId::new(Ring::Ring6, 7));
    }

    #[test]
    fn test_origin_on_ring() {
        for beam in BeamId::all() {
            let origin = beam.origin();
            assert_relative_eq!(origin.x.hypot(origin.y), beam.ring.radius_mm(), epsilon = 1e-9);
            assert_relative_eq!(origin.z, START_Z_MM);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BeamId::new(Ring::Ring6, 10).to_string(), "R6B2");
    }
}
