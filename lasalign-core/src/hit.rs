//! Simulated hit traits and types.

use crate::{DetId, DetectorRegion, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simulated energy deposit in the strip tracker.
///
/// Positions are global coordinates in the unit used by the producer
/// (centimetres for the analysis defaults).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimHit {
    /// Global x position.
    pub x: f64,
    /// Global y position.
    pub y: f64,
    /// Global z position (along the beam line).
    pub z: f64,
    /// Subsystem the hit was recorded in.
    pub region: DetectorRegion,
}

impl SimHit {
    /// Creates a new simulated hit.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, region: DetectorRegion) -> Self {
        Self { x, y, z, region }
    }

    /// Creates a hit tagged from a raw detector ID.
    ///
    /// Returns `None` for IDs outside the TIB, TOB and TEC.
    #[must_use]
    pub fn from_det_id(x: f64, y: f64, z: f64, id: DetId) -> Option<Self> {
        id.region().map(|region| Self::new(x, y, z, region))
    }

    /// Checks that every coordinate is finite.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHit`] if any coordinate is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidHit {
                x: self.x,
                y: self.y,
                z: self.z,
            })
        }
    }
}

/// Trait for anything carrying a hit position and region tag.
///
/// The classifier only needs these five accessors, so producers can keep
/// their own hit representation.
pub trait Hit: Send + Sync {
    /// Returns the global x position.
    fn x(&self) -> f64;

    /// Returns the global y position.
    fn y(&self) -> f64;

    /// Returns the global z position.
    fn z(&self) -> f64;

    /// Returns the region tag.
    fn region(&self) -> DetectorRegion;

    /// Returns true if all coordinates are finite.
    #[inline]
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.z().is_finite()
    }
}

impl Hit for SimHit {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn region(&self) -> DetectorRegion {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_hit_accessors() {
        let hit = SimHit::new(1.0, -2.0, 30.0, DetectorRegion::BarrelTob);
        assert!((hit.x() - 1.0).abs() < f64::EPSILON);
        assert!((hit.y() + 2.0).abs() < f64::EPSILON);
        assert!((Hit::z(&hit) - 30.0).abs() < f64::EPSILON);
        assert_eq!(hit.region(), DetectorRegion::BarrelTob);
    }

    #[test]
    fn test_from_det_id() {
        let tec = DetId::from_parts(DetId::TRACKER, DetId::TEC);
        let hit = SimHit::from_det_id(1.0, 2.0, -150.0, tec).unwrap();
        assert_eq!(hit.region, DetectorRegion::EndcapTec);

        let tid = DetId::from_parts(DetId::TRACKER, DetId::TID);
        assert_eq!(SimHit::from_det_id(1.0, 2.0, 3.0, tid), None);
    }

    #[test]
    fn test_validate() {
        let ok = SimHit::new(0.0, 0.0, 0.0, DetectorRegion::EndcapTec);
        assert!(ok.validate().is_ok());

        let nan = SimHit::new(f64::NAN, 0.0, 0.0, DetectorRegion::EndcapTec);
        assert!(matches!(nan.validate(), Err(Error::InvalidHit { .. })));

        let inf = SimHit::new(0.0, 0.0, f64::NEG_INFINITY, DetectorRegion::BarrelTib);
        assert!(!inf.is_finite());
        assert!(inf.validate().is_err());
    }
}
