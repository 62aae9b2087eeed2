//! Raw tracker detector-ID decoding.
//!
//! Layout of a 32-bit detector ID:
//!
//! | bits  | field                             |
//! |-------|-----------------------------------|
//! | 28-31 | detector (1 = tracker)            |
//! | 25-27 | subdetector (3 TIB, 4 TID, 5 TOB, 6 TEC) |
//! | 18-19 | TEC side (1 = minus, 2 = plus)    |

use crate::DetectorRegion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Endcap a TEC module sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndcapSide {
    /// Negative-z endcap (back).
    Minus,
    /// Positive-z endcap (front).
    Plus,
}

/// Raw 32-bit detector identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetId(pub u32);

impl DetId {
    /// Detector code of the tracker.
    pub const TRACKER: u32 = 1;
    /// Tracker Inner Barrel subdetector code.
    pub const TIB: u32 = 3;
    /// Tracker Inner Disks subdetector code.
    pub const TID: u32 = 4;
    /// Tracker Outer Barrel subdetector code.
    pub const TOB: u32 = 5;
    /// Tracker EndCap subdetector code.
    pub const TEC: u32 = 6;

    /// Builds an ID from detector and subdetector codes with all module bits zero.
    #[must_use]
    pub fn from_parts(det: u32, subdetector: u32) -> Self {
        Self(((det & 0xF) << 28) | ((subdetector & 0x7) << 25))
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Detector code (bits 28-31).
    #[inline]
    #[must_use]
    pub fn det(self) -> u32 {
        (self.0 >> 28) & 0xF
    }

    /// Subdetector code (bits 25-27).
    #[inline]
    #[must_use]
    pub fn subdetector(self) -> u32 {
        (self.0 >> 25) & 0x7
    }

    /// Region tag for strip modules the analysis tracks.
    ///
    /// Pixel, TID and non-tracker IDs have no region.
    #[must_use]
    pub fn region(self) -> Option<DetectorRegion> {
        if self.det() != Self::TRACKER {
            return None;
        }
        match self.subdetector() {
            Self::TIB => Some(DetectorRegion::BarrelTib),
            Self::TOB => Some(DetectorRegion::BarrelTob),
            Self::TEC => Some(DetectorRegion::EndcapTec),
            _ => None,
        }
    }

    /// Endcap side of a TEC module.
    #[must_use]
    pub fn tec_side(self) -> Option<EndcapSide> {
        if self.region() != Some(DetectorRegion::EndcapTec) {
            return None;
        }
        match (self.0 >> 18) & 0x3 {
            1 => Some(EndcapSide::Minus),
            2 => Some(EndcapSide::Plus),
            _ => None,
        }
    }
}

impl From<u32> for DetId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
