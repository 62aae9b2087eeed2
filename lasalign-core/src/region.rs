//! Detector region tags.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric part of the cylindrical tracker a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Subsystem {
    /// Cylindrical shell around the beam line.
    Barrel,
    /// Flat disks closing the cylinder at each end.
    Endcap,
}

/// Strip tracker subsystem a simulated hit was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DetectorRegion {
    /// Tracker Inner Barrel.
    BarrelTib,
    /// Tracker Outer Barrel.
    BarrelTob,
    /// Tracker EndCaps.
    EndcapTec,
}

impl DetectorRegion {
    /// All regions, in code order.
    pub const ALL: [DetectorRegion; 3] = [Self::BarrelTib, Self::BarrelTob, Self::EndcapTec];

    /// Returns the subsystem this region is part of.
    #[inline]
    #[must_use]
    pub fn subsystem(self) -> Subsystem {
        match self {
            Self::BarrelTib | Self::BarrelTob => Subsystem::Barrel,
            Self::EndcapTec => Subsystem::Endcap,
        }
    }

    /// Short subsystem name as used in detector nomenclature.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BarrelTib => "TIB",
            Self::BarrelTob => "TOB",
            Self::EndcapTec => "TEC",
        }
    }

    /// Compact numeric code used by the binary hit format.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::BarrelTib => 0,
            Self::BarrelTob => 1,
            Self::EndcapTec => 2,
        }
    }

    /// Decodes a region from its numeric code.
    ///
    /// # Errors
    /// Returns [`Error::UnknownRegion`] for codes outside `0..=2`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::BarrelTib),
            1 => Ok(Self::BarrelTob),
            2 => Ok(Self::EndcapTec),
            other => Err(Error::UnknownRegion(format!("code {other}"))),
        }
    }

    /// Position of this region in [`DetectorRegion::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.code())
    }
}

impl fmt::Display for DetectorRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetectorRegion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tib" | "barreltib" | "barrel_tib" => Ok(Self::BarrelTib),
            "tob" | "barreltob" | "barrel_tob" => Ok(Self::BarrelTob),
            "tec" | "endcaptec" | "endcap_tec" => Ok(Self::EndcapTec),
            _ => Err(Error::UnknownRegion(s.to_string())),
        }
    }
}
