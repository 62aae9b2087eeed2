//! Structure of Arrays (`SoA`) storage for simulated hits.
//!
//! `SimHitBatch` keeps hit positions in parallel vectors so readers can
//! decode straight into columns and the analyzer can split work by index.

use crate::{DetId, DetectorRegion, SimHit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A batch of simulated hits stored in Structure of Arrays (`SoA`) format.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimHitBatch {
    /// Columnar storage for global x positions.
    pub x: Vec<f64>,
    /// Columnar storage for global y positions.
    pub y: Vec<f64>,
    /// Columnar storage for global z positions.
    pub z: Vec<f64>,
    /// Columnar storage for region tags.
    pub region: Vec<DetectorRegion>,
}

impl SimHitBatch {
    /// Creates a new empty batch with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            region: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of hits in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Clears all vectors in the batch.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.z.clear();
        self.region.clear();
    }

    /// Appends all hits from another batch to this one.
    pub fn append(&mut self, other: &SimHitBatch) {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
        self.z.extend_from_slice(&other.z);
        self.region.extend_from_slice(&other.region);
    }

    /// Pushes a single hit into the batch.
    pub fn push(&mut self, hit: SimHit) {
        self.x.push(hit.x);
        self.y.push(hit.y);
        self.z.push(hit.z);
        self.region.push(hit.region);
    }

    /// Pushes a hit tagged by a raw detector ID.
    ///
    /// Hits from detectors without a region (pixels, TID, non-tracker) are
    /// skipped. Returns whether the hit was stored.
    pub fn push_det_id(&mut self, x: f64, y: f64, z: f64, id: DetId) -> bool {
        match SimHit::from_det_id(x, y, z, id) {
            Some(hit) => {
                self.push(hit);
                true
            }
            None => false,
        }
    }

    /// Returns the hit at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SimHit> {
        Some(SimHit::new(
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.z.get(index)?,
            *self.region.get(index)?,
        ))
    }

    /// Iterates over the hits in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = SimHit> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Number of hits recorded in `region`.
    #[must_use]
    pub fn count_region(&self, region: DetectorRegion) -> usize {
        self.region.iter().filter(|&&r| r == region).count()
    }
}

impl FromIterator<SimHit> for SimHitBatch {
    fn from_iter<I: IntoIterator<Item = SimHit>>(iter: I) -> Self {
        let mut batch = Self::default();
        for hit in iter {
            batch.push(hit);
        }
        batch
    }
}

impl Extend<SimHit> for SimHitBatch {
    fn extend<I: IntoIterator<Item = SimHit>>(&mut self, iter: I) {
        for hit in iter {
            self.push(hit);
        }
    }
}
