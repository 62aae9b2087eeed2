//! Fixed-binning histograms.
//!
//! Bins are half-open, `[low, high)`. Values below `min` land in the
//! underflow counter, values at or above `max` in the overflow counter,
//! and NaN is rejected without touching any counter.

#![allow(clippy::cast_precision_loss)]

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a value falls on an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinIndex {
    /// Below the axis minimum.
    Underflow,
    /// Inside the axis, in the given bin.
    Bin(usize),
    /// At or above the axis maximum.
    Overflow,
    /// NaN, not counted anywhere.
    Rejected,
}

/// Uniform binning of `[min, max)` into `bins` bins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axis {
    /// Number of bins.
    pub bins: usize,
    /// Lower edge of the first bin.
    pub min: f64,
    /// Upper edge of the last bin.
    pub max: f64,
}

impl Axis {
    /// Largest number of bins a single axis may have.
    pub const MAX_BINS: usize = 1 << 20;

    /// Creates an axis.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAxis`] for zero bins, more than
    /// [`Axis::MAX_BINS`] bins, non-finite limits or `min >= max`.
    pub fn new(bins: usize, min: f64, max: f64) -> Result<Self> {
        if bins == 0
            || bins > Self::MAX_BINS
            || !min.is_finite()
            || !max.is_finite()
            || min >= max
        {
            return Err(Error::InvalidAxis { bins, min, max });
        }
        Ok(Self { bins, min, max })
    }

    /// Width of a single bin.
    #[inline]
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.bins as f64
    }

    /// Centre of bin `index`.
    #[must_use]
    pub fn bin_center(&self, index: usize) -> f64 {
        self.min + (index as f64 + 0.5) * self.bin_width()
    }

    /// Locates `value` on the axis.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bin_of(&self, value: f64) -> BinIndex {
        if value.is_nan() {
            return BinIndex::Rejected;
        }
        if value < self.min {
            return BinIndex::Underflow;
        }
        if value >= self.max {
            return BinIndex::Overflow;
        }
        let bin = ((value - self.min) / self.bin_width()) as usize;
        // Rounding can push values just below max into a bin past the end.
        BinIndex::Bin(bin.min(self.bins - 1))
    }
}

/// One-dimensional histogram with weighted counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram1D {
    /// Identifier, unique within a histogram set.
    pub name: String,
    /// Human readable description.
    pub title: String,
    /// Binning.
    pub axis: Axis,
    /// Sum of weights per bin.
    pub counts: Vec<f64>,
    /// Sum of weights below the axis.
    pub underflow: f64,
    /// Sum of weights above the axis.
    pub overflow: f64,
    /// Number of fills, including under/overflow.
    pub entries: u64,
}

impl Histogram1D {
    /// Books an empty histogram.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, axis: Axis) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            axis,
            counts: vec![0.0; axis.bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        }
    }

    /// Adds `value` with unit weight.
    #[inline]
    pub fn fill(&mut self, value: f64) {
        self.fill_weighted(value, 1.0);
    }

    /// Adds `value` with the given weight.
    pub fn fill_weighted(&mut self, value: f64, weight: f64) {
        match self.axis.bin_of(value) {
            BinIndex::Rejected => return,
            BinIndex::Underflow => self.underflow += weight,
            BinIndex::Overflow => self.overflow += weight,
            BinIndex::Bin(i) => self.counts[i] += weight,
        }
        self.entries += 1;
    }

    /// Sum of in-range bin contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Mean of the in-range contents using bin centres, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let total = self.integral();
        if total <= 0.0 {
            return None;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, c)| c * self.axis.bin_center(i))
            .sum();
        Some(weighted / total)
    }

    /// Adds the contents of another histogram with identical binning.
    ///
    /// # Errors
    /// Returns [`Error::BinningMismatch`] if the axes differ.
    pub fn merge(&mut self, other: &Histogram1D) -> Result<()> {
        if self.axis != other.axis {
            return Err(Error::BinningMismatch(self.name.clone()));
        }
        for (dst, src) in self.counts.iter_mut().zip(&other.counts) {
            *dst += src;
        }
        self.underflow += other.underflow;
        self.overflow += other.overflow;
        self.entries += other.entries;
        Ok(())
    }
}

/// Two-dimensional histogram stored row-major (`iy * x_bins + ix`).
///
/// Under/overflow is tracked as a single out-of-range sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram2D {
    /// Identifier, unique within a histogram set.
    pub name: String,
    /// Human readable description.
    pub title: String,
    /// Horizontal binning.
    pub x_axis: Axis,
    /// Vertical binning.
    pub y_axis: Axis,
    /// Sum of weights per cell.
    pub counts: Vec<f64>,
    /// Sum of weights outside the grid on either axis.
    pub out_of_range: f64,
    /// Number of fills, including out-of-range.
    pub entries: u64,
}

impl Histogram2D {
    /// Largest number of cells a histogram may book.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Books an empty histogram.
    ///
    /// # Errors
    /// Returns [`Error::TooManyCells`] if the grid has more than
    /// [`Histogram2D::MAX_CELLS`] cells.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        x_axis: Axis,
        y_axis: Axis,
    ) -> Result<Self> {
        let name = name.into();
        let cells = match x_axis.bins.checked_mul(y_axis.bins) {
            Some(cells) if cells <= Self::MAX_CELLS => cells,
            _ => {
                return Err(Error::TooManyCells {
                    name,
                    x_bins: x_axis.bins,
                    y_bins: y_axis.bins,
                })
            }
        };
        Ok(Self {
            name,
            title: title.into(),
            x_axis,
            y_axis,
            counts: vec![0.0; cells],
            out_of_range: 0.0,
            entries: 0,
        })
    }

    /// Adds the point `(x, y)` with unit weight.
    #[inline]
    pub fn fill(&mut self, x: f64, y: f64) {
        self.fill_weighted(x, y, 1.0);
    }

    /// Adds the point `(x, y)` with the given weight.
    pub fn fill_weighted(&mut self, x: f64, y: f64, weight: f64) {
        match (self.x_axis.bin_of(x), self.y_axis.bin_of(y)) {
            (BinIndex::Rejected, _) | (_, BinIndex::Rejected) => return,
            (BinIndex::Bin(ix), BinIndex::Bin(iy)) => {
                self.counts[iy * self.x_axis.bins + ix] += weight;
            }
            _ => self.out_of_range += weight,
        }
        self.entries += 1;
    }

    /// Content of cell `(ix, iy)`, `None` outside the grid.
    #[must_use]
    pub fn bin_content(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.x_axis.bins || iy >= self.y_axis.bins {
            return None;
        }
        Some(self.counts[iy * self.x_axis.bins + ix])
    }

    /// Sum of in-range cell contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Adds the contents of another histogram with identical binning.
    ///
    /// # Errors
    /// Returns [`Error::BinningMismatch`] if either axis differs.
    pub fn merge(&mut self, other: &Histogram2D) -> Result<()> {
        if self.x_axis != other.x_axis || self.y_axis != other.y_axis {
            return Err(Error::BinningMismatch(self.name.clone()));
        }
        for (dst, src) in self.counts.iter_mut().zip(&other.counts) {
            *dst += src;
        }
        self.out_of_range += other.out_of_range;
        self.entries += other.entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_rejects_bad_binning() {
        assert!(Axis::new(0, 0.0, 1.0).is_err());
        assert!(Axis::new(10, 1.0, 1.0).is_err());
        assert!(Axis::new(10, 2.0, 1.0).is_err());
        assert!(Axis::new(10, f64::NEG_INFINITY, 1.0).is_err());
        assert!(matches!(
            Axis::new(usize::MAX, 0.0, 1.0),
            Err(Error::InvalidAxis { .. })
        ));
        assert!(Axis::new(Axis::MAX_BINS, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_histogram_2d_rejects_huge_grid() {
        let axis = Axis::new(Axis::MAX_BINS, 0.0, 1.0).unwrap();
        let result = Histogram2D::new("big", "too big", axis, axis);
        assert!(matches!(result, Err(Error::TooManyCells { .. })));

        let wide = Axis::new(4097, 0.0, 1.0).unwrap();
        let tall = Axis::new(4096, 0.0, 1.0).unwrap();
        assert!(Histogram2D::new("wide", "just over", wide, tall).is_err());

        let small = Axis::new(512, 0.0, 1.0).unwrap();
        let hist = Histogram2D::new("ok", "fits", small, small).unwrap();
        assert_eq!(hist.counts.len(), 512 * 512);
    }

    #[test]
    fn test_axis_bin_of() {
        let axis = Axis::new(10, -5.0, 5.0).unwrap();
        assert_relative_eq!(axis.bin_width(), 1.0);
        assert_eq!(axis.bin_of(-5.0), BinIndex::Bin(0));
        assert_eq!(axis.bin_of(-0.5), BinIndex::Bin(4));
        assert_eq!(axis.bin_of(4.999), BinIndex::Bin(9));
        assert_eq!(axis.bin_of(5.0), BinIndex::Overflow);
        assert_eq!(axis.bin_of(-5.1), BinIndex::Underflow);
        assert_eq!(axis.bin_of(f64::NAN), BinIndex::Rejected);
        assert_relative_eq!(axis.bin_center(0), -4.5);
    }

    #[test]
    fn test_histogram_1d_fill() {
        let mut hist = Histogram1D::new("h", "test", Axis::new(4, 0.0, 4.0).unwrap());
        hist.fill(0.5);
        hist.fill(0.7);
        hist.fill(3.2);
        hist.fill(-1.0);
        hist.fill(10.0);
        hist.fill(f64::NAN);

        assert_eq!(hist.entries, 5);
        assert_relative_eq!(hist.counts[0], 2.0);
        assert_relative_eq!(hist.counts[3], 1.0);
        assert_relative_eq!(hist.underflow, 1.0);
        assert_relative_eq!(hist.overflow, 1.0);
        assert_relative_eq!(hist.integral(), 3.0);
        assert_relative_eq!(hist.mean().unwrap(), (0.5 * 2.0 + 3.5) / 3.0);
    }

    #[test]
    fn test_histogram_1d_merge() {
        let axis = Axis::new(4, 0.0, 4.0).unwrap();
        let mut a = Histogram1D::new("h", "a", axis);
        let mut b = Histogram1D::new("h", "b", axis);
        a.fill(1.5);
        b.fill(1.5);
        b.fill_weighted(2.5, 3.0);
        a.merge(&b).unwrap();
        assert_relative_eq!(a.counts[1], 2.0);
        assert_relative_eq!(a.counts[2], 3.0);
        assert_eq!(a.entries, 3);

        let other = Histogram1D::new("h", "c", Axis::new(5, 0.0, 4.0).unwrap());
        assert!(matches!(a.merge(&other), Err(Error::BinningMismatch(_))));
    }

    #[test]
    fn test_histogram_2d_fill() {
        let mut hist = Histogram2D::new(
            "h2",
            "test",
            Axis::new(2, 0.0, 2.0).unwrap(),
            Axis::new(3, 0.0, 3.0).unwrap(),
        )
        .unwrap();
        hist.fill(1.5, 2.5);
        hist.fill(0.5, 0.5);
        hist.fill(5.0, 0.5);
        hist.fill(0.5, f64::NAN);

        assert_eq!(hist.entries, 3);
        assert_relative_eq!(hist.bin_content(1, 2).unwrap(), 1.0);
        assert_relative_eq!(hist.bin_content(0, 0).unwrap(), 1.0);
        assert_relative_eq!(hist.out_of_range, 1.0);
        assert_relative_eq!(hist.integral(), 2.0);
        assert_eq!(hist.bin_content(2, 0), None);
    }
}
