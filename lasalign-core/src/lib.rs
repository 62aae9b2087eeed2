//! lasalign-core: Core types for laser alignment simulation analysis.
//!
//! This crate provides the detector region tags, simulated hit types,
//! the angle normalizer and the hit classifier that turns a hit position
//! into the cylindrical quantities used for histogramming.
//!

pub mod angle;
pub mod classify;
pub mod detid;
pub mod error;
pub mod hit;
pub mod region;
pub mod soa;

pub use angle::{normalize, TWO_PI};
pub use classify::{classify, try_classify, ClassificationResult};
pub use detid::{DetId, EndcapSide};
pub use error::{Error, Result};
pub use hit::{Hit, SimHit};
pub use region::{DetectorRegion, Subsystem};
pub use soa::SimHitBatch;
