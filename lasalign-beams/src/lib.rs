//! lasalign-beams: Primary photon generation for the endcap laser beams.
//!
//! The laser alignment system of the minus-side tracker endcap shoots
//! eight beams through each of two rings of modules. This crate produces
//! the optical-photon primaries for those beams: start vertex, Gaussian
//! smeared direction, energy and linear polarization. Transporting the
//! photons through the detector is left to the simulation engine.
//!
#![warn(missing_docs)]

mod config;
mod error;
mod gun;
pub mod layout;
pub mod polarization;

pub use config::LaserGunConfig;
pub use error::{Error, Result};
pub use gun::{LaserBeamGun, PrimaryEvent, PrimaryPhoton};
pub use layout::{BeamId, Ring};
pub use polarization::polarization;
