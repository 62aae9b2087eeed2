//! The laser beam gun.

use crate::layout::BeamId;
use crate::polarization::polarization;
use crate::{Error, LaserGunConfig, Result};
use log::{debug, info};
use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::f64::consts::TAU;

/// Random engine driving the gun.
type Engine = Xoshiro256PlusPlus;

/// One gun shot: `multiplicity` identical photons from a common vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryPhoton {
    /// Beam that produced the shot.
    pub beam: BeamId,
    /// Start vertex (mm).
    pub position: Point3<f64>,
    /// Unit momentum direction.
    pub direction: Vector3<f64>,
    /// Unit polarization vector, perpendicular to `direction`.
    pub polarization: Vector3<f64>,
    /// Kinetic energy (eV).
    pub energy_ev: f64,
    /// Number of photons sharing this vertex.
    pub multiplicity: u32,
}

/// Primaries of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryEvent {
    /// Event number.
    pub event_id: u64,
    /// Gun shots, grouped by beam in [`BeamId::all`] order.
    pub photons: Vec<PrimaryPhoton>,
}

impl PrimaryEvent {
    /// Total number of photons, counting multiplicities.
    #[must_use]
    pub fn photon_count(&self) -> u64 {
        self.photons.iter().map(|p| u64::from(p.multiplicity)).sum()
    }
}

/// Primary generator for the sixteen endcap laser beams.
pub struct LaserBeamGun {
    config: LaserGunConfig,
    rng: Engine,
    divergence: Normal<f64>,
}

impl LaserBeamGun {
    /// Creates a gun after validating `config`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: LaserGunConfig) -> Result<Self> {
        config.validate()?;
        let divergence = Normal::new(0.0, config.divergence_sigma_rad)?;
        info!(
            "laser gun: {} photon(s) per shot, {} shot(s) per beam, {} eV, seed {}",
            config.photons_in_gun, config.photons_in_beam, config.photon_energy_ev, config.seed
        );
        Ok(Self {
            rng: Engine::seed_from_u64(config.seed),
            config,
            divergence,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LaserGunConfig {
        &self.config
    }

    /// Changes the polarization angle of subsequently generated photons.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] for a non-finite angle; the current
    /// angle is kept.
    pub fn set_polarization_angle(&mut self, angle_rad: f64) -> Result<()> {
        if !angle_rad.is_finite() {
            return Err(Error::ConfigError(format!(
                "polarization angle must be finite, got {angle_rad}"
            )));
        }
        self.config.polarization_angle_rad = angle_rad;
        Ok(())
    }

    /// Draws a direction deflected from the beam axis by a Gaussian polar angle.
    fn smeared_direction(&mut self) -> Vector3<f64> {
        let theta: f64 = self.divergence.sample(&mut self.rng).abs();
        let psi: f64 = self.rng.gen_range(0.0..TAU);
        let (sin_theta, cos_theta) = theta.sin_cos();
        Vector3::new(sin_theta * psi.cos(), sin_theta * psi.sin(), -cos_theta)
    }

    /// Generates the primaries of one event.
    pub fn generate_primaries(&mut self, event_id: u64) -> PrimaryEvent {
        let shots = self.config.photons_in_beam as usize;
        let mut photons = Vec::with_capacity(16 * shots);

        for beam in BeamId::all() {
            let position = beam.origin();
            for _ in 0..shots {
                let direction = self.smeared_direction();
                photons.push(PrimaryPhoton {
                    beam,
                    position,
                    direction,
                    polarization: polarization(&direction, self.config.polarization_angle_rad),
                    energy_ev: self.config.photon_energy_ev,
                    multiplicity: self.config.photons_in_gun,
                });
            }
        }

        let event = PrimaryEvent { event_id, photons };
        debug!(
            "event {event_id}: {} shots, {} photons",
            event.photons.len(),
            event.photon_count()
        );
        event
    }
}
