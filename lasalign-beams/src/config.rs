//! Laser gun configuration.

use crate::{Error, Result};

/// Configuration of the laser beam gun.
#[derive(Clone, Debug, PartialEq)]
pub struct LaserGunConfig {
    /// Photons emitted per gun shot (vertex multiplicity).
    pub photons_in_gun: u32,
    /// Gun shots per beam and event.
    pub photons_in_beam: u32,
    /// Photon energy in electronvolts (1.15 eV for the 1075 nm laser).
    pub photon_energy_ev: f64,
    /// Standard deviation of the polar deflection from the beam axis (radians).
    pub divergence_sigma_rad: f64,
    /// Angle of the linear polarization around the momentum (radians).
    pub polarization_angle_rad: f64,
    /// Seed of the random engine.
    pub seed: u64,
}

impl Default for LaserGunConfig {
    fn default() -> Self {
        Self {
            photons_in_gun: 1,
            photons_in_beam: 1,
            photon_energy_ev: 1.15,
            divergence_sigma_rad: 1.0e-3,
            polarization_angle_rad: 0.0,
            seed: 12345,
        }
    }
}

impl LaserGunConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of photons per gun shot.
    #[must_use]
    pub fn with_photons_in_gun(mut self, photons: u32) -> Self {
        self.photons_in_gun = photons;
        self
    }

    /// Sets the number of shots per beam.
    #[must_use]
    pub fn with_photons_in_beam(mut self, photons: u32) -> Self {
        self.photons_in_beam = photons;
        self
    }

    /// Sets the photon energy in electronvolts.
    #[must_use]
    pub fn with_photon_energy_ev(mut self, energy: f64) -> Self {
        self.photon_energy_ev = energy;
        self
    }

    /// Sets the angular divergence.
    #[must_use]
    pub fn with_divergence(mut self, sigma_rad: f64) -> Self {
        self.divergence_sigma_rad = sigma_rad;
        self
    }

    /// Sets the polarization angle.
    #[must_use]
    pub fn with_polarization_angle(mut self, angle_rad: f64) -> Self {
        self.polarization_angle_rad = angle_rad;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] for zero photon counts, a non-positive
    /// energy, a negative divergence or a non-finite angle.
    pub fn validate(&self) -> Result<()> {
        if self.photons_in_gun == 0 || self.photons_in_beam == 0 {
            return Err(Error::ConfigError(
                "photons_in_gun and photons_in_beam must be at least 1".to_string(),
            ));
        }
        if !self.photon_energy_ev.is_finite() || self.photon_energy_ev <= 0.0 {
            return Err(Error::ConfigError(format!(
                "photon energy must be positive, got {} eV",
                self.photon_energy_ev
            )));
        }
        if !self.divergence_sigma_rad.is_finite() || self.divergence_sigma_rad < 0.0 {
            return Err(Error::ConfigError(format!(
                "divergence must be non-negative, got {}",
                self.divergence_sigma_rad
            )));
        }
        if !self.polarization_angle_rad.is_finite() {
            return Err(Error::ConfigError(
                "polarization angle must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
