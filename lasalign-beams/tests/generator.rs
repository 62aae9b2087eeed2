#![allow(clippy::cast_precision_loss)]
use lasalign_beams::{BeamId, LaserBeamGun, LaserGunConfig, Ring};

#[test]
fn test_same_seed_same_primaries() {
    let config = LaserGunConfig::new().with_photons_in_beam(4).with_seed(99);
    let mut a = LaserBeamGun::new(config.clone()).unwrap();
    let mut b = LaserBeamGun::new(config).unwrap();
    for event in 0..3 {
        assert_eq!(a.generate_primaries(event), b.generate_primaries(event));
    }

    let mut c = LaserBeamGun::new(LaserGunConfig::new().with_photons_in_beam(4).with_seed(100)).unwrap();
    let mut d = LaserBeamGun::new(LaserGunConfig::new().with_photons_in_beam(4).with_seed(99)).unwrap();
    assert_ne!(c.generate_primaries(0), d.generate_primaries(0));
}

#[test]
fn test_divergence_spread() {
    let sigma = 2.0e-3;
    let config = LaserGunConfig::new()
        .with_photons_in_beam(500)
        .with_divergence(sigma);
    let mut gun = LaserBeamGun::new(config).unwrap();
    let event = gun.generate_primaries(0);

    // The polar deflection is |N(0, σ)|, so its RMS is σ.
    let sum_sq: f64 = event
        .photons
        .iter()
        .map(|p| {
            let theta = (-p.direction.z).clamp(-1.0, 1.0).acos();
            theta * theta
        })
        .sum();
    let rms = (sum_sq / event.photons.len() as f64).sqrt();
    assert!((rms - sigma).abs() < 0.2 * sigma, "rms deflection {rms}");

    for photon in &event.photons {
        assert!((photon.direction.norm() - 1.0).abs() < 1e-12);
        assert!(photon.direction.z < 0.0);
        assert!(photon.polarization.dot(&photon.direction).abs() < 1e-12);
    }
}

#[test]
fn test_photons_start_at_their_beam() {
    let mut gun = LaserBeamGun::new(LaserGunConfig::new().with_photons_in_beam(2)).unwrap();
    let event = gun.generate_primaries(1);
    let beams: Vec<BeamId> = BeamId::all().collect();
    for (i, photon) in event.photons.iter().enumerate() {
        let beam = beams[i / 2];
        assert_eq!(photon.beam, beam);
        assert_eq!(photon.position, beam.origin());
    }
    assert_eq!(event.photons[0].beam.ring, Ring::Ring4);
    assert_eq!(event.photons[31].beam.ring, Ring::Ring6);
}
