//! Linear polarization of optical photons.

use nalgebra::Vector3;

/// Polarization vector for a photon moving along `direction`.
///
/// The vector is perpendicular to the momentum. With `e⊥ = x̂ × k`
/// (normalized, `ẑ` when `k` is parallel to `x̂`) and `e∥ = e⊥ × k`,
/// the result is `cos(angle)·e∥ + sin(angle)·e⊥`.
///
/// `direction` must be a unit vector.
#[must_use]
pub fn polarization(direction: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let product = Vector3::x().cross(direction);
    let modul2 = product.norm_squared();
    let e_perpendicular = if modul2 > 0.0 {
        product / modul2.sqrt()
    } else {
        Vector3::z()
    };
    let e_parallel = e_perpendicular.cross(direction);
    e_parallel * angle.cos() + e_perpendicular * angle.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_beam_axis_polarization() {
        let k = -Vector3::z();
        let p0 = polarization(&k, 0.0);
        assert_relative_eq!(p0, -Vector3::x(), epsilon = 1e-12);

        let p90 = polarization(&k, FRAC_PI_2);
        assert_relative_eq!(p90, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular_and_normalized() {
        let directions = [
            Vector3::new(0.3, -0.4, -0.866_025_403_784_438_6),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        for k in directions {
            let k = k.normalize();
            for i in 0..8 {
                let p = polarization(&k, f64::from(i) * 0.7);
                assert_relative_eq!(p.dot(&k), 0.0, epsilon = 1e-12);
                assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
            }
        }
    }
}
