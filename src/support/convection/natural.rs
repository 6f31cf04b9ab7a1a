//! Buoyancy-driven convection.

/// Grashof number `g·β·ΔT·L³ / ν²`.
///
/// Arguments are gravitational acceleration (m/s²), volumetric expansion
/// coefficient (1/K), temperature difference (K), characteristic length (m)
/// and kinematic viscosity (m²/s).
#[must_use]
pub fn grashof(gravity: f64, expansion: f64, delta_t: f64, length: f64, kinematic: f64) -> f64 {
    gravity * expansion * delta_t * length.powi(3) / kinematic.powi(2)
}

/// Rayleigh number `Gr·Pr`.
#[must_use]
pub fn rayleigh(grashof: f64, prandtl: f64) -> f64 {
    grashof * prandtl
}

/// Churchill–Chu average Nusselt number for a vertical plate, valid over
/// the full laminar and turbulent range:
///
/// ```text
/// Nu = (0.825 + 0.387·Ra^(1/6) / (1 + (0.492/Pr)^(9/16))^(8/27))²
/// ```
///
/// Tall vertical cylinders are treated as plates.
/// A negative Rayleigh number (stable stratification) yields `NaN`.
#[must_use]
pub fn churchill_chu(rayleigh: f64, prandtl: f64) -> f64 {
    let prandtl_factor = (1.0 + (0.492 / prandtl).powf(9.0 / 16.0)).powf(8.0 / 27.0);
    (0.825 + 0.387 * rayleigh.powf(1.0 / 6.0) / prandtl_factor).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn grashof_scales_with_cube_of_length() {
        let small = grashof(9.81, 1.0 / 273.15, 175.0, 0.1, 1.8e-5);
        let large = grashof(9.81, 1.0 / 273.15, 175.0, 0.2, 1.8e-5);
        assert_relative_eq!(large / small, 8.0, max_relative = 1e-12);
    }

    #[test]
    fn quiescent_limit() {
        // With no buoyancy the correlation reduces to its conduction floor.
        let nu = churchill_chu(0.0, 0.71);
        assert_relative_eq!(nu, 0.825 * 0.825, max_relative = 1e-12);
    }

    #[test]
    fn increases_with_rayleigh() {
        let low = churchill_chu(1e6, 0.71);
        let high = churchill_chu(1e9, 0.71);
        assert!(high > low);
    }

    #[test]
    fn stable_stratification_is_undefined() {
        assert!(churchill_chu(-1.0, 0.71).is_nan());
    }
}
